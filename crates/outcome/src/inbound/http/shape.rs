//! Success shapes selecting how a successful outcome is written and
//! documented.
//!
//! The failure half of every projection is fixed (400, 404, 500); the shape
//! decides the success half. [`SuccessShape`] governs the runtime mapping and
//! [`ShapeResponses`] the OpenAPI declaration, so payloads only need a schema
//! when they are documented.

use std::collections::BTreeMap;

use utoipa::openapi::header::Header;
use utoipa::openapi::schema::{Array, Schema};
use utoipa::openapi::{ContentBuilder, RefOr, Response, ResponseBuilder};
use utoipa::{PartialSchema, ToSchema};

/// OpenAPI responses keyed by status code.
pub type Responses = BTreeMap<String, RefOr<Response>>;

/// Runtime behaviour of a success shape.
pub trait SuccessShape<T> {
    /// Whether a present value still counts as "nothing to return".
    fn is_empty(_value: &T) -> bool {
        false
    }
}

/// OpenAPI declaration of a success shape.
pub trait ShapeResponses<T>: SuccessShape<T> {
    /// Success responses produced by the shape.
    fn success_responses() -> Responses;
}

/// `200 OK` with the value as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkShape;

/// `200 OK` with a JSON array, or `204 No Content` when the array is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionShape;

/// `201 Created` with the value as JSON and a `Location` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreatedShape;

/// `201 Created` with a `Location` header and no body.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreatedIdShape;

/// `204 No Content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContentShape;

impl<T> SuccessShape<T> for OkShape {}
impl<T> SuccessShape<T> for CreatedShape {}
impl<T> SuccessShape<T> for CreatedIdShape {}
impl<T> SuccessShape<T> for NoContentShape {}

impl<V> SuccessShape<Vec<V>> for CollectionShape {
    fn is_empty(value: &Vec<V>) -> bool {
        value.is_empty()
    }
}

impl<T: ToSchema> ShapeResponses<T> for OkShape {
    fn success_responses() -> Responses {
        Responses::from([(
            "200".to_owned(),
            json_response("Success", T::schema()),
        )])
    }
}

impl<V: ToSchema> ShapeResponses<Vec<V>> for CollectionShape {
    fn success_responses() -> Responses {
        let items = RefOr::T(Schema::Array(Array::new(V::schema())));
        Responses::from([
            ("200".to_owned(), json_response("Success", items)),
            ("204".to_owned(), empty_response("No items")),
        ])
    }
}

impl<T: ToSchema> ShapeResponses<T> for CreatedShape {
    fn success_responses() -> Responses {
        let response = ResponseBuilder::new()
            .description("Created")
            .header("Location", location_header())
            .content(
                "application/json",
                ContentBuilder::new().schema(Some(T::schema())).build(),
            )
            .build();
        Responses::from([("201".to_owned(), RefOr::T(response))])
    }
}

impl<T> ShapeResponses<T> for CreatedIdShape {
    fn success_responses() -> Responses {
        let response = ResponseBuilder::new()
            .description("Created")
            .header("Location", location_header())
            .build();
        Responses::from([("201".to_owned(), RefOr::T(response))])
    }
}

impl<T> ShapeResponses<T> for NoContentShape {
    fn success_responses() -> Responses {
        Responses::from([("204".to_owned(), empty_response("No content"))])
    }
}

pub(crate) fn json_response(description: &str, schema: RefOr<Schema>) -> RefOr<Response> {
    content_response(description, "application/json", schema)
}

pub(crate) fn content_response(
    description: &str,
    content_type: &str,
    schema: RefOr<Schema>,
) -> RefOr<Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content(content_type, ContentBuilder::new().schema(Some(schema)).build())
            .build(),
    )
}

pub(crate) fn empty_response(description: &str) -> RefOr<Response> {
    RefOr::T(ResponseBuilder::new().description(description).build())
}

fn location_header() -> Header {
    Header::new(String::schema())
}
