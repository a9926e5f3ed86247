//! Projection of outcomes onto HTTP responses.
//!
//! The mapping is a pure function of the outcome's fields; first matching
//! rule wins:
//!
//! | Outcome                                   | Response                    |
//! |-------------------------------------------|-----------------------------|
//! | `Success` without a meaningful value      | 204                         |
//! | `Success` with a value                    | 200, JSON value             |
//! | `Created` with an id                      | 201, `Location`, JSON value |
//! | `Created` without an id                   | 201, JSON value             |
//! | `Invalid` with errors                     | 400, validation problem     |
//! | `Invalid` without errors                  | 400                         |
//! | `NotFound`                                | 404                         |
//! | anything else                             | 500, problem details        |

use std::collections::BTreeMap;
use std::marker::PhantomData;

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::error;
use utoipa::openapi::{RefOr, Response};
use utoipa::{IntoResponses, PartialSchema};

use super::config::ProjectionConfig;
use super::problem::{PROBLEM_CONTENT_TYPE, ProblemDetails, ValidationProblemDetails};
use super::shape::{
    CollectionShape, CreatedIdShape, CreatedShape, NoContentShape, OkShape, ShapeResponses,
    SuccessShape, content_response, empty_response,
};
use crate::domain::{Outcome, ResourceId, Status, Unit, group_by_field};

/// An [`Outcome`] bound to a success shape `S`, ready to be written as an
/// HTTP response.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use outcome::Outcome;
/// use outcome::inbound::http::OkOutcome;
///
/// let response = OkOutcome::new(Outcome::ok("hello"));
/// assert_eq!(response.status_code(), StatusCode::OK);
/// assert_eq!(response.value(), Some(&"hello"));
/// ```
pub struct HttpOutcome<T, S = OkShape> {
    outcome: Outcome<T>,
    shape: PhantomData<fn() -> S>,
}

/// Outcome written as `200 OK`.
pub type OkOutcome<T> = HttpOutcome<T, OkShape>;
/// Outcome written as a JSON array, or `204` when there are no items.
pub type CollectionOutcome<T> = HttpOutcome<Vec<T>, CollectionShape>;
/// Outcome written as `201 Created` with a body.
pub type CreatedOutcome<T> = HttpOutcome<T, CreatedShape>;
/// Outcome written as `201 Created` without a body.
pub type CreatedIdOutcome = HttpOutcome<Unit, CreatedIdShape>;
/// Outcome written as `204 No Content`.
pub type NoContentOutcome = HttpOutcome<Unit, NoContentShape>;

/// Response selected for an outcome, before it is written.
enum Mapped<'a, T> {
    NoContent,
    Ok(&'a T),
    Created {
        id: Option<&'a ResourceId>,
        value: Option<&'a T>,
    },
    ValidationProblem(IndexMap<String, Vec<String>>),
    BadRequest,
    NotFound,
    ServerError,
}

impl<T> Mapped<'_, T> {
    const fn status_code(&self) -> StatusCode {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT,
            Self::Ok(_) => StatusCode::OK,
            Self::Created { .. } => StatusCode::CREATED,
            Self::ValidationProblem(_) | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T, S> HttpOutcome<T, S> {
    /// Bind `outcome` to the shape `S`.
    #[must_use]
    pub const fn new(outcome: Outcome<T>) -> Self {
        Self {
            outcome,
            shape: PhantomData,
        }
    }

    /// The wrapped outcome.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Unwrap the outcome.
    #[must_use]
    pub fn into_outcome(self) -> Outcome<T> {
        self.outcome
    }
}

impl<T, S> HttpOutcome<T, S>
where
    T: 'static,
    S: SuccessShape<T>,
{
    fn map(&self) -> Mapped<'_, T> {
        let outcome = &self.outcome;
        match outcome.status() {
            Status::Success => match self.value() {
                Some(value) if !S::is_empty(value) => Mapped::Ok(value),
                _ => Mapped::NoContent,
            },
            Status::Created => Mapped::Created {
                id: outcome.id(),
                value: self.value(),
            },
            Status::Invalid => match outcome.validation_errors() {
                Some(errors) if !errors.is_empty() => {
                    Mapped::ValidationProblem(group_by_field(errors))
                }
                _ => Mapped::BadRequest,
            },
            Status::NotFound => Mapped::NotFound,
            Status::Error => Mapped::ServerError,
        }
    }

    /// Status code the outcome maps to.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.map().status_code()
    }

    /// Value written in the response body; absent for failures, missing
    /// values and [`Unit`].
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.outcome.meaningful_value()
    }
}

impl<T, S> HttpOutcome<T, S>
where
    T: Serialize + 'static,
    S: SuccessShape<T>,
{
    /// Write the response using `config`.
    #[must_use]
    pub fn to_response(&self, config: &ProjectionConfig) -> HttpResponse {
        match self.map() {
            Mapped::NoContent => HttpResponse::NoContent().finish(),
            Mapped::Ok(value) => HttpResponse::Ok().json(value),
            Mapped::Created { id, value } => {
                let mut builder = HttpResponse::Created();
                if let Some(id) = id {
                    let location = config.location_for(id);
                    match HeaderValue::from_str(&location) {
                        Ok(header_value) => {
                            builder.insert_header((header::LOCATION, header_value));
                        }
                        Err(error) => {
                            error!(%error, %location, "failed to encode location header");
                        }
                    }
                }
                match value {
                    Some(value) => builder.json(value),
                    None => builder.finish(),
                }
            }
            Mapped::ValidationProblem(errors) => {
                problem_response(StatusCode::BAD_REQUEST, &ValidationProblemDetails::new(errors))
            }
            Mapped::BadRequest => HttpResponse::BadRequest().finish(),
            Mapped::NotFound => HttpResponse::NotFound().finish(),
            Mapped::ServerError => {
                let detail = config
                    .exposes_fault_detail()
                    .then(|| self.outcome.fault().map(ToString::to_string))
                    .flatten();
                problem_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &ProblemDetails::server_error(detail),
                )
            }
        }
    }
}

fn problem_response(status: StatusCode, problem: &impl Serialize) -> HttpResponse {
    match serde_json::to_string(problem) {
        Ok(body) => HttpResponse::build(status)
            .content_type(PROBLEM_CONTENT_TYPE)
            .body(body),
        Err(error) => {
            error!(%error, %status, "failed to serialise problem details");
            HttpResponse::InternalServerError().finish()
        }
    }
}

impl<T, S> Responder for HttpOutcome<T, S>
where
    T: Serialize + 'static,
    S: SuccessShape<T>,
{
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        match req.app_data::<web::Data<ProjectionConfig>>() {
            Some(config) => self.to_response(config.get_ref()),
            None => self.to_response(&ProjectionConfig::default()),
        }
    }
}

impl<T, S> IntoResponses for HttpOutcome<T, S>
where
    S: ShapeResponses<T>,
{
    fn responses() -> BTreeMap<String, RefOr<Response>> {
        let mut responses = S::success_responses();
        responses.extend(failure_responses());
        responses
    }
}

fn failure_responses() -> [(String, RefOr<Response>); 3] {
    [
        (
            "400".to_owned(),
            content_response(
                "Validation failed",
                PROBLEM_CONTENT_TYPE,
                ValidationProblemDetails::schema(),
            ),
        ),
        ("404".to_owned(), empty_response("Not found")),
        (
            "500".to_owned(),
            content_response(
                "Internal server error",
                PROBLEM_CONTENT_TYPE,
                ProblemDetails::schema(),
            ),
        ),
    ]
}

impl<T, S> From<Outcome<T>> for HttpOutcome<T, S> {
    fn from(outcome: Outcome<T>) -> Self {
        Self::new(outcome)
    }
}

#[cfg(test)]
mod tests;
