//! Tests for mapping outcomes onto HTTP responses and OpenAPI declarations.

use super::*;
use crate::domain::ValidationError;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::io;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
struct Widget {
    name: String,
}

#[fixture]
fn widget() -> Widget {
    Widget {
        name: "sprocket".to_owned(),
    }
}

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

async fn body_is_empty(response: HttpResponse) -> bool {
    to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds")
        .is_empty()
}

fn content_type(response: &HttpResponse) -> Option<&str> {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}

#[rstest]
#[actix_web::test]
async fn ok_with_value_is_200(widget: Widget) {
    let projected = OkOutcome::new(Outcome::ok(widget.clone()));

    assert_eq!(projected.status_code(), StatusCode::OK);
    assert_eq!(projected.value(), Some(&widget));

    let response = projected.to_response(&ProjectionConfig::default());
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "name": "sprocket" }));
}

#[rstest]
#[actix_web::test]
async fn ok_with_unit_is_204() {
    let projected = NoContentOutcome::new(Outcome::no_content());

    assert_eq!(projected.status_code(), StatusCode::NO_CONTENT);
    assert!(projected.value().is_none());
    let response = projected.to_response(&ProjectionConfig::default());
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_is_empty(response).await);
}

#[rstest]
fn success_without_value_slot_is_204() {
    let projected = OkOutcome::<Widget>::new(Outcome::from_untyped(Outcome::no_content()));
    assert_eq!(projected.status_code(), StatusCode::NO_CONTENT);
}

#[rstest]
#[case::empty(Vec::new(), StatusCode::NO_CONTENT)]
#[case::items(vec![Widget { name: "a".to_owned() }], StatusCode::OK)]
fn collections_are_empty_by_items(#[case] items: Vec<Widget>, #[case] expected: StatusCode) {
    let projected = CollectionOutcome::new(Outcome::ok(items));
    assert_eq!(projected.status_code(), expected);
}

#[rstest]
fn empty_vec_under_ok_shape_is_still_200() {
    let projected = OkOutcome::new(Outcome::ok(Vec::<Widget>::new()));
    assert_eq!(projected.status_code(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn created_with_id_sets_location(widget: Widget) {
    let id = Uuid::new_v4();
    let projected = CreatedOutcome::new(Outcome::created(id, widget.clone()));

    assert_eq!(projected.status_code(), StatusCode::CREATED);
    assert_eq!(projected.value(), Some(&widget));

    let response = projected.to_response(&ProjectionConfig::default());
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("location header present")
        .to_str()
        .expect("location is ASCII")
        .to_owned();
    assert_eq!(location, id.to_string());
    assert_eq!(body_json(response).await, json!({ "name": "sprocket" }));
}

#[rstest]
fn created_location_uses_configured_base(widget: Widget) {
    let config = ProjectionConfig::new().with_location_base("/api/v1/widgets/");
    let response = CreatedOutcome::new(Outcome::created(42, widget)).to_response(&config);

    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&HeaderValue::from_static("/api/v1/widgets/42"))
    );
}

#[rstest]
#[actix_web::test]
async fn created_without_value_has_no_body() {
    let projected = CreatedIdOutcome::new(Outcome::created_without_value("w-1"));

    assert!(projected.value().is_none());
    let response = projected.to_response(&ProjectionConfig::default());
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key(header::LOCATION));
    assert!(body_is_empty(response).await);
}

#[rstest]
fn created_without_id_omits_location() {
    let stripped = Outcome::<Widget>::from_untyped(Outcome::created_without_value("w-1"))
        .without_id();
    let response = CreatedOutcome::new(stripped).to_response(&ProjectionConfig::default());

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(!response.headers().contains_key(header::LOCATION));
}

#[rstest]
fn unencodable_location_is_dropped(widget: Widget) {
    let response = CreatedOutcome::new(Outcome::created("bad\nid", widget))
        .to_response(&ProjectionConfig::default());

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(!response.headers().contains_key(header::LOCATION));
}

#[rstest]
#[actix_web::test]
async fn invalid_maps_fields_to_messages() {
    let outcome: Outcome<Widget> = Outcome::invalid([
        ValidationError::for_field("name", "required"),
        ValidationError::new("not addressable"),
        ValidationError::for_field("name", "too short"),
        ValidationError::for_field("size", "must be positive"),
    ])
    .expect("non-empty");
    let projected = OkOutcome::new(outcome);

    assert_eq!(projected.status_code(), StatusCode::BAD_REQUEST);
    assert!(projected.value().is_none());

    let response = projected.to_response(&ProjectionConfig::default());
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), Some(PROBLEM_CONTENT_TYPE));
    let body = body_json(response).await;
    assert_eq!(body["status"], json!(400));
    assert_eq!(
        body["errors"],
        json!({ "name": ["required", "too short"], "size": ["must be positive"] })
    );
}

#[rstest]
#[actix_web::test]
async fn invalid_single_field_scenario() {
    let outcome: Outcome<Widget> =
        Outcome::invalid([ValidationError::for_field("name", "required")]).expect("non-empty");

    let response = OkOutcome::new(outcome).to_response(&ProjectionConfig::default());
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errors"], json!({ "name": ["required"] }));
}

#[rstest]
#[actix_web::test]
async fn invalid_without_errors_is_plain_bad_request() {
    let invalid: Outcome<Widget> =
        Outcome::invalid([ValidationError::new("unused")]).expect("non-empty");
    let stripped = invalid.without_validation_errors();

    let response = OkOutcome::new(stripped).to_response(&ProjectionConfig::default());
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_is_empty(response).await);
}

#[rstest]
#[actix_web::test]
async fn not_found_is_empty_404() {
    let projected = OkOutcome::<Widget>::new(Outcome::not_found_with("no widget"));

    assert_eq!(projected.status_code(), StatusCode::NOT_FOUND);
    let response = projected.to_response(&ProjectionConfig::default());
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_is_empty(response).await);
}

#[rstest]
#[case::redacted(ProjectionConfig::default(), None)]
#[case::exposed(ProjectionConfig::new().with_fault_detail(true), Some("disk on fire"))]
#[actix_web::test]
async fn error_is_500_problem(
    #[case] config: ProjectionConfig,
    #[case] expected_detail: Option<&str>,
) {
    let projected = OkOutcome::<Widget>::new(Outcome::error(io::Error::other("disk on fire")));

    assert_eq!(projected.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let response = projected.to_response(&config);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type(&response), Some(PROBLEM_CONTENT_TYPE));
    let body = body_json(response).await;
    assert_eq!(body["status"], json!(500));
    assert_eq!(body.get("detail").and_then(Value::as_str), expected_detail);
}

#[rstest]
#[actix_web::test]
async fn projecting_twice_is_repeatable(widget: Widget) {
    let projected = CreatedOutcome::new(Outcome::created(7, widget.clone()));

    let first = projected.to_response(&ProjectionConfig::default());
    let second = projected.to_response(&ProjectionConfig::default());
    assert_eq!(first.status(), second.status());
    assert_eq!(
        first.headers().get(header::LOCATION),
        second.headers().get(header::LOCATION)
    );
    assert_eq!(body_json(first).await, body_json(second).await);
    assert_eq!(projected.value(), Some(&widget));
    assert_eq!(projected.outcome().status(), Status::Created);
}

fn declared_codes<R: IntoResponses>() -> Vec<String> {
    R::responses().into_keys().collect()
}

#[rstest]
fn ok_shape_declares_failure_codes() {
    assert_eq!(declared_codes::<OkOutcome<Widget>>(), ["200", "400", "404", "500"]);
}

#[rstest]
fn collection_shape_declares_no_content() {
    assert_eq!(
        declared_codes::<CollectionOutcome<Widget>>(),
        ["200", "204", "400", "404", "500"]
    );
}

#[rstest]
fn created_shapes_declare_location() {
    for responses in [
        CreatedOutcome::<Widget>::responses(),
        CreatedIdOutcome::responses(),
    ] {
        let keys: Vec<_> = responses.keys().map(String::as_str).collect();
        assert_eq!(keys, ["201", "400", "404", "500"]);
        match responses.get("201") {
            Some(RefOr::T(response)) => assert!(response.headers.contains_key("Location")),
            _ => panic!("201 response declared inline"),
        }
    }
}

#[rstest]
fn no_content_shape_declares_204() {
    assert_eq!(declared_codes::<NoContentOutcome>(), ["204", "400", "404", "500"]);
}
