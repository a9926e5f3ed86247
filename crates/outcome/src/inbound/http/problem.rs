//! RFC 9457 problem payloads returned for failed outcomes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Media type of problem responses.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

const BAD_REQUEST_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const SERVER_ERROR_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";

/// Problem payload for server faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    /// Reference identifying the problem type.
    #[serde(rename = "type")]
    #[schema(example = "https://tools.ietf.org/html/rfc9110#section-15.6.1")]
    pub problem_type: String,
    /// Short summary of the problem type.
    #[schema(example = "An error occurred while processing your request.")]
    pub title: String,
    /// HTTP status code.
    #[schema(example = 500)]
    pub status: u16,
    /// Occurrence-specific explanation, present only when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Problem payload for a 500 response.
    #[must_use]
    pub fn server_error(detail: Option<String>) -> Self {
        Self {
            problem_type: SERVER_ERROR_TYPE.to_owned(),
            title: "An error occurred while processing your request.".to_owned(),
            status: 500,
            detail,
        }
    }
}

/// Problem payload for validation failures.
///
/// `errors` maps each field name to its messages, in the order the failures
/// were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationProblemDetails {
    /// Reference identifying the problem type.
    #[serde(rename = "type")]
    #[schema(example = "https://tools.ietf.org/html/rfc9110#section-15.5.1")]
    pub problem_type: String,
    /// Short summary of the problem type.
    #[schema(example = "One or more validation errors occurred.")]
    pub title: String,
    /// HTTP status code.
    #[schema(example = 400)]
    pub status: u16,
    /// Messages keyed by field name.
    #[schema(value_type = Object)]
    pub errors: IndexMap<String, Vec<String>>,
}

impl ValidationProblemDetails {
    /// Problem payload for a 400 response carrying `errors`.
    #[must_use]
    pub fn new(errors: IndexMap<String, Vec<String>>) -> Self {
        Self {
            problem_type: BAD_REQUEST_TYPE.to_owned(),
            title: "One or more validation errors occurred.".to_owned(),
            status: 400,
            errors,
        }
    }
}
