//! HTTP inbound adapter projecting outcomes onto Actix Web responses.
//!
//! Handlers return an [`HttpOutcome`] (usually through one of the shape
//! aliases) and Actix writes the mapped response. The same type implements
//! utoipa's `IntoResponses`, so `#[utoipa::path(responses(..))]` documents
//! the success shape together with the 400, 404 and 500 failure shapes.

pub mod config;
pub mod problem;
pub mod projection;
pub mod shape;

pub use config::ProjectionConfig;
pub use problem::{ProblemDetails, ValidationProblemDetails};
pub use projection::{
    CollectionOutcome, CreatedIdOutcome, CreatedOutcome, HttpOutcome, NoContentOutcome, OkOutcome,
};
pub use shape::{
    CollectionShape, CreatedIdShape, CreatedShape, NoContentShape, OkShape, ShapeResponses,
    SuccessShape,
};
