//! Status-tagged operation outcomes.
//!
//! An [`Outcome`] records how an operation ended: with a value, with a newly
//! created resource, with nothing, with validation failures, with a missing
//! resource, or with an unexpected fault. Expected failures travel as data.
//!
//! Two inbound adapters lower outcomes into external protocols:
//!
//! - [`inbound::http`] projects an outcome onto an Actix Web response and
//!   declares the matching OpenAPI responses.
//! - [`inbound::pipeline`] turns a fault escaping a request handler back into
//!   an outcome when the handler is declared to return one.

pub mod domain;
pub mod inbound;

pub use domain::{
    AggregateValidationError, ArgumentError, Fault, NotFoundError, Outcome, OutcomeFault,
    ResourceId, Status, Unit, ValidationError, ValidationFault,
};
