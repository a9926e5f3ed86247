//! Transport-agnostic outcome model.
//!
//! Purpose: define the status taxonomy, the [`Outcome`] container and the
//! faults raised when callers insist on success. Nothing here knows about
//! HTTP or request pipelines; inbound adapters translate these types.
//!
//! Public surface:
//! - [`Status`]: closed set of terminal states.
//! - [`Unit`]: the "no payload" value.
//! - [`Outcome`]: status-tagged result container.
//! - [`ValidationError`], [`ValidationFault`], [`AggregateValidationError`]:
//!   field-level validation failures and their aggregate.
//! - [`ArgumentError`], [`NotFoundError`], [`OutcomeFault`], [`Fault`]: error
//!   taxonomy.

pub mod error;
pub mod outcome;
pub mod status;
pub mod unit;
pub mod validation;

pub use self::error::{ArgumentError, Fault, NotFoundError, OutcomeFault};
pub use self::outcome::{Outcome, ResourceId};
pub use self::status::Status;
pub use self::unit::Unit;
pub use self::validation::{
    AggregateValidationError, ValidationError, ValidationFault, group_by_field,
};
