//! Error taxonomy for outcomes.
//!
//! - [`ArgumentError`] signals caller misuse of the outcome factories. It is
//!   returned immediately and never retried.
//! - [`NotFoundError`] records an expected absence.
//! - [`OutcomeFault`] is raised by the `ensure_*` guards when a caller
//!   insists on success.
//!
//! Validation faults live in [`super::validation`].

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::validation::AggregateValidationError;

/// Shared, type-erased fault preserved by failed outcomes.
///
/// Reference counted so outcomes stay cheap to clone and the original fault
/// stays pointer-identical when re-raised.
pub type Fault = Arc<dyn StdError + Send + Sync + 'static>;

/// Misuse of an outcome factory.
///
/// # Examples
/// ```
/// use outcome::{ArgumentError, Outcome};
///
/// let result = Outcome::<u32>::try_ok(None);
/// assert!(matches!(result, Err(ArgumentError::Missing { argument: "value" })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required argument was absent.
    #[error("{argument} must not be absent")]
    Missing {
        /// Name of the absent argument.
        argument: &'static str,
    },
    /// `invalid` was called without any validation errors.
    #[error("validation errors must not be empty")]
    EmptyValidationErrors,
    /// `invalid` received a "no error" entry among its validation errors.
    #[error("validation errors must not contain a success entry")]
    SuccessEntry,
}

impl ArgumentError {
    pub(crate) const fn missing(argument: &'static str) -> Self {
        Self::Missing { argument }
    }
}

/// The requested resource does not exist.
///
/// # Examples
/// ```
/// use outcome::NotFoundError;
///
/// assert_eq!(NotFoundError::new("no widget 7").to_string(), "no widget 7");
/// assert_eq!(
///     NotFoundError::default().to_string(),
///     "the requested resource was not found"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotFoundError {
    message: Option<String>,
}

const DEFAULT_NOT_FOUND_MESSAGE: &str = "the requested resource was not found";

impl NotFoundError {
    /// Create a not-found fault carrying a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Message supplied by the caller, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or(DEFAULT_NOT_FOUND_MESSAGE))
    }
}

impl StdError for NotFoundError {}

/// Fault raised when a caller insists that an outcome succeeded.
///
/// The variant is dictated by the outcome's status; see
/// [`Outcome::ensure_success`](super::Outcome::ensure_success).
#[derive(Debug, Clone, Error)]
pub enum OutcomeFault {
    /// The outcome was invalid; carries every validation error.
    #[error(transparent)]
    Validation(#[from] AggregateValidationError),
    /// The outcome was not found and held no fault of its own.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// The outcome failed without recording a fault.
    #[error("an unknown error occurred")]
    Unknown,
    /// The outcome succeeded but carries no meaningful value.
    #[error("the outcome does not carry a value")]
    MissingValue,
    /// The fault stored on the outcome, re-raised unchanged.
    #[error(transparent)]
    Raised(Fault),
}

impl OutcomeFault {
    /// The stored fault when this is a re-raise.
    #[must_use]
    pub fn raised(&self) -> Option<&Fault> {
        match self {
            Self::Raised(fault) => Some(fault),
            _ => None,
        }
    }
}
