//! The status-tagged outcome container.
//!
//! ## Invariants
//! - The status is fixed at construction; outcomes are never mutated.
//! - Exactly one payload is active for a status: value and id for
//!   [`Status::Created`], value for [`Status::Success`], fault for
//!   [`Status::NotFound`] and [`Status::Error`], validation errors for
//!   [`Status::Invalid`]. Inactive payloads are absent.
//! - Validation errors are never empty when present.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::error::{ArgumentError, Fault, NotFoundError, OutcomeFault};
use super::status::Status;
use super::unit::Unit;
use super::validation::{AggregateValidationError, ValidationError};

/// Rendered identifier of a created resource.
///
/// Any `Display` identifier is accepted; the rendering is what the HTTP
/// projection places in the `Location` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    fn render(id: impl fmt::Display) -> Self {
        Self(id.to_string())
    }

    /// Borrow the rendered identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Result of an operation, tagged with a [`Status`].
///
/// `Outcome` without a type argument is `Outcome<Unit>`, the entry point for
/// operations that return no payload.
///
/// # Examples
/// ```
/// use outcome::{Outcome, Status, ValidationError};
///
/// let found = Outcome::ok(42);
/// assert_eq!(found.value(), Some(&42));
///
/// let rejected: Outcome<u32> =
///     Outcome::invalid([ValidationError::for_field("age", "must be positive")])
///         .expect("at least one validation error");
/// assert_eq!(rejected.status(), Status::Invalid);
/// assert!(rejected.ensure_success().is_err());
/// ```
#[derive(Clone)]
pub struct Outcome<T = Unit> {
    status: Status,
    value: Option<T>,
    id: Option<ResourceId>,
    fault: Option<Fault>,
    validation_errors: Option<Vec<ValidationError>>,
}

impl<T> Outcome<T> {
    fn with_status(status: Status) -> Self {
        Self {
            status,
            value: None,
            id: None,
            fault: None,
            validation_errors: None,
        }
    }

    /// Successful outcome carrying `value`.
    pub fn ok(value: T) -> Self {
        Self {
            value: Some(value),
            ..Self::with_status(Status::Success)
        }
    }

    /// Nullable entry point for [`Outcome::ok`].
    ///
    /// # Errors
    /// Returns [`ArgumentError::Missing`] when `value` is `None`; absence of
    /// data is expressed with [`Outcome::no_content`] instead.
    pub fn try_ok(value: Option<T>) -> Result<Self, ArgumentError> {
        value
            .map(Self::ok)
            .ok_or(ArgumentError::missing("value"))
    }

    /// Outcome for a newly created entity identified by `id`.
    pub fn created(id: impl fmt::Display, value: T) -> Self {
        Self {
            value: Some(value),
            id: Some(ResourceId::render(id)),
            ..Self::with_status(Status::Created)
        }
    }

    /// Nullable entry point for [`Outcome::created`].
    ///
    /// # Errors
    /// Returns [`ArgumentError::Missing`] when `id` is `None`.
    pub fn try_created<I: fmt::Display>(id: Option<I>, value: T) -> Result<Self, ArgumentError> {
        let id = id.ok_or(ArgumentError::missing("id"))?;
        Ok(Self::created(id, value))
    }

    /// The requested resource does not exist.
    pub fn not_found() -> Self {
        Self::not_found_fault(NotFoundError::default())
    }

    /// The requested resource does not exist; `message` explains what was
    /// missing.
    pub fn not_found_with(message: impl Into<String>) -> Self {
        Self::not_found_fault(NotFoundError::new(message))
    }

    fn not_found_fault(error: NotFoundError) -> Self {
        Self {
            fault: Some(Arc::new(error)),
            ..Self::with_status(Status::NotFound)
        }
    }

    /// The input failed validation.
    ///
    /// # Errors
    /// Returns [`ArgumentError::EmptyValidationErrors`] when `errors` is
    /// empty; an invalid outcome must say what was invalid.
    pub fn invalid(
        errors: impl IntoIterator<Item = ValidationError>,
    ) -> Result<Self, ArgumentError> {
        let errors: Vec<_> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(ArgumentError::EmptyValidationErrors);
        }
        Ok(Self {
            validation_errors: Some(errors),
            ..Self::with_status(Status::Invalid)
        })
    }

    /// Nullable entry point for [`Outcome::invalid`]; `None` entries are
    /// "no error" results.
    ///
    /// # Errors
    /// Returns [`ArgumentError::EmptyValidationErrors`] when `results` is
    /// empty and [`ArgumentError::SuccessEntry`] when any entry is `None`.
    pub fn try_invalid(
        results: impl IntoIterator<Item = Option<ValidationError>>,
    ) -> Result<Self, ArgumentError> {
        let errors = results
            .into_iter()
            .map(|result| result.ok_or(ArgumentError::SuccessEntry))
            .collect::<Result<Vec<_>, _>>()?;
        Self::invalid(errors)
    }

    /// An unclassified fault occurred.
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::error_from(Arc::new(error))
    }

    /// An unclassified fault occurred; the shared `fault` is kept as-is.
    pub fn error_from(fault: Fault) -> Self {
        Self {
            fault: Some(fault),
            ..Self::with_status(Status::Error)
        }
    }

    /// Nullable entry point for [`Outcome::error_from`].
    ///
    /// # Errors
    /// Returns [`ArgumentError::Missing`] when `fault` is `None`.
    pub fn try_error(fault: Option<Fault>) -> Result<Self, ArgumentError> {
        fault
            .map(Self::error_from)
            .ok_or(ArgumentError::missing("fault"))
    }

    /// Narrow an untyped outcome to `Outcome<T>`.
    ///
    /// Status, id, fault and validation errors carry over; the value slot is
    /// absent because an untyped outcome has no `T` to offer.
    ///
    /// # Examples
    /// ```
    /// use outcome::{Outcome, Status};
    ///
    /// let untyped: Outcome = Outcome::not_found_with("no widget 7");
    /// let typed = Outcome::<String>::from_untyped(untyped);
    /// assert_eq!(typed.status(), Status::NotFound);
    /// assert!(typed.value().is_none());
    /// ```
    #[must_use]
    pub fn from_untyped(outcome: Outcome) -> Self {
        let Outcome {
            status,
            value: _,
            id,
            fault,
            validation_errors,
        } = outcome;
        Self {
            status,
            value: None,
            id,
            fault,
            validation_errors,
        }
    }

    /// Terminal status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the operation succeeded (`Success` or `Created`).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The value slot, present only for successful outcomes.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the outcome, returning its value slot.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Identifier of the created entity.
    #[must_use]
    pub const fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    /// Root-cause fault for failed outcomes.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// Validation errors of an invalid outcome, in the order given.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        self.validation_errors.as_deref()
    }

    /// Succeed, or raise the fault dictated by the status.
    ///
    /// - `Invalid` raises [`OutcomeFault::Validation`] with every error.
    /// - `NotFound` re-raises the stored fault, else
    ///   [`OutcomeFault::NotFound`].
    /// - Any other failure re-raises the stored fault, else
    ///   [`OutcomeFault::Unknown`].
    ///
    /// # Errors
    /// Returns the fault described above whenever the outcome did not
    /// succeed.
    pub fn ensure_success(&self) -> Result<(), OutcomeFault> {
        if self.is_success() {
            return Ok(());
        }
        let stored = self.fault.clone().map(OutcomeFault::Raised);
        match (self.status, &self.validation_errors) {
            (Status::Invalid, Some(errors)) => Err(OutcomeFault::Validation(
                AggregateValidationError::new(errors.iter().cloned()),
            )),
            (Status::NotFound, _) => {
                Err(stored.unwrap_or_else(|| NotFoundError::default().into()))
            }
            _ => Err(stored.unwrap_or(OutcomeFault::Unknown)),
        }
    }
}

impl<T: 'static> Outcome<T> {
    /// Whether the outcome succeeded with a meaningful value.
    ///
    /// False for absent values and for the [`Unit`] marker.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.meaningful_value().is_some()
    }

    pub(crate) fn meaningful_value(&self) -> Option<&T> {
        self.value
            .as_ref()
            .filter(|value| self.is_success() && !(*value as &dyn Any).is::<Unit>())
    }

    /// Succeed with a meaningful value, or raise.
    ///
    /// # Errors
    /// Returns the [`Outcome::ensure_success`] fault for failures and
    /// [`OutcomeFault::MissingValue`] when the outcome succeeded without a
    /// value.
    pub fn ensure_has_value(&self) -> Result<&T, OutcomeFault> {
        self.ensure_success()?;
        self.meaningful_value().ok_or(OutcomeFault::MissingValue)
    }

    /// Owning variant of [`Outcome::ensure_has_value`].
    ///
    /// # Errors
    /// As for [`Outcome::ensure_has_value`].
    pub fn into_ensured_value(self) -> Result<T, OutcomeFault> {
        self.ensure_has_value()?;
        self.value.ok_or(OutcomeFault::MissingValue)
    }
}

impl Outcome {
    /// Successful outcome with no payload.
    #[must_use]
    pub fn no_content() -> Self {
        Self {
            value: Some(Unit),
            ..Self::with_status(Status::Success)
        }
    }

    /// Created outcome that only reports the new entity's id.
    pub fn created_without_value(id: impl fmt::Display) -> Self {
        Self::created(id, Unit)
    }
}

#[cfg(test)]
impl<T> Outcome<T> {
    /// Drop the id to reach states only narrowing code can produce.
    pub(crate) fn without_id(self) -> Self {
        Self { id: None, ..self }
    }

    /// Drop the validation errors to reach states only narrowing code can
    /// produce.
    pub(crate) fn without_validation_errors(self) -> Self {
        Self {
            validation_errors: None,
            ..self
        }
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Self::ok(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("status", &self.status)
            .field("value", &self.value)
            .field("id", &self.id)
            .field("fault", &self.fault.as_ref().map(ToString::to_string))
            .field("validation_errors", &self.validation_errors)
            .finish()
    }
}
