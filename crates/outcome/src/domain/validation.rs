//! Field-level validation failures and their aggregate.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

/// One validation failure.
///
/// `fields` names the fields the message applies to and may be empty for
/// failures that concern the request as a whole.
///
/// # Examples
/// ```
/// use outcome::ValidationError;
///
/// let err = ValidationError::for_field("name", "required");
/// assert_eq!(err.fields(), ["name"]);
/// assert_eq!(err.message(), "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    fields: Vec<String>,
    message: String,
}

impl ValidationError {
    /// Failure that is not tied to any field.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            fields: Vec::new(),
            message: message.into(),
        }
    }

    /// Failure for a single field.
    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![field.into()],
            message: message.into(),
        }
    }

    /// Failure shared by several fields.
    pub fn for_fields<I, S>(fields: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Names of the fields the failure applies to.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A single validation failure raised as a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ValidationFault {
    error: ValidationError,
}

impl ValidationFault {
    /// Raise `error` as a fault.
    #[must_use]
    pub const fn new(error: ValidationError) -> Self {
        Self { error }
    }

    /// The wrapped validation error.
    #[must_use]
    pub const fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    /// Unwrap the validation error.
    #[must_use]
    pub fn into_validation_error(self) -> ValidationError {
        self.error
    }
}

impl From<ValidationError> for ValidationFault {
    fn from(error: ValidationError) -> Self {
        Self::new(error)
    }
}

/// Several validation failures bundled into one fault.
///
/// Order is preserved from construction through every accessor.
///
/// # Examples
/// ```
/// use outcome::{AggregateValidationError, ValidationError};
///
/// let aggregate = AggregateValidationError::new([
///     ValidationError::for_field("name", "required"),
///     ValidationError::for_field("name", "too short"),
///     ValidationError::for_field("size", "must be positive"),
/// ]);
/// let grouped = aggregate.by_field();
/// assert_eq!(grouped["name"], ["required", "too short"]);
/// assert_eq!(aggregate.to_string(), "1: required\n2: too short\n3: must be positive");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateValidationError(Vec<ValidationFault>);

impl AggregateValidationError {
    /// Bundle `errors` in the order given.
    pub fn new(errors: impl IntoIterator<Item = ValidationError>) -> Self {
        Self(errors.into_iter().map(ValidationFault::new).collect())
    }

    /// Number of bundled failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is bundled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The inner single-field faults.
    #[must_use]
    pub fn inner_faults(&self) -> &[ValidationFault] {
        &self.0
    }

    /// Iterate the validation errors in order.
    pub fn validation_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter().map(ValidationFault::validation_error)
    }

    /// Consume the aggregate, returning its validation errors in order.
    #[must_use]
    pub fn into_validation_errors(self) -> Vec<ValidationError> {
        self.0
            .into_iter()
            .map(ValidationFault::into_validation_error)
            .collect()
    }

    /// Messages grouped by field name; see [`group_by_field`].
    #[must_use]
    pub fn by_field(&self) -> IndexMap<String, Vec<String>> {
        group_by_field(self.validation_errors())
    }
}

impl fmt::Display for AggregateValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, fault) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {fault}", index + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateValidationError {}

impl FromIterator<ValidationError> for AggregateValidationError {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for AggregateValidationError {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_validation_errors().into_iter()
    }
}

/// Group messages by field name, keeping first-seen field order and the
/// message order within each field.
///
/// Errors without fields, and blank field names, are skipped: they have no
/// addressable field. An error naming several fields is listed under each.
pub fn group_by_field<'a>(
    errors: impl IntoIterator<Item = &'a ValidationError>,
) -> IndexMap<String, Vec<String>> {
    let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
    for error in errors {
        for field in error.fields().iter().filter(|field| !field.is_empty()) {
            grouped
                .entry(field.clone())
                .or_default()
                .push(error.message().to_owned());
        }
    }
    grouped
}
