//! Closed set of terminal states an [`Outcome`](super::Outcome) can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an operation ended.
///
/// Every outcome carries exactly one status for its whole lifetime.
///
/// # Examples
/// ```
/// use outcome::Status;
///
/// assert!(Status::Created.is_success());
/// assert!(!Status::NotFound.is_success());
/// assert_eq!(Status::NotFound.to_string(), "not_found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The operation completed; a value may or may not be meaningful.
    Success,
    /// A new entity was produced and is identified by an id.
    Created,
    /// The requested resource does not exist.
    NotFound,
    /// The input failed validation.
    Invalid,
    /// An unclassified fault occurred.
    Error,
}

impl Status {
    /// Whether the status counts as a successful completion.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::Created)
    }

    /// Stable snake_case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Created => "created",
            Self::NotFound => "not_found",
            Self::Invalid => "invalid",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Status::Success, true)]
    #[case(Status::Created, true)]
    #[case(Status::NotFound, false)]
    #[case(Status::Invalid, false)]
    #[case(Status::Error, false)]
    fn success_covers_success_and_created(#[case] status: Status, #[case] expected: bool) {
        assert_eq!(status.is_success(), expected);
    }

    #[rstest]
    fn serialises_as_display_label() {
        for status in [
            Status::Success,
            Status::Created,
            Status::NotFound,
            Status::Invalid,
            Status::Error,
        ] {
            let json = serde_json::to_value(status).expect("status serialises");
            assert_eq!(json, serde_json::Value::String(status.to_string()));
        }
    }
}
