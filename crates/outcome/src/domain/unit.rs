//! The "no payload" value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Singleton value used as `T` when an operation has nothing to return.
///
/// Keeping a value slot filled with `Unit` distinguishes "succeeded without
/// data" from "no value slot at all". Outcomes carrying `Unit` never report
/// [`has_value`](super::Outcome::has_value).
///
/// # Examples
/// ```
/// use outcome::Unit;
///
/// assert_eq!(Unit, Unit::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}
