//! Validated email address type.

use std::fmt;

/// A syntactically valid email address.
///
/// Can only be constructed through [`crate::email::validate`], so holding one
/// is proof the string passed the format check. The wrapped string is the
/// user input with leading/trailing whitespace removed, otherwise unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Crate-internal constructor; callers go through `validate`.
    pub(crate) fn new_unchecked(address: String) -> Self {
        Self(address)
    }

    /// The validated address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
