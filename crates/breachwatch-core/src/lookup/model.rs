//! Outcome types for a single breach lookup.

use std::fmt;

/// A single breach source: the name of a site or incident where the email
/// address appeared. The upstream API provides no further metadata we rely
/// on, so none is modeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreachRecord(String);

impl BreachRecord {
    /// Wrap a source name.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The source name as a string slice.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreachRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a lookup could not complete.
///
/// Wording is deliberately about the service, never about the email being
/// breached, so a failure cannot be mistaken for a positive result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailure {
    /// Could not connect to the lookup service.
    #[error("Could not reach the breach lookup service. Check your network and try again.")]
    NetworkError,
    /// The request exceeded its deadline.
    #[error("The breach lookup service took too long to respond.")]
    Timeout,
    /// Non-2xx status, unparseable body, or an unrecognized payload.
    #[error("The breach lookup service returned an unexpected response.")]
    InvalidResponse,
}

/// Outcome of one breach lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The email was not found in any known breach.
    Clean,
    /// The email appeared in one or more breaches. Sources are in upstream
    /// response order, not deduplicated.
    Breached {
        /// Where the email was found.
        sources: Vec<BreachRecord>,
    },
    /// The lookup could not complete.
    Failed(LookupFailure),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_wording_never_mentions_breach() {
        for failure in [
            LookupFailure::NetworkError,
            LookupFailure::Timeout,
            LookupFailure::InvalidResponse,
        ] {
            let message = failure.to_string().to_lowercase();
            assert!(!message.contains("breached"));
            assert!(!message.contains("found"));
        }
    }

    #[test]
    fn test_breach_record_display() {
        assert_eq!(BreachRecord::new("SiteA").to_string(), "SiteA");
    }
}
