//! HTTP client for the breach lookup service.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::model::{LookupFailure, LookupResult};
use super::response;
use crate::email::EmailAddress;

/// Production endpoint of the XposedOrNot API.
pub const DEFAULT_ENDPOINT: &str = "https://api.xposedornot.com";

/// User-Agent sent with every lookup; the service blocks anonymous defaults.
const USER_AGENT: &str = "BreachWatch/0.1 (Security Tool)";

/// Client for checking an email address against the breach lookup service.
///
/// Holds a connection pool; construct once and reuse across checks.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http_client: reqwest::Client,
    endpoint: Url,
}

impl LookupClient {
    /// Creates a client against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        // Constant absolute URL, parse cannot fail.
        #[allow(clippy::unwrap_used)]
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        Self::with_endpoint(endpoint)
    }

    /// Creates a client against a custom endpoint (used by tests).
    #[must_use]
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Check one email address against the service.
    ///
    /// A single GET with the given deadline, no retries. Every failure mode
    /// is folded into [`LookupResult::Failed`]; this never panics and never
    /// propagates an error to the caller.
    pub async fn lookup(&self, email: &EmailAddress, timeout: Duration) -> LookupResult {
        match self.try_lookup(email, timeout).await {
            Ok(result) => result,
            Err(failure) => {
                warn!(email = %email, %failure, "lookup failed");
                LookupResult::Failed(failure)
            }
        }
    }

    async fn try_lookup(
        &self,
        email: &EmailAddress,
        timeout: Duration,
    ) -> Result<LookupResult, LookupFailure> {
        let url = self.check_url(email)?;
        debug!(%url, "checking email against breach service");

        let response = self
            .http_client
            .get(url)
            .timeout(timeout)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // The service reports "not found in any breach" as 404
            return Ok(LookupResult::Clean);
        }
        if !status.is_success() {
            warn!(%status, "unexpected status from breach service");
            return Err(LookupFailure::InvalidResponse);
        }

        let payload: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LookupFailure::Timeout
            } else {
                LookupFailure::InvalidResponse
            }
        })?;

        let sources = response::extract_sources(&payload);
        if sources.is_empty() {
            Ok(LookupResult::Clean)
        } else {
            Ok(LookupResult::Breached { sources })
        }
    }

    /// Build the check URL with the email percent-encoded as a path segment.
    fn check_url(&self, email: &EmailAddress) -> Result<Url, LookupFailure> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| LookupFailure::NetworkError)?
            .extend(["v1", "check-email", email.as_str()]);
        Ok(url)
    }
}

impl Default for LookupClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a transport error onto the failure taxonomy.
fn classify(error: reqwest::Error) -> LookupFailure {
    if error.is_timeout() {
        LookupFailure::Timeout
    } else if error.is_connect() || error.is_request() {
        LookupFailure::NetworkError
    } else if error.is_decode() {
        LookupFailure::InvalidResponse
    } else {
        LookupFailure::NetworkError
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::email::validate;

    #[test]
    fn test_check_url_shape() {
        let client = LookupClient::new();
        let email = validate("user@example.com").unwrap();
        let url = client.check_url(&email).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.xposedornot.com/v1/check-email/user@example.com"
        );
    }

    #[test]
    fn test_check_url_encodes_reserved_characters() {
        // '/' and '%' pass validation but would break a naively
        // concatenated path; segment encoding keeps the URL well-formed.
        let client = LookupClient::new();
        let email = validate("user%2f/x@example.com").unwrap();
        let url = client.check_url(&email).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.xposedornot.com/v1/check-email/user%252f%2Fx@example.com"
        );
    }

    #[test]
    fn test_check_url_custom_endpoint() {
        let endpoint = Url::parse("http://127.0.0.1:8080").unwrap();
        let client = LookupClient::with_endpoint(endpoint);
        let email = validate("a@b.co").unwrap();
        let url = client.check_url(&email).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/check-email/a@b.co");
    }
}
