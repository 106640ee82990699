//! State for the breach check form.

use breachwatch_core::{EmailAddress, LookupResult, validate};

/// State for one user-initiated breach check.
///
/// A check moves `idle -> checking -> idle`; validation failures never leave
/// idle. While `is_checking` is set, further submissions are ignored, so at
/// most one lookup is ever outstanding and results cannot race onto the
/// display.
#[derive(Debug, Clone, Default)]
pub struct CheckState {
    /// Raw text in the email input field.
    pub email_input: String,
    /// Validation error to show inline under the input.
    pub input_error: Option<String>,
    /// Whether a lookup is outstanding.
    pub is_checking: bool,
    /// Result of the most recent completed check.
    pub last_result: Option<LookupResult>,
}

impl CheckState {
    /// Create a new idle check state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current input, recording any error for inline display.
    ///
    /// Returns the validated address on success; on failure the error
    /// message is stored and the state stays idle.
    pub fn validate_input(&mut self) -> Option<EmailAddress> {
        match validate(&self.email_input) {
            Ok(email) => {
                self.input_error = None;
                Some(email)
            }
            Err(e) => {
                self.input_error = Some(e.to_string());
                None
            }
        }
    }

    /// Mark a lookup as outstanding and clear the previous result.
    pub fn begin_check(&mut self) {
        self.is_checking = true;
        self.last_result = None;
    }

    /// Record a completed lookup and return to idle.
    pub fn finish_check(&mut self, result: LookupResult) {
        self.is_checking = false;
        self.last_result = Some(result);
    }
}
