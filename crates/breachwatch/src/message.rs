//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use breachwatch_core::LookupResult;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    /// Email input field changed.
    EmailChanged(String),
    /// Check requested, via the button or Enter in the input field.
    CheckRequested,
    /// The background lookup finished.
    CheckCompleted(LookupResult),
    /// Toggle between light and dark theme.
    ToggleTheme,
}
