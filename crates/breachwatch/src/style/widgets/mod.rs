//! Widget styles with light/dark theme support.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export container styles
pub use containers::{card_style, header_style, report_row_style, window_style};

// Re-export button styles
pub use buttons::{primary_button_style, secondary_button_style};

// Re-export input styles
pub use inputs::{email_input_style, scrollable_style};
