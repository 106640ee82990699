//! View components for the application.

mod check_form;
mod header;
mod report;

pub use check_form::view_check_form;
pub use header::{view_footer, view_header};
pub use report::view_report;
