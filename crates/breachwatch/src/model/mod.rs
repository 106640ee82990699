//! Data models for the application.

mod check;

pub use check::CheckState;
