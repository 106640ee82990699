//! Email address model and validation.

mod model;
mod validation;

pub use model::EmailAddress;
pub use validation::{ValidationError, validate};
