//! Breach lookup against the XposedOrNot API.

mod client;
mod model;
mod response;

pub use client::{DEFAULT_ENDPOINT, LookupClient};
pub use model::{BreachRecord, LookupFailure, LookupResult};
