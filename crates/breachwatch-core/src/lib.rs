//! # breachwatch-core
//!
//! Core logic for the `BreachWatch` desktop utility.
//!
//! This crate provides:
//! - Email address validation
//! - Breach lookup against the XposedOrNot API
//! - Interpretation of the loosely shaped upstream response
//!
//! Nothing here touches the GUI; every value lives for the duration of a
//! single user-initiated check.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod email;
pub mod lookup;

pub use email::{EmailAddress, ValidationError, validate};
pub use lookup::{BreachRecord, LookupClient, LookupFailure, LookupResult};
