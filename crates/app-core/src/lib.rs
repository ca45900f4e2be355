//! Core logic for CareCompass
//!
//! This crate contains the pure and service-shaped pieces the screens
//! drive: the sign-in form validator and the simulated authentication
//! service with its explicit outcome type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod validation;

pub use auth::{Authenticator, SignInOutcome, SimulatedDirectory};
pub use validation::{validate, EMAIL_FIELD, PASSWORD_FIELD};
