//! Screen-local state for CareCompass
//!
//! This crate contains the state machines owned by individual screens:
//! the consent gate that controls progression past onboarding, the
//! sign-in form state, and the signed-in session snapshot. Nothing in
//! here persists across restarts; every value lives and dies with the
//! screen that owns it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod consent;
pub mod form;
pub mod session;

pub use consent::{ConsentGate, ConsentRequirement, ConsentSnapshot, GateState, RequirementState};
pub use form::{FieldError, FormState};
pub use session::{Role, SignInSession};
