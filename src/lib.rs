//! CareCompass: role-based navigation and onboarding core
//!
//! Front-end shell core for a care platform with two roles (patient,
//! caregiver): typed stack/tab navigation, a per-role route↔tab
//! bijection for the custom tab bar, a consent gate controlling
//! progression past onboarding, and a sign-in form with a simulated
//! authenticator. Rendering is an external collaborator; this workspace
//! hands it serializable models and callback hooks and never touches
//! layout or style.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core::{validate, Authenticator, SignInOutcome, SimulatedDirectory};
pub use app_state::{
    ConsentGate, ConsentRequirement, ConsentSnapshot, FieldError, FormState, GateState, Role,
    SignInSession,
};
pub use app_ui::{
    ConsentScreen, NavError, NavigationTarget, Navigator, ParamShape, Route, RouteTable, Scope,
    ScreenOptions, SignInScreen, SubmitResult, TabBarModel, TabId, TabMapping,
};
