//! Navigation and screen layer for CareCompass
//!
//! This crate owns the route model and everything that decides which
//! screen the shell shows next:
//!
//! - [`navigation`] - typed routes, the per-role route table, and the
//!   stack navigator with its nested tab scope
//! - [`tabbar`] - the route↔tab bijection and the pure tab-bar model
//!   handed to the renderer
//! - [`screens`] - screen controllers (sign-in, consent) that own local
//!   state and translate user events into navigation targets
//!
//! Rendering is an external collaborator: every public type here is
//! plain serializable data or a callback-shaped method, and the crate
//! never reads layout or style.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod screens;
pub mod tabbar;

pub use navigation::{
    NavError, NavigationTarget, Navigator, ParamShape, Route, RouteDescriptor, RouteParams,
    RouteTable, Scope, ScreenOptions,
};
pub use screens::{ConsentScreen, SignInScreen, SubmitResult};
pub use tabbar::{TabBarModel, TabId, TabItem, TabMapping};
