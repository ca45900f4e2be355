//! Role model and signed-in session snapshot
//!
//! A session is produced by a successful sign-in and handed to the
//! navigation layer so it can compose the role-appropriate tab set.
//! Sessions are not persisted; restarting the shell starts signed out.

use serde::{Deserialize, Serialize};

/// User role, fixed at sign-in
///
/// The role decides which tab set the main screen composes. There is no
/// in-app role switching; signing out and back in is the only way to
/// change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A patient managing their own care
    Patient,
    /// A caregiver overseeing one or more patients
    Caregiver,
}

impl Role {
    /// Parse a role from its wire form (`"patient"` / `"caregiver"`)
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "patient" => Some(Role::Patient),
            "caregiver" => Some(Role::Caregiver),
            _ => None,
        }
    }

    /// Wire form of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Caregiver => "caregiver",
        }
    }
}

/// Snapshot of a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInSession {
    /// Email the user signed in with
    pub email: String,
    /// Name shown in the dashboard header
    pub display_name: String,
    /// Role fixed for the lifetime of the session
    pub role: Role,
}
