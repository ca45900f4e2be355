//! Simulated authentication for CareCompass
//!
//! There is no real backend; sign-in resolves against a fixed in-memory
//! directory. The outcome is an explicit enum rather than a thrown
//! error so the one genuinely fallible operation in the shell cannot be
//! swallowed by accident: callers always receive `Success`,
//! `AuthFailure`, or `NetworkError` and decide what to do with it.

use app_state::{Role, SignInSession};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a sign-in attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SignInOutcome {
    /// Credentials accepted; the session snapshot for the signed-in user
    Success(SignInSession),
    /// Credentials rejected
    AuthFailure,
    /// The (simulated) service could not be reached
    NetworkError,
}

/// Seam between the sign-in screen and whatever answers credentials
///
/// Production would put a real client behind this; the shell ships only
/// the simulated implementation.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Check credentials and produce an outcome; never panics, never throws
    async fn sign_in(&self, email: &str, password: &str) -> SignInOutcome;
}

#[derive(Debug, Clone)]
struct DirectoryAccount {
    email: &'static str,
    password: &'static str,
    display_name: &'static str,
    role: Role,
}

/// Deterministic in-memory stand-in for the auth backend
///
/// Two fixed accounts, one per role. Email matching is trimmed and
/// case-insensitive; passwords match exactly. `network_down` turns every
/// attempt into [`SignInOutcome::NetworkError`] for exercising that path.
#[derive(Debug, Clone)]
pub struct SimulatedDirectory {
    accounts: Vec<DirectoryAccount>,
    network_down: bool,
}

impl Default for SimulatedDirectory {
    fn default() -> Self {
        Self {
            accounts: vec![
                DirectoryAccount {
                    email: "pat@example.com",
                    password: "wellness1",
                    display_name: "Pat Reyes",
                    role: Role::Patient,
                },
                DirectoryAccount {
                    email: "casey@example.com",
                    password: "wellness2",
                    display_name: "Casey Morgan",
                    role: Role::Caregiver,
                },
            ],
            network_down: false,
        }
    }
}

impl SimulatedDirectory {
    /// Directory with the two stock accounts
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory whose every attempt fails with a network error
    pub fn unreachable() -> Self {
        Self {
            network_down: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Authenticator for SimulatedDirectory {
    async fn sign_in(&self, email: &str, password: &str) -> SignInOutcome {
        let email = email.trim().to_ascii_lowercase();
        tracing::info!(%email, "sign-in attempt");

        // The single suspension point in the shell; models the deferred
        // completion of a real request.
        tokio::task::yield_now().await;

        if self.network_down {
            tracing::warn!(%email, "sign-in failed: service unreachable");
            return SignInOutcome::NetworkError;
        }

        match self
            .accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
        {
            Some(account) => {
                tracing::info!(%email, role = account.role.as_str(), "sign-in succeeded");
                SignInOutcome::Success(SignInSession {
                    email: account.email.to_string(),
                    display_name: account.display_name.to_string(),
                    role: account.role,
                })
            }
            None => {
                tracing::warn!(%email, "sign-in failed: invalid credentials");
                SignInOutcome::AuthFailure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_patient_signs_in() {
        let directory = SimulatedDirectory::new();
        let outcome = directory.sign_in("pat@example.com", "wellness1").await;
        match outcome {
            SignInOutcome::Success(session) => {
                assert_eq!(session.role, Role::Patient);
                assert_eq!(session.display_name, "Pat Reyes");
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn email_matching_is_trimmed_and_case_insensitive() {
        let directory = SimulatedDirectory::new();
        let outcome = directory.sign_in("  Casey@Example.COM ", "wellness2").await;
        assert!(matches!(outcome, SignInOutcome::Success(s) if s.role == Role::Caregiver));
    }

    #[tokio::test]
    async fn wrong_password_is_auth_failure() {
        let directory = SimulatedDirectory::new();
        let outcome = directory.sign_in("pat@example.com", "nope").await;
        assert_eq!(outcome, SignInOutcome::AuthFailure);
    }

    #[tokio::test]
    async fn unknown_account_is_auth_failure() {
        let directory = SimulatedDirectory::new();
        let outcome = directory.sign_in("nobody@example.com", "x").await;
        assert_eq!(outcome, SignInOutcome::AuthFailure);
    }

    #[tokio::test]
    async fn unreachable_directory_is_network_error() {
        let directory = SimulatedDirectory::unreachable();
        let outcome = directory.sign_in("pat@example.com", "wellness1").await;
        assert_eq!(outcome, SignInOutcome::NetworkError);
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_string(&SignInOutcome::AuthFailure).unwrap();
        assert_eq!(json, r#"{"outcome":"authFailure"}"#);
    }
}
