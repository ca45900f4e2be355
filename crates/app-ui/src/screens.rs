//! Screen controllers
//!
//! Each controller owns its screen's local state and exposes the
//! callback hooks the rendering surface is wired to (field-change,
//! toggle, submit, continue). Screens communicate with the rest of the
//! shell only through the navigation targets they emit.

use app_core::{validate, Authenticator, SignInOutcome, EMAIL_FIELD, PASSWORD_FIELD};
use app_state::{ConsentGate, ConsentRequirement, ConsentSnapshot, FormState, Role, SignInSession};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::navigation::{NavigationTarget, Route};

// =============================================================================
// Sign-in screen
// =============================================================================

/// What a submit attempt amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Validation failed; inline errors were updated, nothing else ran
    Invalid,
    /// A prior submit is still in flight; this one was ignored
    AlreadyInFlight,
    /// The authenticator rejected the attempt or could not be reached
    ///
    /// The screen logs this and sets no inline error; the outcome is
    /// returned so a host that wants to surface it can.
    Failed(SignInOutcome),
    /// Signed in; navigate to the consent gate next
    SignedIn {
        /// The session the authenticator produced
        session: SignInSession,
        /// The single navigation target this submit emits
        next: NavigationTarget,
    },
}

/// Controller for the sign-in screen
///
/// Form state sits behind an async lock so the busy-guard check and set
/// are atomic with respect to interleaved submit events; the simulated
/// sign-in is the shell's only suspension point.
pub struct SignInScreen {
    form: Arc<RwLock<FormState>>,
    authenticator: Arc<dyn Authenticator>,
}

impl SignInScreen {
    /// Fresh screen with an empty form
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            form: Arc::new(RwLock::new(FormState::new())),
            authenticator,
        }
    }

    /// Field-change hook: update a value, clearing that field's error
    pub async fn set_field(&self, field: &str, value: &str) {
        self.form.write().await.set_field(field, value);
    }

    /// Snapshot of the form for rendering
    pub async fn form(&self) -> FormState {
        self.form.read().await.clone()
    }

    /// Whether a submit is currently in flight
    pub async fn is_busy(&self) -> bool {
        self.form.read().await.is_busy()
    }

    /// Submit hook
    ///
    /// Ignores the attempt while one is already in flight, validates
    /// before doing anything else, and on success emits exactly one
    /// target to the consent gate. A rejected or unreachable sign-in is
    /// logged, sets no inline error, and leaves future attempts
    /// unblocked.
    pub async fn submit(&self) -> SubmitResult {
        let (email, password) = {
            let mut form = self.form.write().await;
            if form.is_busy() {
                return SubmitResult::AlreadyInFlight;
            }

            let errors = validate(form.values());
            if !errors.is_empty() {
                form.set_errors(errors);
                return SubmitResult::Invalid;
            }

            form.begin_submit();
            (
                form.value(EMAIL_FIELD).to_string(),
                form.value(PASSWORD_FIELD).to_string(),
            )
        };

        let outcome = self.authenticator.sign_in(&email, &password).await;
        self.form.write().await.finish_submit();

        match outcome {
            SignInOutcome::Success(session) => SubmitResult::SignedIn {
                next: NavigationTarget::to(Route::Consent { role: session.role }),
                session,
            },
            failure => {
                tracing::debug!(?failure, "sign-in failed; not surfaced inline");
                SubmitResult::Failed(failure)
            }
        }
    }
}

// =============================================================================
// Consent screen
// =============================================================================

/// Controller for the consent gate screen
///
/// Owns the gate for exactly as long as the screen is mounted; dropping
/// the controller discards any partial acceptance.
pub struct ConsentScreen {
    gate: ConsentGate,
    role: Role,
}

impl ConsentScreen {
    /// Fresh gate for the signed-in role, everything unaccepted
    pub fn new(role: Role) -> Self {
        Self {
            gate: ConsentGate::new(),
            role,
        }
    }

    /// Toggle hook: flip one requirement
    pub fn toggle(&mut self, requirement: ConsentRequirement) {
        self.gate.toggle(requirement);
    }

    /// True iff every requirement is accepted
    pub fn may_proceed(&self) -> bool {
        self.gate.may_proceed()
    }

    /// Snapshot of the gate for rendering
    pub fn snapshot(&self) -> ConsentSnapshot {
        self.gate.snapshot()
    }

    /// Continue hook
    ///
    /// A no-op returning `None` while the gate is incomplete (the UI
    /// disables the path, so the gate just ignores the event); once
    /// complete, emits one target to the role's main screen.
    pub fn attempt_continue(&self) -> Option<NavigationTarget> {
        if !self.gate.may_proceed() {
            return None;
        }
        tracing::info!(role = self.role.as_str(), "consent complete");
        Some(NavigationTarget::to(Route::Main { role: self.role }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::SimulatedDirectory;
    use app_state::FieldError;

    fn screen() -> SignInScreen {
        SignInScreen::new(Arc::new(SimulatedDirectory::new()))
    }

    async fn fill(screen: &SignInScreen, email: &str, password: &str) {
        screen.set_field(EMAIL_FIELD, email).await;
        screen.set_field(PASSWORD_FIELD, password).await;
    }

    #[tokio::test]
    async fn invalid_form_stops_before_the_authenticator() {
        let screen = screen();
        assert_eq!(screen.submit().await, SubmitResult::Invalid);

        let form = screen.form().await;
        assert_eq!(form.error(EMAIL_FIELD), Some(FieldError::Required));
        assert_eq!(form.error(PASSWORD_FIELD), Some(FieldError::Required));
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn editing_after_failure_clears_only_that_error() {
        let screen = screen();
        screen.submit().await;

        screen.set_field(EMAIL_FIELD, "pat@example.com").await;
        let form = screen.form().await;
        assert_eq!(form.error(EMAIL_FIELD), None);
        assert_eq!(form.error(PASSWORD_FIELD), Some(FieldError::Required));
    }

    #[tokio::test]
    async fn successful_submit_targets_consent() {
        let screen = screen();
        fill(&screen, "pat@example.com", "wellness1").await;

        match screen.submit().await {
            SubmitResult::SignedIn { session, next } => {
                assert_eq!(session.role, Role::Patient);
                assert_eq!(
                    next.route,
                    Route::Consent {
                        role: Role::Patient
                    }
                );
            }
            other => panic!("expected sign-in, got {other:?}"),
        }
        assert!(!screen.is_busy().await);
    }

    #[tokio::test]
    async fn rejected_sign_in_sets_no_inline_error_and_does_not_block() {
        let screen = screen();
        fill(&screen, "pat@example.com", "wrong").await;

        assert_eq!(
            screen.submit().await,
            SubmitResult::Failed(SignInOutcome::AuthFailure)
        );
        let form = screen.form().await;
        assert!(!form.has_errors());
        assert!(!form.is_busy());

        // A later attempt runs normally.
        screen.set_field(PASSWORD_FIELD, "wellness1").await;
        assert!(matches!(
            screen.submit().await,
            SubmitResult::SignedIn { .. }
        ));
    }

    #[tokio::test]
    async fn network_error_is_returned_not_thrown() {
        let screen = SignInScreen::new(Arc::new(SimulatedDirectory::unreachable()));
        fill(&screen, "pat@example.com", "wellness1").await;
        assert_eq!(
            screen.submit().await,
            SubmitResult::Failed(SignInOutcome::NetworkError)
        );
    }

    #[tokio::test]
    async fn duplicate_submit_while_in_flight_is_ignored() {
        let screen = Arc::new(screen());
        fill(&screen, "casey@example.com", "wellness2").await;

        let first = tokio::spawn({
            let screen = Arc::clone(&screen);
            async move { screen.submit().await }
        });
        let second = tokio::spawn({
            let screen = Arc::clone(&screen);
            async move { screen.submit().await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];
        let signed_in = results
            .iter()
            .filter(|r| matches!(**r, SubmitResult::SignedIn { .. }))
            .count();
        let ignored = results
            .iter()
            .filter(|r| **r == SubmitResult::AlreadyInFlight)
            .count();
        assert_eq!(signed_in, 1, "exactly one submit navigates");
        assert_eq!(ignored, 1, "the duplicate is silently ignored");
    }

    #[test]
    fn consent_scenario_from_the_gate_contract() {
        let mut screen = ConsentScreen::new(Role::Patient);
        screen.toggle(ConsentRequirement::Terms);
        screen.toggle(ConsentRequirement::Privacy);
        assert!(!screen.may_proceed());
        assert_eq!(screen.attempt_continue(), None);

        screen.toggle(ConsentRequirement::MedicalDisclaimer);
        assert!(screen.may_proceed());
        let target = screen.attempt_continue().expect("gate complete");
        assert_eq!(
            target.route,
            Route::Main {
                role: Role::Patient
            }
        );
    }

    #[test]
    fn consent_continue_is_a_noop_while_incomplete() {
        let screen = ConsentScreen::new(Role::Caregiver);
        assert_eq!(screen.attempt_continue(), None);
        assert_eq!(screen.attempt_continue(), None);
    }

    #[test]
    fn consent_state_is_dropped_with_the_screen() {
        let mut screen = ConsentScreen::new(Role::Patient);
        screen.toggle(ConsentRequirement::Terms);
        drop(screen);

        // A remount starts from scratch.
        let screen = ConsentScreen::new(Role::Patient);
        assert!(!screen.snapshot().requirements[0].accepted);
    }
}
