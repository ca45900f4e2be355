//! Consent gate for the onboarding flow
//!
//! The consent screen owns one [`ConsentGate`]: a fixed set of named
//! boolean requirements, each starting unaccepted. The gate is
//! [`GateState::Complete`] only when every requirement is accepted;
//! partial acceptance never grants access. The gate is created when the
//! screen mounts and dropped when the user navigates away in either
//! direction; acceptance is deliberately not persisted.

use serde::{Deserialize, Serialize};

/// One mandatory acknowledgment gating progression past onboarding
///
/// The set is closed: every requirement is equally weighted and there is
/// no "remind me later" escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsentRequirement {
    /// Terms of service
    Terms,
    /// Privacy policy
    Privacy,
    /// Medical disclaimer (this app does not replace professional care)
    MedicalDisclaimer,
}

impl ConsentRequirement {
    /// All requirements, in the order the consent screen lists them
    pub fn all() -> [ConsentRequirement; 3] {
        [
            ConsentRequirement::Terms,
            ConsentRequirement::Privacy,
            ConsentRequirement::MedicalDisclaimer,
        ]
    }

    /// Label shown beside the checkbox
    pub fn label(&self) -> &'static str {
        match self {
            ConsentRequirement::Terms => "I agree to the Terms of Service",
            ConsentRequirement::Privacy => "I accept the Privacy Policy",
            ConsentRequirement::MedicalDisclaimer => {
                "I understand this app does not replace professional medical advice"
            }
        }
    }
}

/// Aggregate state of the gate, recomputed from the flags on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    /// At least one requirement is still unaccepted
    Incomplete,
    /// Every requirement is accepted; the user may proceed
    Complete,
}

/// Checked-state of a single requirement, for the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementState {
    /// Which requirement this row represents
    pub requirement: ConsentRequirement,
    /// Label shown beside the checkbox
    pub label: String,
    /// Whether the user has accepted it
    pub accepted: bool,
}

/// Serializable view of the whole gate, handed to the rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentSnapshot {
    /// Per-requirement rows, in display order
    pub requirements: Vec<RequirementState>,
    /// True iff every requirement is accepted
    pub may_proceed: bool,
}

/// The consent-gating state machine
///
/// Each requirement toggles independently; the aggregate state is a pure
/// function of the flags and is never cached beyond them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentGate {
    terms: bool,
    privacy: bool,
    medical_disclaimer: bool,
}

impl ConsentGate {
    /// Create a gate with every requirement unaccepted
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip exactly one requirement's flag, leaving the others untouched
    pub fn toggle(&mut self, requirement: ConsentRequirement) {
        let accepted = !self.is_accepted(requirement);
        *self.flag_mut(requirement) = accepted;
        tracing::debug!(?requirement, accepted, "consent requirement toggled");
    }

    /// Whether a single requirement is currently accepted
    pub fn is_accepted(&self, requirement: ConsentRequirement) -> bool {
        match requirement {
            ConsentRequirement::Terms => self.terms,
            ConsentRequirement::Privacy => self.privacy,
            ConsentRequirement::MedicalDisclaimer => self.medical_disclaimer,
        }
    }

    /// True iff every requirement is accepted
    pub fn may_proceed(&self) -> bool {
        ConsentRequirement::all()
            .iter()
            .all(|r| self.is_accepted(*r))
    }

    /// Aggregate state, recomputed from the flags
    pub fn state(&self) -> GateState {
        if self.may_proceed() {
            GateState::Complete
        } else {
            GateState::Incomplete
        }
    }

    /// Snapshot for the rendering surface
    pub fn snapshot(&self) -> ConsentSnapshot {
        ConsentSnapshot {
            requirements: ConsentRequirement::all()
                .iter()
                .map(|r| RequirementState {
                    requirement: *r,
                    label: r.label().to_string(),
                    accepted: self.is_accepted(*r),
                })
                .collect(),
            may_proceed: self.may_proceed(),
        }
    }

    fn flag_mut(&mut self, requirement: ConsentRequirement) -> &mut bool {
        match requirement {
            ConsentRequirement::Terms => &mut self.terms,
            ConsentRequirement::Privacy => &mut self.privacy,
            ConsentRequirement::MedicalDisclaimer => &mut self.medical_disclaimer,
        }
    }
}
