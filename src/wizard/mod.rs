//! Wizard navigation and draft accumulation
//!
//! [`Wizard`] owns the ordered steps, the current step index and the
//! [`PitchDraft`]. Front ends read from it and push every edit back through
//! [`Wizard::merge_draft`]; they never keep private copies of draft fields.

use std::collections::HashSet;

use thiserror::Error;

pub mod draft;
pub mod gate;
pub mod steps;

pub use draft::{DraftField, DraftPatch, LogoRef, PitchDraft, TeamMember};
pub use gate::StepGate;
pub use steps::{pitch_steps, DeckTemplate, StepDescriptor, StepId};

#[cfg(test)]
mod tests;

/// Errors building a wizard from a step sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("a wizard needs at least one step")]
    NoSteps,

    #[error("step '{0}' appears more than once")]
    DuplicateStep(&'static str),
}

/// Whether gates only inform the front end or also block `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GatePolicy {
    /// Gates drive the continue affordance; `advance` always moves
    #[default]
    Advisory,
    /// `advance` refuses to leave a step whose gate is not ready
    Enforced,
}

impl GatePolicy {
    pub fn from_enforce(enforce: bool) -> Self {
        if enforce {
            GatePolicy::Enforced
        } else {
            GatePolicy::Advisory
        }
    }
}

/// Outcome of [`Wizard::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward one step
    Moved { from: usize, to: usize },
    /// Already on the last step; nothing changed
    AtEnd,
    /// Gate not ready under [`GatePolicy::Enforced`]; nothing changed
    Blocked { missing: Vec<DraftField> },
}

/// Position of a step relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// The wizard state machine
#[derive(Debug, Clone)]
pub struct Wizard {
    steps: Vec<StepDescriptor>,
    /// Always `< steps.len()`
    current: usize,
    draft: PitchDraft,
    policy: GatePolicy,
}

impl Wizard {
    /// Build a wizard over `steps`, starting at the first one
    pub fn new(
        steps: Vec<StepDescriptor>,
        draft: PitchDraft,
        policy: GatePolicy,
    ) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id) {
                return Err(WizardError::DuplicateStep(step.id.key()));
            }
        }

        Ok(Self {
            steps,
            current: 0,
            draft,
            policy,
        })
    }

    /// The standard pitch deck wizard
    pub fn pitch_deck(draft: PitchDraft, policy: GatePolicy) -> Self {
        Self {
            steps: pitch_steps(),
            current: 0,
            draft,
            policy,
        }
    }

    // ─── Draft ──────────────────────────────────────────────────────────────────

    /// Overwrite every field present in `patch`. Never fails and never validates.
    pub fn merge_draft(&mut self, patch: DraftPatch) {
        if patch.is_empty() {
            return;
        }
        tracing::trace!(
            step = self.current_step().id.key(),
            fields = ?patch.touched().iter().map(DraftField::key).collect::<Vec<_>>(),
            "merging draft patch"
        );
        self.draft.apply(patch);
    }

    pub fn draft(&self) -> &PitchDraft {
        &self.draft
    }

    /// Hand the finished draft to an exporter
    pub fn into_draft(self) -> PitchDraft {
        self.draft
    }

    // ─── Navigation ─────────────────────────────────────────────────────────────

    /// Move to the next step; a no-op on the last one
    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            return Advance::AtEnd;
        }

        if self.policy == GatePolicy::Enforced {
            let missing = self.missing_fields();
            if !missing.is_empty() {
                tracing::debug!(
                    step = self.current_step().id.key(),
                    missing = missing.len(),
                    "advance blocked by gate"
                );
                return Advance::Blocked { missing };
            }
        }

        let from = self.current;
        self.current += 1;
        tracing::debug!(
            from = self.steps[from].id.key(),
            to = self.current_step().id.key(),
            "advanced"
        );
        Advance::Moved {
            from,
            to: self.current,
        }
    }

    /// Move to the previous step; returns false on the first one
    pub fn retreat(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        tracing::debug!(to = self.current_step().id.key(), "retreated");
        true
    }

    pub fn current_step(&self) -> &StepDescriptor {
        &self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    // ─── Progress & gating ──────────────────────────────────────────────────────

    /// `(index + 1) / step_count`, in `(0, 1]`
    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64
    }

    /// Progress as a rounded whole percentage
    pub fn progress_percent(&self) -> u16 {
        (self.progress_fraction() * 100.0).round() as u16
    }

    /// Whether the current step's continue affordance should be enabled
    pub fn can_advance(&self) -> bool {
        self.current_step().gate.is_ready(&self.draft)
    }

    /// Fields the current step still needs
    pub fn missing_fields(&self) -> Vec<DraftField> {
        self.current_step().gate.missing(&self.draft)
    }

    /// Every step's gate is satisfied
    pub fn ready_to_export(&self) -> bool {
        self.steps.iter().all(|step| step.gate.is_ready(&self.draft))
    }
}
