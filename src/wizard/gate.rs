//! Per-step completion predicates

use super::draft::{DraftField, PitchDraft};

/// Pure readiness check for one step.
///
/// A gate is the list of draft fields its step requires. It never mutates
/// the draft and holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepGate {
    required: &'static [DraftField],
}

impl StepGate {
    /// Gate that is ready once every listed field is filled
    pub const fn requiring(required: &'static [DraftField]) -> Self {
        Self { required }
    }

    pub fn required(&self) -> &'static [DraftField] {
        self.required
    }

    pub fn is_ready(&self, draft: &PitchDraft) -> bool {
        self.required.iter().all(|field| field.is_filled(draft))
    }

    /// Required fields the draft has not filled yet
    pub fn missing(&self, draft: &PitchDraft) -> Vec<DraftField> {
        self.required
            .iter()
            .copied()
            .filter(|field| !field.is_filled(draft))
            .collect()
    }

    /// Message for the continue affordance, `None` when ready
    pub fn hint(&self, draft: &PitchDraft) -> Option<String> {
        let missing = self.missing(draft);
        if missing.is_empty() {
            return None;
        }
        let labels: Vec<&str> = missing.iter().map(DraftField::label).collect();
        Some(format!("Please fill in: {}", labels.join(", ")))
    }
}
