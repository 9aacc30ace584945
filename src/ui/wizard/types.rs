//! Type definitions for the wizard screen

use crate::ui::form_field::{FormEntry, FormField};
use crate::wizard::{DraftField, StepId};

/// Result of wizard screen key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// Keep running
    Continue,
    /// Quit without exporting
    Cancel,
    /// Review confirmed with a complete draft
    Export,
    /// Persist the in-progress draft
    SaveDraft,
}

/// One-line message shown in the footer until the next navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Error(text) => text,
        }
    }
}

/// Heading and blurb shown above a step's content
#[derive(Debug, Clone, Copy)]
pub struct StepIntro {
    pub heading: &'static str,
    pub blurb: &'static str,
}

pub fn step_intro(id: StepId) -> StepIntro {
    match id {
        StepId::Template => StepIntro {
            heading: "Choose Your Template",
            blurb: "Select a template that best fits your presentation needs. You can customize colors and fonts later.",
        },
        StepId::Company => StepIntro {
            heading: "Company Information",
            blurb: "Tell us about your company. This information will appear on your title slide and throughout your presentation.",
        },
        StepId::ProblemSolution => StepIntro {
            heading: "Problem & Solution",
            blurb: "Clearly define the problem you're solving and how your solution addresses it. This is the foundation of your pitch.",
        },
        StepId::Market => StepIntro {
            heading: "Market & Business Model",
            blurb: "Show how big the opportunity is, who you sell to and how you make money.",
        },
        StepId::Financials => StepIntro {
            heading: "Financials",
            blurb: "State how much you are raising and what the money is for. Projections are optional.",
        },
        StepId::Team => StepIntro {
            heading: "Your Team",
            blurb: "Add the people behind the company. Enter a name to add a member; leave it empty and press Enter to continue.",
        },
        StepId::Review => StepIntro {
            heading: "Review & Export",
            blurb: "Check everything below, then generate your deck outline.",
        },
    }
}

fn entry(id: StepId, field: DraftField, input: FormField) -> FormEntry {
    let required = id.gate().required().contains(&field);
    FormEntry::new(field, required, input)
}

/// Inputs for the steps edited as plain text forms; `None` for the others
pub fn step_entries(id: StepId) -> Option<Vec<FormEntry>> {
    let entries = match id {
        StepId::Company => vec![
            entry(
                id,
                DraftField::CompanyName,
                FormField::text_input("e.g., Acme Corp", Some(80)),
            ),
            entry(
                id,
                DraftField::Tagline,
                FormField::text_input("e.g., We make work better for everyone", Some(120)),
            ),
            entry(
                id,
                DraftField::Logo,
                FormField::text_input("Path to a logo image (optional)", None),
            ),
        ],
        StepId::ProblemSolution => vec![
            entry(
                id,
                DraftField::Problem,
                FormField::text_area("Describe the pain point your target customers face..."),
            ),
            entry(
                id,
                DraftField::Solution,
                FormField::text_area("Explain your unique approach to solving the problem..."),
            ),
        ],
        StepId::Market => vec![
            entry(
                id,
                DraftField::MarketSize,
                FormField::text_input("e.g., $40B global spend on invoice processing", None),
            ),
            entry(
                id,
                DraftField::TargetAudience,
                FormField::text_area("Who buys from you, and why now?"),
            ),
            entry(
                id,
                DraftField::RevenueModel,
                FormField::text_area("e.g., Per-seat SaaS subscription"),
            ),
        ],
        StepId::Financials => vec![
            entry(
                id,
                DraftField::AskAmount,
                FormField::text_input("e.g., $2M seed round", None),
            ),
            entry(
                id,
                DraftField::UseOfFunds,
                FormField::text_area("e.g., 60% engineering, 30% sales, 10% operations"),
            ),
            entry(
                id,
                DraftField::ProjectedRevenue,
                FormField::text_input("e.g., $5M ARR by year three (optional)", None),
            ),
        ],
        StepId::Template | StepId::Team | StepId::Review => return None,
    };
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_steps_collect_their_fields() {
        for id in StepId::all() {
            if let Some(entries) = step_entries(*id) {
                let fields: Vec<DraftField> = entries.iter().map(|e| e.field).collect();
                assert_eq!(fields, id.fields(), "{}", id.key());
            }
        }
    }

    #[test]
    fn test_required_markers_follow_gates() {
        let entries = step_entries(StepId::Financials).unwrap();
        let required: Vec<bool> = entries.iter().map(|e| e.required).collect();
        assert_eq!(required, vec![true, true, false]);
    }

    #[test]
    fn test_non_form_steps() {
        assert!(step_entries(StepId::Template).is_none());
        assert!(step_entries(StepId::Team).is_none());
        assert!(step_entries(StepId::Review).is_none());
    }
}
