//! Integration tests for the wizard engine through the public library API
//!
//! These walk a draft through the full pitch deck sequence the way a front
//! end would: merge what the user typed, then advance or retreat.

use pitchdeck::wizard::{
    pitch_steps, Advance, DraftField, DraftPatch, GatePolicy, PitchDraft, StepId, TeamMember,
    Wizard,
};

// ─── Helpers ────────────────────────────────────────────────────────────────

fn fill_current_step(wizard: &mut Wizard) {
    let patch = match wizard.current_step().id {
        StepId::Company => DraftPatch::default()
            .with_text(DraftField::CompanyName, "Acme")
            .with_text(DraftField::Tagline, "We make work better"),
        StepId::ProblemSolution => DraftPatch::default()
            .with_text(DraftField::Problem, "Invoices take weeks")
            .with_text(DraftField::Solution, "Automatic matching"),
        StepId::Market => DraftPatch::default()
            .with_text(DraftField::MarketSize, "$40B")
            .with_text(DraftField::TargetAudience, "Accounting teams")
            .with_text(DraftField::RevenueModel, "Per-seat SaaS"),
        StepId::Financials => DraftPatch::default()
            .with_text(DraftField::AskAmount, "$2M")
            .with_text(DraftField::UseOfFunds, "Engineering"),
        StepId::Team => {
            DraftPatch::default().with_team(vec![TeamMember::new("Ada", "CEO", "")])
        }
        StepId::Template | StepId::Review => DraftPatch::default(),
    };
    wizard.merge_draft(patch);
}

// ─── Scenarios ──────────────────────────────────────────────────────────────

#[test]
fn test_full_walk_under_enforced_policy() {
    let mut wizard = Wizard::pitch_deck(PitchDraft::initial(), GatePolicy::Enforced);
    let mut visited = vec![wizard.current_step().id];

    while !wizard.is_last() {
        fill_current_step(&mut wizard);
        assert!(wizard.can_advance(), "{} not ready", wizard.current_step().id);
        assert!(matches!(wizard.advance(), Advance::Moved { .. }));
        visited.push(wizard.current_step().id);
    }

    assert_eq!(visited, StepId::all());
    assert!(wizard.ready_to_export());
    assert_eq!(wizard.progress_percent(), 100);
}

#[test]
fn test_company_merge_readies_company_and_template_gates() {
    let mut wizard = Wizard::pitch_deck(PitchDraft::initial(), GatePolicy::Advisory);
    assert_eq!(wizard.draft().selected_template, "investor");

    wizard.merge_draft(DraftPatch {
        company_name: Some("Acme".to_string()),
        tagline: Some("We make work better".to_string()),
        ..Default::default()
    });

    assert!(StepId::Company.gate().is_ready(wizard.draft()));
    assert!(StepId::Template.gate().is_ready(wizard.draft()));
}

#[test]
fn test_eight_advances_over_seven_steps() {
    let mut wizard = Wizard::pitch_deck(PitchDraft::initial(), GatePolicy::Advisory);
    for _ in 0..7 {
        wizard.advance();
    }
    assert_eq!(wizard.current_index(), 6);
    assert_eq!(wizard.advance(), Advance::AtEnd);
    assert_eq!(wizard.current_index(), 6);
}

#[test]
fn test_clearing_problem_closes_gate() {
    let mut wizard = Wizard::pitch_deck(PitchDraft::initial(), GatePolicy::Advisory);
    wizard.merge_draft(
        DraftPatch::default()
            .with_text(DraftField::Problem, "Invoices take weeks")
            .with_text(DraftField::Solution, "Automatic matching"),
    );
    assert!(StepId::ProblemSolution.gate().is_ready(wizard.draft()));

    wizard.merge_draft(DraftPatch::default().with_text(DraftField::Problem, ""));
    assert!(!StepId::ProblemSolution.gate().is_ready(wizard.draft()));
    assert_eq!(wizard.draft().solution, "Automatic matching");
}

#[test]
fn test_back_and_forth_keeps_draft() {
    let mut wizard = Wizard::pitch_deck(PitchDraft::initial(), GatePolicy::Advisory);
    wizard.advance();
    fill_current_step(&mut wizard);
    let snapshot = wizard.draft().clone();

    wizard.advance();
    wizard.advance();
    assert!(wizard.retreat());
    assert!(wizard.retreat());
    assert!(wizard.retreat());
    assert!(!wizard.retreat());

    assert_eq!(wizard.draft(), &snapshot);
    assert_eq!(wizard.current_step().id, StepId::Template);
}

#[test]
fn test_custom_sequence_skips_steps() {
    let steps = vec![StepId::Company.into(), StepId::Review.into()];
    let mut wizard = Wizard::new(steps, PitchDraft::initial(), GatePolicy::Advisory).unwrap();

    assert_eq!(wizard.step_count(), 2);
    assert!((wizard.progress_fraction() - 0.5).abs() < f64::EPSILON);
    assert_eq!(wizard.advance(), Advance::Moved { from: 0, to: 1 });
    assert_eq!(wizard.current_step().id, StepId::Review);
}

#[test]
fn test_standard_sequence_titles() {
    let titles: Vec<&str> = pitch_steps().iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec![
            "Choose Template",
            "Company Info",
            "Problem & Solution",
            "Market & Model",
            "Financials",
            "Team",
            "Review & Export"
        ]
    );
}
