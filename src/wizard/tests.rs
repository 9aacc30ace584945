//! Tests for the wizard state machine

use super::*;

fn wizard() -> Wizard {
    Wizard::pitch_deck(PitchDraft::initial(), GatePolicy::Advisory)
}

fn complete_draft() -> PitchDraft {
    let mut draft = PitchDraft::initial();
    draft.company_name = "Acme".to_string();
    draft.tagline = "We make work better".to_string();
    draft.problem = "Invoices take weeks to reconcile".to_string();
    draft.solution = "Automatic matching against bank feeds".to_string();
    draft.market_size = "$40B".to_string();
    draft.target_audience = "Mid-size accounting teams".to_string();
    draft.revenue_model = "Per-seat SaaS".to_string();
    draft.ask_amount = "$2M".to_string();
    draft.use_of_funds = "Engineering and sales".to_string();
    draft.team_members = vec![TeamMember::new("Ada", "CEO", "")];
    draft
}

#[test]
fn test_new_wizard_starts_at_first_step() {
    let wizard = wizard();
    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.step_count(), 7);
    assert_eq!(wizard.current_step().id, StepId::Template);
    assert!(wizard.is_first());
    assert!(!wizard.is_last());
}

#[test]
fn test_new_rejects_empty_sequence() {
    let err = Wizard::new(Vec::new(), PitchDraft::initial(), GatePolicy::Advisory).unwrap_err();
    assert_eq!(err, WizardError::NoSteps);
}

#[test]
fn test_new_rejects_duplicate_steps() {
    let steps = vec![StepId::Company.into(), StepId::Company.into()];
    let err = Wizard::new(steps, PitchDraft::initial(), GatePolicy::Advisory).unwrap_err();
    assert_eq!(err, WizardError::DuplicateStep("company"));
}

#[test]
fn test_single_step_wizard_is_first_and_last() {
    let steps = vec![StepId::Review.into()];
    let mut wizard = Wizard::new(steps, PitchDraft::initial(), GatePolicy::Advisory).unwrap();
    assert!(wizard.is_first());
    assert!(wizard.is_last());
    assert_eq!(wizard.advance(), Advance::AtEnd);
    assert!(!wizard.retreat());
    assert!((wizard.progress_fraction() - 1.0).abs() < f64::EPSILON);
}

// ─── Navigation ─────────────────────────────────────────────────────────────

#[test]
fn test_seven_advances_stop_at_last_step() {
    let mut wizard = wizard();
    for _ in 0..7 {
        wizard.advance();
    }
    assert_eq!(wizard.current_index(), 6);

    assert_eq!(wizard.advance(), Advance::AtEnd);
    assert_eq!(wizard.current_index(), 6);
    assert!(wizard.is_last());
}

#[test]
fn test_advance_reports_move() {
    let mut wizard = wizard();
    assert_eq!(wizard.advance(), Advance::Moved { from: 0, to: 1 });
    assert_eq!(wizard.current_step().id, StepId::Company);
}

#[test]
fn test_retreat_clamps_at_first_step() {
    let mut wizard = wizard();
    assert!(!wizard.retreat());
    assert_eq!(wizard.current_index(), 0);

    wizard.advance();
    assert!(wizard.retreat());
    assert_eq!(wizard.current_index(), 0);
}

#[test]
fn test_index_stays_in_bounds_for_every_short_sequence() {
    // Exhaustive over all advance/retreat sequences of length 10
    for mask in 0u32..(1 << 10) {
        let mut wizard = wizard();
        for bit in 0..10 {
            if mask & (1 << bit) == 0 {
                wizard.advance();
            } else {
                wizard.retreat();
            }
            assert!(wizard.current_index() < wizard.step_count());
        }
    }
}

#[test]
fn test_advisory_policy_ignores_gates() {
    let mut wizard = wizard();
    wizard.advance(); // company, empty
    assert!(!wizard.can_advance());
    assert_eq!(wizard.advance(), Advance::Moved { from: 1, to: 2 });
}

#[test]
fn test_enforced_policy_blocks_unready_step() {
    let mut wizard = Wizard::pitch_deck(PitchDraft::initial(), GatePolicy::Enforced);
    assert!(matches!(wizard.advance(), Advance::Moved { .. }));

    let outcome = wizard.advance();
    assert_eq!(
        outcome,
        Advance::Blocked {
            missing: vec![DraftField::CompanyName, DraftField::Tagline]
        }
    );
    assert_eq!(wizard.current_step().id, StepId::Company);

    wizard.merge_draft(
        DraftPatch::default()
            .with_text(DraftField::CompanyName, "Acme")
            .with_text(DraftField::Tagline, "We make work better"),
    );
    assert_eq!(wizard.advance(), Advance::Moved { from: 1, to: 2 });
}

#[test]
fn test_enforced_policy_still_reports_at_end() {
    let mut wizard = Wizard::pitch_deck(PitchDraft::initial(), GatePolicy::Enforced);
    wizard.merge_draft(DraftPatch {
        company_name: Some("Acme".to_string()),
        ..Default::default()
    });
    // Retreat is never gated
    assert!(!wizard.retreat());

    let mut wizard = Wizard::pitch_deck(complete_draft(), GatePolicy::Enforced);
    for _ in 0..6 {
        assert!(matches!(wizard.advance(), Advance::Moved { .. }));
    }
    assert_eq!(wizard.advance(), Advance::AtEnd);
}

#[test]
fn test_step_status() {
    let mut wizard = wizard();
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.step_status(0), StepStatus::Completed);
    assert_eq!(wizard.step_status(1), StepStatus::Completed);
    assert_eq!(wizard.step_status(2), StepStatus::Current);
    assert_eq!(wizard.step_status(3), StepStatus::Upcoming);
}

// ─── Progress ───────────────────────────────────────────────────────────────

#[test]
fn test_progress_strictly_increases_and_ends_at_one() {
    let mut wizard = wizard();
    let mut previous = wizard.progress_fraction();
    assert!(previous > 0.0);

    while !wizard.is_last() {
        wizard.advance();
        let current = wizard.progress_fraction();
        assert!(current > previous);
        assert!(current <= 1.0);
        if !wizard.is_last() {
            assert!(current < 1.0);
        }
        previous = current;
    }
    assert!((wizard.progress_fraction() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_progress_percent_rounds() {
    let mut wizard = wizard();
    assert_eq!(wizard.progress_percent(), 14);
    wizard.advance();
    assert_eq!(wizard.progress_percent(), 29);
    for _ in 0..5 {
        wizard.advance();
    }
    assert_eq!(wizard.progress_percent(), 100);
}

// ─── Merging & gates ────────────────────────────────────────────────────────

#[test]
fn test_merge_company_info_satisfies_company_gate() {
    let mut wizard = wizard();
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
fn test_merge_is_idempotent() {
    let patch = DraftPatch::default()
        .with_text(DraftField::Problem, "Slow invoices")
        .with_team(vec![TeamMember::new("Ada", "CEO", "")]);

    let mut once = wizard();
    once.merge_draft(patch.clone());

    let mut twice = wizard();
    twice.merge_draft(patch.clone());
    twice.merge_draft(patch);

    assert_eq!(once.draft(), twice.draft());
}

#[test]
fn test_merge_is_field_local() {
    let mut wizard = Wizard::pitch_deck(complete_draft(), GatePolicy::Advisory);
    let before = wizard.draft().clone();

    wizard.merge_draft(DraftPatch::default().with_text(DraftField::MarketSize, "$90B"));

    let mut expected = before;
    expected.market_size = "$90B".to_string();
    assert_eq!(wizard.draft(), &expected);
}

#[test]
fn test_empty_problem_fails_problem_gate() {
    let mut wizard = wizard();
    wizard.merge_draft(DraftPatch::default().with_text(DraftField::Solution, "Automation"));
    wizard.merge_draft(DraftPatch::default().with_text(DraftField::Problem, ""));

    assert!(!StepId::ProblemSolution.gate().is_ready(wizard.draft()));
}

#[test]
fn test_can_advance_tracks_current_gate() {
    let mut wizard = wizard();
    assert!(wizard.can_advance());

    wizard.advance();
    assert!(!wizard.can_advance());
    assert_eq!(
        wizard.missing_fields(),
        vec![DraftField::CompanyName, DraftField::Tagline]
    );

    wizard.merge_draft(DraftPatch::default().with_text(DraftField::CompanyName, "Acme"));
    assert_eq!(wizard.missing_fields(), vec![DraftField::Tagline]);
}

#[test]
fn test_ready_to_export() {
    assert!(!wizard().ready_to_export());
    let wizard = Wizard::pitch_deck(complete_draft(), GatePolicy::Advisory);
    assert!(wizard.ready_to_export());
    assert_eq!(wizard.into_draft().company_name, "Acme");
}

#[test]
fn test_gate_policy_from_enforce() {
    assert_eq!(GatePolicy::from_enforce(true), GatePolicy::Enforced);
    assert_eq!(GatePolicy::from_enforce(false), GatePolicy::Advisory);
    assert_eq!(GatePolicy::default(), GatePolicy::Advisory);
}
