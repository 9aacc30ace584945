//! Pitch deck wizard screen
//!
//! Translates key events into [`Wizard`] calls and renders the current step.
//! Every edit is merged into the draft as it is typed; the screen keeps only
//! input widgets and list selection of its own.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::ui::dialogs::HelpDialog;
use crate::ui::form_field::StepForm;
use crate::wizard::{Advance, DeckTemplate, DraftField, DraftPatch, StepId, Wizard};

pub mod steps;
pub mod team_form;
pub mod types;

pub use team_form::TeamForm;
pub use types::*;


pub struct WizardScreen {
    wizard: Wizard,
    /// Inputs for the text form steps
    pub(crate) forms: HashMap<StepId, StepForm>,
    /// Highlighted row on the template step
    pub(crate) template_state: ListState,
    /// Next team member being typed
    pub(crate) team: TeamForm,
    pub(crate) help: HelpDialog,
    notice: Option<Notice>,
}

impl WizardScreen {
    pub fn new(wizard: Wizard) -> Self {
        let mut forms = HashMap::new();
        for step in wizard.steps() {
            if let Some(entries) = step_entries(step.id) {
                let mut form = StepForm::new(entries);
                form.load(wizard.draft());
                forms.insert(step.id, form);
            }
        }

        let mut template_state = ListState::default();
        template_state.select(Some(
            DeckTemplate::position(&wizard.draft().selected_template).unwrap_or(0),
        ));

        Self {
            wizard,
            forms,
            template_state,
            team: TeamForm::new(),
            help: HelpDialog::new(),
            notice: None,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    fn current_id(&self) -> StepId {
        self.wizard.current_step().id
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> WizardResult {
        if self.help.visible {
            self.help.toggle();
            return WizardResult::Continue;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return WizardResult::Cancel,
                KeyCode::Char('s') => return WizardResult::SaveDraft,
                KeyCode::Char('n') => return self.next(),
                KeyCode::Char('p') => return self.go_back(),
                _ => {}
            }
        }

        match key.code {
            KeyCode::F(1) => {
                self.help.toggle();
                WizardResult::Continue
            }
            KeyCode::Esc => {
                if self.wizard.is_first() {
                    WizardResult::Cancel
                } else {
                    self.go_back()
                }
            }
            KeyCode::Tab => {
                self.focus_next();
                WizardResult::Continue
            }
            KeyCode::BackTab => {
                self.focus_prev();
                WizardResult::Continue
            }
            KeyCode::Enter => self.handle_enter(key),
            _ => {
                self.edit(key);
                WizardResult::Continue
            }
        }
    }

    fn handle_enter(&mut self, key: KeyEvent) -> WizardResult {
        match self.current_id() {
            id @ (StepId::Company | StepId::ProblemSolution | StepId::Market | StepId::Financials)
                if self
                    .forms
                    .get(&id)
                    .is_some_and(StepForm::focused_is_multiline) =>
            {
                self.edit(key);
                WizardResult::Continue
            }
            StepId::Team if !self.team.name().trim().is_empty() => {
                self.add_team_member();
                WizardResult::Continue
            }
            _ => self.confirm(),
        }
    }

    /// Continue from the current step (Enter).
    ///
    /// Honours the continue affordance: an unready step stays put and names
    /// its missing fields. On the last step a complete draft yields `Export`.
    pub fn confirm(&mut self) -> WizardResult {
        if self.current_id() == StepId::Template {
            self.select_highlighted_template();
        }

        if !self.wizard.can_advance() {
            self.show_missing();
            return WizardResult::Continue;
        }

        if self.wizard.is_last() {
            return WizardResult::Export;
        }
        self.next()
    }

    /// Advance under the wizard's gate policy (Ctrl-N)
    pub fn next(&mut self) -> WizardResult {
        match self.wizard.advance() {
            Advance::Moved { .. } => self.notice = None,
            Advance::AtEnd => {}
            Advance::Blocked { .. } => self.show_missing(),
        }
        WizardResult::Continue
    }

    /// Return to the previous step
    pub fn go_back(&mut self) -> WizardResult {
        if self.wizard.retreat() {
            self.notice = None;
        }
        WizardResult::Continue
    }

    fn show_missing(&mut self) {
        let step = self.wizard.current_step();
        if let Some(hint) = step.gate.hint(self.wizard.draft()) {
            self.notice = Some(Notice::Error(hint));
        }
    }

    fn focus_next(&mut self) {
        let id = self.current_id();
        if id == StepId::Team {
            self.team.next_field();
        } else if let Some(form) = self.forms.get_mut(&id) {
            form.next_field();
        }
    }

    fn focus_prev(&mut self) {
        let id = self.current_id();
        if id == StepId::Team {
            self.team.prev_field();
        } else if let Some(form) = self.forms.get_mut(&id) {
            form.prev_field();
        }
    }

    /// Route an editing key to the current step's widgets
    fn edit(&mut self, key: KeyEvent) {
        match self.current_id() {
            StepId::Template => match key.code {
                KeyCode::Up => self.move_template_highlight(false),
                KeyCode::Down => self.move_template_highlight(true),
                KeyCode::Char(' ') => self.select_highlighted_template(),
                _ => {}
            },
            StepId::Team => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('d')
                {
                    self.remove_last_team_member();
                } else {
                    self.team.handle_key(key);
                }
            }
            StepId::Review => {}
            id => {
                let patch = self.forms.get_mut(&id).and_then(|form| form.handle_key(key));
                if let Some(patch) = patch {
                    self.wizard.merge_draft(patch);
                }
            }
        }
    }

    fn move_template_highlight(&mut self, forward: bool) {
        let len = DeckTemplate::all().len();
        let i = self.template_state.selected().map_or(0, |i| {
            if forward {
                (i + 1) % len
            } else if i == 0 {
                len - 1
            } else {
                i - 1
            }
        });
        self.template_state.select(Some(i));
    }

    fn select_highlighted_template(&mut self) {
        let Some(template) = self
            .template_state
            .selected()
            .and_then(|i| DeckTemplate::all().get(i))
        else {
            return;
        };
        if self.wizard.draft().selected_template != template.id {
            self.wizard.merge_draft(
                DraftPatch::default().with_text(DraftField::SelectedTemplate, template.id),
            );
        }
    }

    fn add_team_member(&mut self) {
        if let Some(member) = self.team.take_member() {
            let mut members = self.wizard.draft().team_members.clone();
            self.notice = Some(Notice::Info(format!("Added {}", member.name)));
            members.push(member);
            self.wizard.merge_draft(DraftPatch::default().with_team(members));
        }
    }

    fn remove_last_team_member(&mut self) {
        let mut members = self.wizard.draft().team_members.clone();
        if let Some(removed) = members.pop() {
            self.notice = Some(Notice::Info(format!("Removed {}", removed.name)));
            self.wizard.merge_draft(DraftPatch::default().with_team(members));
        }
    }
}
