//! Team member entry form

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::ui::form_field::FormField;
use crate::wizard::TeamMember;

const LABELS: [&str; 3] = ["Name", "Role", "Bio"];

/// Name, role and bio inputs for the next member to add
pub struct TeamForm {
    inputs: [FormField; 3],
    pub focused_index: usize,
}

impl Default for TeamForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamForm {
    pub fn new() -> Self {
        Self {
            inputs: [
                FormField::text_input("e.g., Jane Doe", Some(80)),
                FormField::text_input("e.g., CEO & Co-founder", Some(80)),
                FormField::text_input("One line of relevant experience", Some(160)),
            ],
            focused_index: 0,
        }
    }

    pub fn name(&self) -> String {
        self.inputs[0].value()
    }

    pub fn next_field(&mut self) {
        self.focused_index = (self.focused_index + 1) % self.inputs.len();
    }

    pub fn prev_field(&mut self) {
        let len = self.inputs.len();
        self.focused_index = (self.focused_index + len - 1) % len;
    }

    /// Edit the focused input
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.inputs[self.focused_index].handle_key(key)
    }

    /// Build a member from the inputs and clear them. `None` while the name is blank.
    pub fn take_member(&mut self) -> Option<TeamMember> {
        let name = self.inputs[0].value().trim().to_string();
        if name.is_empty() {
            return None;
        }
        let member = TeamMember::new(
            name,
            self.inputs[1].value().trim(),
            self.inputs[2].value().trim(),
        );
        for input in &mut self.inputs {
            input.set_value("");
        }
        self.focused_index = 0;
        Some(member)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        for (i, input) in self.inputs.iter_mut().enumerate() {
            let focused = i == self.focused_index;
            let style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let title = Line::from(Span::styled(format!(" {} ", LABELS[i]), style));
            input.render(frame, chunks[i], title, focused);
        }
    }
}
