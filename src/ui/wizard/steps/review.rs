//! Review step rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::wizard::WizardScreen;
use crate::wizard::{DeckTemplate, DraftField, PitchDraft, StepId};

const SUMMARY_WIDTH: usize = 70;

/// One-line summary of a field's value, `None` when it is empty
pub(crate) fn field_summary(field: DraftField, draft: &PitchDraft) -> Option<String> {
    let text = match field {
        DraftField::SelectedTemplate => DeckTemplate::find(&draft.selected_template)
            .map_or(draft.selected_template.clone(), |t| t.name.to_string()),
        DraftField::Logo => draft.logo.as_ref().map(ToString::to_string)?,
        DraftField::TeamMembers => draft
            .team_members
            .iter()
            .map(|m| m.name.as_str())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        field => field.text(draft).unwrap_or_default().to_string(),
    };

    let first_line = text.lines().next().unwrap_or_default();
    if first_line.is_empty() {
        return None;
    }

    let mut summary: String = first_line.chars().take(SUMMARY_WIDTH).collect();
    if summary.len() < text.len() {
        summary.push('…');
    }
    Some(summary)
}

impl WizardScreen {
    pub(crate) fn render_review_step(&self, frame: &mut Frame, area: Rect) {
        let draft = self.wizard.draft();
        let mut lines = Vec::new();

        for step in self.wizard.steps() {
            if step.id == StepId::Review {
                continue;
            }
            let ready = step.gate.is_ready(draft);
            let (mark, mark_style) = if ready {
                ("✓ ", Style::default().fg(Color::Green))
            } else {
                ("✗ ", Style::default().fg(Color::Red))
            };
            lines.push(Line::from(vec![
                Span::styled(mark, mark_style),
                Span::styled(
                    step.title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));

            for field in step.id.fields() {
                let required = step.gate.required().contains(field);
                let value = match field_summary(*field, draft) {
                    Some(summary) => Span::raw(summary),
                    None if required => {
                        Span::styled("missing", Style::default().fg(Color::Red))
                    }
                    None => Span::styled("-", Style::default().fg(Color::DarkGray)),
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("    {}: ", field.label()),
                        Style::default().fg(Color::Gray),
                    ),
                    value,
                ]));
            }
        }

        let summary = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Summary ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(summary, area);
    }
}
