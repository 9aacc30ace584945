//! Render methods for the wizard screen

mod form;
mod review;
mod team;
mod template;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::ui::dialogs::centered_rect;
use crate::ui::keybindings::footer_hints;
use crate::ui::wizard::{step_intro, Notice, WizardScreen};
use crate::wizard::{StepId, StepStatus};

impl WizardScreen {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = centered_rect(94, 96, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "pitchdeck",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Step strip
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Intro
                Constraint::Min(6),    // Step content
                Constraint::Length(3), // Footer
            ])
            .split(inner);

        self.render_header(frame, chunks[0]);
        self.render_step_strip(frame, chunks[1]);
        self.render_intro(frame, chunks[3]);

        match self.wizard.current_step().id {
            StepId::Template => self.render_template_step(frame, chunks[4]),
            StepId::Team => self.render_team_step(frame, chunks[4]),
            StepId::Review => self.render_review_step(frame, chunks[4]),
            id => self.render_form_step(frame, chunks[4], id),
        }

        self.render_footer(frame, chunks[5]);
        self.help.render(frame);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Create Your Pitch Deck",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        let status = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(14)])
            .split(rows[1]);

        let step = Paragraph::new(format!(
            "Step {} of {}: {}",
            self.wizard.current_index() + 1,
            self.wizard.step_count(),
            self.wizard.current_step().title
        ))
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(step, status[0]);

        let percent = Paragraph::new(format!("{}% Complete", self.wizard.progress_percent()))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right);
        frame.render_widget(percent, status[1]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(self.wizard.progress_fraction())
            .label("");
        frame.render_widget(gauge, rows[2]);
    }

    fn render_step_strip(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, step) in self.wizard.steps().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
            }
            let span = match self.wizard.step_status(i) {
                StepStatus::Completed => {
                    Span::styled(format!("✓ {}", step.title), Style::default().fg(Color::Green))
                }
                StepStatus::Current => Span::styled(
                    format!("{} {}", i + 1, step.title),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                StepStatus::Upcoming => Span::styled(
                    format!("{} {}", i + 1, step.title),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            spans.push(span);
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_intro(&self, frame: &mut Frame, area: Rect) {
        let intro = step_intro(self.wizard.current_step().id);
        let text = vec![
            Line::from(Span::styled(
                intro.heading,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(intro.blurb, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let ready = self.wizard.can_advance();

        let status = match &self.notice {
            Some(Notice::Info(text)) => {
                Span::styled(text.clone(), Style::default().fg(Color::Green))
            }
            Some(Notice::Error(text)) => {
                Span::styled(text.clone(), Style::default().fg(Color::Red))
            }
            None => match self.wizard.current_step().gate.hint(self.wizard.draft()) {
                Some(hint) => Span::styled(hint, Style::default().fg(Color::DarkGray)),
                None => Span::styled("✓ Ready to continue", Style::default().fg(Color::Green)),
            },
        };
        frame.render_widget(Paragraph::new(Line::from(status)), rows[0]);

        let previous_style = if self.wizard.is_first() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let next_style = if ready {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let next_label = if self.wizard.is_last() {
            "[ Generate Deck ]"
        } else {
            "[ Next → ]"
        };

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        frame.render_widget(
            Paragraph::new(Span::styled("[ ← Previous ]", previous_style)),
            buttons[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(next_label, next_style)).alignment(Alignment::Right),
            buttons[1],
        );

        let mut hints = Vec::new();
        for (key, description) in footer_hints() {
            hints.push(Span::styled(key, Style::default().fg(Color::Yellow)));
            hints.push(Span::styled(
                format!(" {}  ", description.to_lowercase()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(hints)), rows[2]);
    }
}
