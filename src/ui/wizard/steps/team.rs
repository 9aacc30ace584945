//! Team step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_team_step(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.team.render(frame, columns[0]);

        let members = &self.wizard.draft().team_members;
        let block = Block::default()
            .title(format!(" Team Members ({}) ", members.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));

        if members.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled(
                    "No team members yet",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "Type a name and press Enter to add one",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(block);
            frame.render_widget(empty, columns[1]);
            return;
        }

        let items: Vec<ListItem> = members
            .iter()
            .map(|member| {
                let mut title = vec![Span::styled(
                    member.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if !member.role.is_empty() {
                    title.push(Span::styled(
                        format!(", {}", member.role),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                let mut lines = vec![Line::from(title)];
                if !member.bio.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", member.bio),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        frame.render_widget(List::new(items).block(block), columns[1]);
    }
}
