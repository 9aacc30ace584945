//! Template selection step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::wizard::WizardScreen;
use crate::wizard::DeckTemplate;

impl WizardScreen {
    pub(crate) fn render_template_step(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(area);

        let selected = self.wizard.draft().selected_template.clone();
        let items: Vec<ListItem> = DeckTemplate::all()
            .iter()
            .map(|template| {
                let is_selected = template.id == selected;
                let marker = if is_selected { "(•) " } else { "( ) " };
                let name_style = if is_selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                let mut title = vec![
                    Span::styled(marker, name_style),
                    Span::styled(template.name, name_style),
                ];
                if template.recommended {
                    title.push(Span::styled(
                        "  Recommended",
                        Style::default().fg(Color::Green),
                    ));
                }

                ListItem::new(vec![
                    Line::from(title),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(template.description, Style::default().fg(Color::DarkGray)),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, chunks[0], &mut self.template_state);

        let instructions = Paragraph::new(Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(" highlight  "),
            Span::styled("Space", Style::default().fg(Color::Yellow)),
            Span::raw(" select  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" select and continue"),
        ]))
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(instructions, chunks[1]);
    }
}
