//! Text inputs for the wizard's form steps

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use crate::wizard::{DraftField, DraftPatch, LogoRef, PitchDraft};

/// A single editable input
pub enum FormField {
    /// Single-line text input; `cursor` counts characters, not bytes
    TextInput {
        value: String,
        cursor: usize,
        placeholder: String,
        max_length: Option<usize>,
    },
    /// Multi-line text input using tui-textarea
    TextArea {
        textarea: Box<TextArea<'static>>,
        placeholder: String,
    },
}

impl FormField {
    pub fn text_input(placeholder: &str, max_length: Option<usize>) -> Self {
        FormField::TextInput {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.to_string(),
            max_length,
        }
    }

    pub fn text_area(placeholder: &str) -> Self {
        FormField::TextArea {
            textarea: Box::default(),
            placeholder: placeholder.to_string(),
        }
    }

    /// Get the current value as a string
    pub fn value(&self) -> String {
        match self {
            FormField::TextInput { value, .. } => value.clone(),
            FormField::TextArea { textarea, .. } => textarea.lines().join("\n"),
        }
    }

    /// Replace the value and move the cursor to the end
    pub fn set_value(&mut self, new_value: &str) {
        match self {
            FormField::TextInput { value, cursor, .. } => {
                *value = new_value.to_string();
                *cursor = value.chars().count();
            }
            FormField::TextArea { textarea, .. } => {
                textarea.select_all();
                textarea.cut();
                textarea.insert_str(new_value);
            }
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::TextArea { .. })
    }

    /// Handle a key event, returns true if the value changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self {
            FormField::TextInput {
                value,
                cursor,
                max_length,
                ..
            } => {
                let len = value.chars().count();
                match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        if max_length.map_or(true, |m| len < m) {
                            value.insert(byte_index(value, *cursor), c);
                            *cursor += 1;
                            return true;
                        }
                        false
                    }
                    KeyCode::Backspace => {
                        if *cursor > 0 {
                            *cursor -= 1;
                            value.remove(byte_index(value, *cursor));
                            return true;
                        }
                        false
                    }
                    KeyCode::Delete => {
                        if *cursor < len {
                            value.remove(byte_index(value, *cursor));
                            return true;
                        }
                        false
                    }
                    KeyCode::Left => {
                        *cursor = cursor.saturating_sub(1);
                        false
                    }
                    KeyCode::Right => {
                        *cursor = (*cursor + 1).min(len);
                        false
                    }
                    KeyCode::Home => {
                        *cursor = 0;
                        false
                    }
                    KeyCode::End => {
                        *cursor = len;
                        false
                    }
                    _ => false,
                }
            }
            FormField::TextArea { textarea, .. } => textarea.input(key),
        }
    }

    /// Rows needed including the border
    pub fn render_height(&self) -> u16 {
        match self {
            FormField::TextInput { .. } => 3,
            FormField::TextArea { .. } => 6,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, title: Line<'static>, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        match self {
            FormField::TextInput {
                value,
                cursor,
                placeholder,
                max_length,
            } => {
                let content = if value.is_empty() && !focused {
                    Line::from(Span::styled(
                        placeholder.clone(),
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    let mut text = value.clone();
                    if focused {
                        text.insert(byte_index(&text, *cursor), '|');
                    }
                    let suffix = max_length
                        .map(|m| format!(" ({}/{})", value.chars().count(), m))
                        .unwrap_or_default();
                    Line::from(vec![
                        Span::raw(text),
                        Span::styled(suffix, Style::default().fg(Color::DarkGray)),
                    ])
                };

                let para = Paragraph::new(content).block(block).style(
                    Style::default().fg(if focused { Color::White } else { Color::Gray }),
                );
                frame.render_widget(para, area);
            }
            FormField::TextArea {
                textarea,
                placeholder,
            } => {
                textarea.set_cursor_line_style(Style::default());
                textarea.set_cursor_style(if focused {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                });
                textarea.set_block(block);
                textarea.set_placeholder_text(placeholder.clone());
                textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

                frame.render_widget(&**textarea, area);
            }
        }
    }
}

fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map_or(value.len(), |(i, _)| i)
}

/// One input bound to a draft field
pub struct FormEntry {
    pub field: DraftField,
    pub required: bool,
    pub input: FormField,
}

impl FormEntry {
    pub fn new(field: DraftField, required: bool, input: FormField) -> Self {
        Self {
            field,
            required,
            input,
        }
    }

    /// Patch carrying this entry's current value
    pub fn patch(&self) -> DraftPatch {
        let value = self.input.value();
        match self.field {
            DraftField::Logo if value.trim().is_empty() => DraftPatch::default().without_logo(),
            DraftField::Logo => DraftPatch::default().with_logo(LogoRef::new(value.trim())),
            field => DraftPatch::default().with_text(field, value),
        }
    }

    fn title(&self, focused: bool) -> Line<'static> {
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if self.required { " *" } else { "" };
        Line::from(Span::styled(
            format!(" {}{} ", self.field.label(), marker),
            style,
        ))
    }
}

/// The inputs of one step, with keyboard focus
pub struct StepForm {
    pub entries: Vec<FormEntry>,
    pub focused_index: usize,
}

impl StepForm {
    pub fn new(entries: Vec<FormEntry>) -> Self {
        Self {
            entries,
            focused_index: 0,
        }
    }

    /// Fill every input from the draft
    pub fn load(&mut self, draft: &PitchDraft) {
        for entry in &mut self.entries {
            let value = match entry.field {
                DraftField::Logo => draft.logo.as_ref().map(ToString::to_string),
                field => field.text(draft).map(str::to_string),
            };
            if let Some(value) = value {
                entry.input.set_value(&value);
            }
        }
    }

    pub fn focused(&self) -> Option<&FormEntry> {
        self.entries.get(self.focused_index)
    }

    /// Whether Enter belongs to the focused input (newline) rather than the wizard
    pub fn focused_is_multiline(&self) -> bool {
        self.focused().is_some_and(|e| e.input.is_multiline())
    }

    /// Move to the next field, wrapping around
    pub fn next_field(&mut self) {
        if !self.entries.is_empty() {
            self.focused_index = (self.focused_index + 1) % self.entries.len();
        }
    }

    /// Move to the previous field, wrapping around
    pub fn prev_field(&mut self) {
        if !self.entries.is_empty() {
            let len = self.entries.len();
            self.focused_index = (self.focused_index + len - 1) % len;
        }
    }

    /// Edit the focused input; returns the patch to merge when its value changed
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DraftPatch> {
        let entry = self.entries.get_mut(self.focused_index)?;
        if entry.input.handle_key(key) {
            Some(entry.patch())
        } else {
            None
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut constraints: Vec<Constraint> = self
            .entries
            .iter()
            .map(|e| Constraint::Length(e.input.render_height()))
            .collect();
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let focused_index = self.focused_index;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            let focused = i == focused_index;
            let title = entry.title(focused);
            entry.input.render(frame, chunks[i], title, focused);
        }
    }
}
