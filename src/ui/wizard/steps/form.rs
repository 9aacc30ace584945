//! Text form step rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::ui::wizard::WizardScreen;
use crate::wizard::StepId;

impl WizardScreen {
    pub(crate) fn render_form_step(&mut self, frame: &mut Frame, area: Rect, id: StepId) {
        match self.forms.get_mut(&id) {
            Some(form) => form.render(frame, area),
            None => {
                let empty = Paragraph::new("Nothing to fill in on this step.")
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(empty, area);
            }
        }
    }
}
