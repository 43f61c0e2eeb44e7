//! Submit button widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme;

/// Horizontal padding around the label, per side
const LABEL_PADDING: u16 = 3;

/// A bordered, centered label that acts as the submit control
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width needed to show the whole label with padding and borders
    pub fn preferred_width(&self) -> u16 {
        let label = ratatui::text::Line::raw(self.label).width() as u16;
        label.saturating_add(2 * LABEL_PADDING + 2)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(self.focused));

        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(theme::button(self.focused))
            .block(block)
            .render(area, buf);
    }
}
