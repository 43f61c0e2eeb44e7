//! Single-line text input
//!
//! Wraps a `tui_textarea::TextArea` so editing keys (cursor movement,
//! word deletion, undo) behave the way terminal users expect, while the
//! field stays a single bordered line with a dim placeholder.

use crossterm::event::KeyEvent;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::ui::theme;

/// An editable, bordered one-line field
pub struct TextInput {
    textarea: TextArea<'static>,
    placeholder: String,
    focused: bool,
}

impl TextInput {
    pub fn new(placeholder: &str) -> Self {
        let mut input = Self {
            textarea: TextArea::default(),
            placeholder: placeholder.to_string(),
            focused: false,
        };
        input.apply_style();
        input
    }

    fn apply_style(&mut self) {
        self.textarea.set_placeholder_text(self.placeholder.clone());
        self.textarea.set_placeholder_style(theme::placeholder());
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(self.focused)),
        );
        if self.focused {
            self.textarea
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }
    }

    /// Highlight the border and show the cursor
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.apply_style();
    }

    /// Feed a key press to the editor, returns true if the text changed.
    ///
    /// Enter is never inserted; the field stays on one line.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let mut input = Input::from(key);

        // AltGr arrives as Ctrl+Alt on some platforms
        if matches!(input.key, Key::Char(_)) && input.ctrl && input.alt {
            input.ctrl = false;
            input.alt = false;
        }
        if input.key == Key::Enter || (input.ctrl && input.key == Key::Char('m')) {
            return false;
        }

        let changed = self.textarea.input(input);
        if self.textarea.lines().len() > 1 {
            let text = self.text();
            self.set_text(&text);
        }
        changed
    }

    /// Current text of the field
    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    /// Replace the text, leaving the cursor at its end
    pub fn set_text(&mut self, text: &str) {
        self.textarea = TextArea::from([text.to_string()]);
        self.apply_style();
        self.textarea.move_cursor(CursorMove::End);
    }

    /// The editor, for rendering
    pub fn widget(&self) -> &TextArea<'static> {
        &self.textarea
    }
}
