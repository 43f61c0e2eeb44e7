//! Color and style definitions for the terminal screen

use ratatui::style::{Color, Modifier, Style};

// UI Colors
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 220);
pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 100);
pub const BORDER: Color = Color::Rgb(90, 90, 100);
pub const BORDER_FOCUSED: Color = Color::Rgb(120, 170, 230);
pub const ACCENT: Color = Color::Rgb(70, 130, 200);

// Card colors
pub const CARD_BG: Color = Color::Rgb(36, 36, 42);
pub const CARD_SELECTED_BG: Color = Color::Rgb(55, 65, 85);

/// Style for the screen heading
pub fn heading() -> Style {
    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Border style, highlighted when the region has focus
pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUSED)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn placeholder() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn hint() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Style for the submit control
pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }
}

pub fn card() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(CARD_BG)
}

pub fn card_selected() -> Style {
    Style::default().bg(CARD_SELECTED_BG)
}

pub fn card_title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
