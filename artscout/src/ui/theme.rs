//! Color theme and styling for the artscout TUI

use ratatui::style::{Color, Modifier, Style};

/// UI color theme
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Theme {
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    pub title: Color,
    pub label: Color,
    pub value: Color,
    pub banned: Color,
    pub selected_bg: Color,
    pub error: Color,
    pub status: Color,
    pub hint: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            title: Color::Yellow,
            label: Color::DarkGray,
            value: Color::White,
            banned: Color::Red,
            selected_bg: Color::DarkGray,
            error: Color::Red,
            status: Color::Cyan,
            hint: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label)
    }

    pub fn value_style(&self) -> Style {
        Style::default().fg(self.value)
    }

    /// Style for an attribute value that is currently banned
    pub fn banned_style(&self) -> Style {
        Style::default()
            .fg(self.banned)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }
}
