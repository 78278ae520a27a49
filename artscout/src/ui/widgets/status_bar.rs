//! Status and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// One-line status message bar
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, error: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            message,
            error,
            theme,
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Errors outrank status messages.
        let line = if let Some(error) = self.error {
            Line::from(Span::styled(format!(" {error}"), self.theme.error_style()))
        } else if let Some(message) = self.message {
            Line::from(Span::styled(
                format!(" {message}"),
                self.theme.status_style(),
            ))
        } else {
            Line::default()
        };

        Paragraph::new(line).render(area, buf);
    }
}

/// One-line key hint bar
pub struct HotkeyBarWidget<'a> {
    theme: &'a Theme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(Span::styled(
            " d discover | Tab focus | j/k select | Enter ban/unban/view | ? help | q quit",
            self.theme.hint_style(),
        ));
        Paragraph::new(line).render(area, buf);
    }
}
