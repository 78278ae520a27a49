//! Session history widget

use std::collections::VecDeque;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use artscout_core::ArtObject;

use crate::ui::theme::Theme;

const TITLE_WIDTH: usize = 30;

/// Widget for previously viewed artworks, most recent first
pub struct HistoryWidget<'a> {
    history: &'a VecDeque<ArtObject>,
    theme: &'a Theme,
    cursor: usize,
    focused: bool,
    current_id: Option<u32>,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(history: &'a VecDeque<ArtObject>, theme: &'a Theme) -> Self {
        Self {
            history,
            theme,
            cursor: 0,
            focused: false,
            current_id: None,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark the record currently on display
    pub fn current_id(mut self, id: Option<u32>) -> Self {
        self.current_id = id;
        self
    }
}

/// Truncate a title for the narrow history column
fn short_title(record: &ArtObject) -> String {
    let title = record.display_title();
    if title.chars().count() > TITLE_WIDTH {
        let clipped: String = title.chars().take(TITLE_WIDTH).collect();
        format!("{clipped}...")
    } else {
        title.to_string()
    }
}

impl Widget for HistoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" History ({}) ", self.history.len());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let lines: Vec<Line> = if self.history.is_empty() {
            vec![Line::from(Span::styled(
                "No history yet",
                self.theme.hint_style(),
            ))]
        } else {
            self.history
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    let selected = self.focused && i == self.cursor;
                    let active = self.current_id == Some(record.object_id);

                    let style = if selected {
                        self.theme.selected_style()
                    } else if active {
                        self.theme.status_style()
                    } else {
                        self.theme.value_style()
                    };
                    let marker = if active { "* " } else { "  " };

                    Line::from(vec![
                        Span::styled(marker, self.theme.status_style()),
                        Span::styled(short_title(record), style),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
