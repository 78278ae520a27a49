//! Ban list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use artscout_core::BanList;

use crate::ui::theme::Theme;

/// Widget for the active ban predicates
pub struct BanListWidget<'a> {
    bans: &'a BanList,
    theme: &'a Theme,
    cursor: usize,
    focused: bool,
}

impl<'a> BanListWidget<'a> {
    pub fn new(bans: &'a BanList, theme: &'a Theme) -> Self {
        Self {
            bans,
            theme,
            cursor: 0,
            focused: false,
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
}

impl Widget for BanListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Bans ({}) ", self.bans.len());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let lines: Vec<Line> = if self.bans.is_empty() {
            vec![Line::from(Span::styled(
                "Enter on an attribute bans it",
                self.theme.hint_style(),
            ))]
        } else {
            self.bans
                .entries()
                .iter()
                .enumerate()
                .map(|(i, predicate)| {
                    let selected = self.focused && i == self.cursor;
                    let line_style = if selected {
                        self.theme.selected_style()
                    } else {
                        self.theme.value_style()
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{}: ", predicate.kind),
                            self.theme.label_style(),
                        ),
                        Span::styled(predicate.value.clone(), line_style),
                        Span::styled(" x", self.theme.banned_style()),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
