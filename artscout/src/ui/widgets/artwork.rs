//! Artwork detail widget
//!
//! Shows the currently displayed record: title, bannable attributes with
//! a selection cursor and banned markers, medium, and the image link.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use artscout_core::{ArtObject, BanList};

use crate::app::BANNABLE_ATTRIBUTES;
use crate::ui::theme::Theme;

/// Widget for the main artwork detail panel
pub struct ArtworkWidget<'a> {
    record: Option<&'a ArtObject>,
    bans: &'a BanList,
    theme: &'a Theme,
    cursor: usize,
    focused: bool,
    loading: bool,
    error: Option<&'a str>,
}

impl<'a> ArtworkWidget<'a> {
    pub fn new(record: Option<&'a ArtObject>, bans: &'a BanList, theme: &'a Theme) -> Self {
        Self {
            record,
            bans,
            theme,
            cursor: 0,
            focused: false,
            loading: false,
            error: None,
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

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn attribute_line(&self, record: &'a ArtObject, index: usize) -> Line<'a> {
        let (kind, label) = BANNABLE_ATTRIBUTES[index];
        let raw = kind.value_of(record);
        let shown = if raw.is_empty() { "Unknown" } else { raw };
        let banned = !raw.is_empty() && self.bans.is_banned(kind, raw);

        let marker = if self.focused && index == self.cursor {
            "> "
        } else {
            "  "
        };

        let value_style = if banned {
            self.theme.banned_style()
        } else {
            self.theme.value_style()
        };

        let mut spans = vec![
            Span::styled(marker, self.theme.status_style()),
            Span::styled(format!("{label:<11}"), self.theme.label_style()),
            Span::styled(shown, value_style),
        ];
        if banned {
            spans.push(Span::styled("  [banned]", self.theme.banned_style()));
        }
        Line::from(spans)
    }
}

impl Widget for ArtworkWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused {
            " Artwork [j/k select, Enter ban] "
        } else {
            " Artwork "
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let mut lines: Vec<Line> = Vec::new();

        if self.loading {
            lines.push(Line::from(Span::styled(
                "Discovering new art...",
                self.theme.status_style(),
            )));
        } else if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(error, self.theme.error_style())));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Press 'd' to try again",
                self.theme.hint_style(),
            )));
        } else if let Some(record) = self.record {
            lines.push(Line::from(Span::styled(
                record.display_title(),
                self.theme.title_style(),
            )));
            lines.push(Line::default());

            for index in 0..BANNABLE_ATTRIBUTES.len() {
                lines.push(self.attribute_line(record, index));
            }

            let medium = if record.medium.is_empty() {
                "Unknown"
            } else {
                record.medium.as_str()
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<11}", "Medium"), self.theme.label_style()),
                Span::styled(medium, self.theme.value_style()),
            ]));

            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Image: ", self.theme.label_style()),
                Span::styled(record.primary_image.as_str(), self.theme.hint_style()),
            ]));
            if !record.object_url.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Page:  ", self.theme.label_style()),
                    Span::styled(record.object_url.as_str(), self.theme.hint_style()),
                ]));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "Press 'd' to discover an artwork",
                self.theme.hint_style(),
            )));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
