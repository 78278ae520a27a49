//! Render orchestration for the artscout TUI

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use artscout_core::RecordSource;

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{ArtworkWidget, BanListWidget, HistoryWidget, HotkeyBarWidget, StatusBarWidget};

/// Which panel is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Artwork,
    Bans,
    History,
}

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
}

/// Main render function
pub fn render<S: RecordSource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    let artwork = ArtworkWidget::new(app.current(), app.session.bans(), &app.theme)
        .cursor(app.attribute_cursor)
        .focused(matches!(app.focused_panel, FocusedPanel::Artwork))
        .loading(app.session.loading())
        .error(app.session.error());
    frame.render_widget(artwork, layout.artwork_area);

    let bans = BanListWidget::new(app.session.bans(), &app.theme)
        .cursor(app.ban_cursor)
        .focused(matches!(app.focused_panel, FocusedPanel::Bans));
    frame.render_widget(bans, layout.bans_area);

    let history = HistoryWidget::new(app.session.history(), &app.theme)
        .cursor(app.history_cursor)
        .focused(matches!(app.focused_panel, FocusedPanel::History))
        .current_id(app.current().map(|r| r.object_id));
    frame.render_widget(history, layout.history_area);

    frame.render_widget(
        StatusBarWidget::new(app.status_message(), app.session.error(), &app.theme),
        layout.status_bar,
    );
    frame.render_widget(HotkeyBarWidget::new(&app.theme), layout.hotkey_bar);

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, *overlay, area);
    }
}

fn render_title_bar<S: RecordSource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" artscout ", app.theme.title_style()),
        Span::styled(
            "- discover artworks from The Met collection",
            app.theme.hint_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_overlay<S: RecordSource>(frame: &mut Frame, app: &App<S>, overlay: Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help(frame, app, area),
    }
}

fn render_help<S: RecordSource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Keys", app.theme.title_style())),
        Line::default(),
        help_line(app, "d / Space", "discover a new artwork"),
        help_line(app, "Tab / Shift-Tab", "cycle panel focus"),
        help_line(app, "j/k or arrows", "move selection in focused panel"),
        help_line(app, "Enter", "toggle ban / remove ban / view from history"),
        help_line(app, "?", "toggle this help"),
        help_line(app, "q / Ctrl-C", "quit"),
        Line::default(),
        Line::from(Span::styled(
            "Banning an attribute filters future discoveries only;",
            app.theme.hint_style(),
        )),
        Line::from(Span::styled(
            "the artwork on display stays where it is.",
            app.theme.hint_style(),
        )),
    ];

    let overlay_area = centered_rect_fixed(56, (lines.len() + 2) as u16, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn help_line<'a, S: RecordSource>(app: &'a App<S>, key: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<16}"), app.theme.status_style()),
        Span::styled(action, app.theme.value_style()),
    ])
}
