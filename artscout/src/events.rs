//! Event handling for the artscout TUI

use artscout_core::RecordSource;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event<S: RecordSource>(app: &mut App<S>, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_mouse_event<S: RecordSource>(app: &mut App<S>, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.move_up();
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.move_down();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_key_event<S: RecordSource>(app: &mut App<S>, key: KeyEvent) -> EventResult {
    // Overlay swallows keys until closed
    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    // Global shortcuts
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match key.code {
        KeyCode::Char('q') => EventResult::Quit,

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Discover a new artwork (ignored while a cycle is in flight)
        KeyCode::Char('d') | KeyCode::Char(' ') => {
            app.request_discover();
            EventResult::NeedsRedraw
        }

        // Panel focus cycling
        KeyCode::Tab => {
            app.cycle_focus();
            EventResult::NeedsRedraw
        }
        KeyCode::BackTab => {
            app.cycle_focus_reverse();
            EventResult::NeedsRedraw
        }

        // Selection movement
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            EventResult::NeedsRedraw
        }

        // Activate: toggle ban / remove ban / load from history
        KeyCode::Enter => {
            app.activate_selection();
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

fn handle_overlay_key<S: RecordSource>(app: &mut App<S>, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artscout_core::testing::MockSource;
    use artscout_core::CandidatePool;
    use crate::ui::FocusedPanel;

    fn app() -> App<MockSource> {
        let mut app = App::new(MockSource::new(), CandidatePool::default());
        // Drop the startup request so tests observe only their own.
        app.take_discover_request();
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);
    }

    #[test]
    fn test_d_requests_discover() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('d')));
        assert!(app.take_discover_request());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focused_panel, FocusedPanel::Bans);
    }

    #[test]
    fn test_help_overlay_swallows_discover_key() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.has_overlay());

        handle_event(&mut app, key(KeyCode::Char('d')));
        assert!(!app.take_discover_request());

        handle_event(&mut app, key(KeyCode::Esc));
        assert!(!app.has_overlay());
    }
}
