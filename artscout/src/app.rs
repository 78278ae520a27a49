//! Main application state and logic

use artscout_core::{ArtObject, BanKind, CandidatePool, RecordSource, Session};
use rand::{rngs::StdRng, SeedableRng};

use crate::ui::theme::Theme;
use crate::ui::{FocusedPanel, Overlay};

/// Attributes of the displayed record that can be banned, in the order
/// the detail panel lists them. Medium is shown but not bannable.
pub const BANNABLE_ATTRIBUTES: [(BanKind, &str); 4] = [
    (BanKind::Artist, "Artist"),
    (BanKind::Period, "Date"),
    (BanKind::Culture, "Culture"),
    (BanKind::Department, "Department"),
];

/// Main application state
pub struct App<S: RecordSource> {
    pub session: Session,
    source: S,
    rng: StdRng,

    // UI state
    pub theme: Theme,
    pub focused_panel: FocusedPanel,
    overlay: Option<Overlay>,

    // Per-panel selection cursors
    pub attribute_cursor: usize,
    pub ban_cursor: usize,
    pub history_cursor: usize,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,

    discover_requested: bool,
}

impl<S: RecordSource> App<S> {
    /// Create the app with an initial discover cycle already queued.
    pub fn new(source: S, pool: CandidatePool) -> Self {
        Self {
            session: Session::new(pool),
            source,
            rng: StdRng::from_entropy(),
            theme: Theme::default(),
            focused_panel: FocusedPanel::default(),
            overlay: None,
            attribute_cursor: 0,
            ban_cursor: 0,
            history_cursor: 0,
            status_message: None,
            should_quit: false,
            discover_requested: true,
        }
    }

    /// Queue a discover cycle unless one is already pending or in flight.
    pub fn request_discover(&mut self) {
        if self.session.loading() || self.discover_requested {
            return;
        }
        self.discover_requested = true;
    }

    /// Take the pending discover request, if any.
    pub fn take_discover_request(&mut self) -> bool {
        std::mem::take(&mut self.discover_requested)
    }

    /// Run one discover cycle to completion and update the status line.
    pub async fn run_discover(&mut self) {
        if self.session.discover(&self.source, &mut self.rng).await {
            let title = self
                .session
                .current()
                .map(|r| r.display_title().to_string())
                .unwrap_or_default();
            self.set_status(format!("Found: {title}"));
            self.history_cursor = 0;
        } else {
            // The error itself is rendered by the artwork panel.
            self.set_status("Discovery failed");
        }
    }

    /// Toggle the ban on the attribute under the detail-panel cursor.
    pub fn toggle_ban_under_cursor(&mut self) {
        let Some(record) = self.session.current() else {
            self.set_status("Nothing displayed yet");
            return;
        };

        let (kind, label) = BANNABLE_ATTRIBUTES[self.attribute_cursor];
        let value = kind.value_of(record).to_string();
        if value.is_empty() {
            self.set_status(format!("{label} is unknown, nothing to ban"));
            return;
        }

        if self.session.toggle_ban(kind, &value) {
            self.set_status(format!("Banned {kind} '{value}'"));
        } else {
            self.set_status(format!("Unbanned {kind} '{value}'"));
        }
        self.clamp_cursors();
    }

    /// Remove the ban selected in the ban-list panel.
    pub fn remove_selected_ban(&mut self) {
        let Some(predicate) = self.session.bans().entries().get(self.ban_cursor).cloned()
        else {
            return;
        };

        self.session.toggle_ban(predicate.kind, &predicate.value);
        self.set_status(format!(
            "Unbanned {} '{}'",
            predicate.kind, predicate.value
        ));
        self.clamp_cursors();
    }

    /// Display the history entry selected in the history panel.
    pub fn select_from_history(&mut self) {
        if self.session.select_from_history(self.history_cursor) {
            let title = self
                .session
                .current()
                .map(|r| r.display_title().to_string())
                .unwrap_or_default();
            self.set_status(format!("Showing from history: {title}"));
        }
    }

    /// Move the focused panel's selection up.
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Artwork => {
                self.attribute_cursor = self.attribute_cursor.saturating_sub(1);
            }
            FocusedPanel::Bans => {
                self.ban_cursor = self.ban_cursor.saturating_sub(1);
            }
            FocusedPanel::History => {
                self.history_cursor = self.history_cursor.saturating_sub(1);
            }
        }
    }

    /// Move the focused panel's selection down.
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Artwork => {
                let max = BANNABLE_ATTRIBUTES.len() - 1;
                self.attribute_cursor = (self.attribute_cursor + 1).min(max);
            }
            FocusedPanel::Bans => {
                let max = self.session.bans().len().saturating_sub(1);
                self.ban_cursor = (self.ban_cursor + 1).min(max);
            }
            FocusedPanel::History => {
                let max = self.session.history().len().saturating_sub(1);
                self.history_cursor = (self.history_cursor + 1).min(max);
            }
        }
    }

    /// Activate the current selection (Enter).
    pub fn activate_selection(&mut self) {
        match self.focused_panel {
            FocusedPanel::Artwork => self.toggle_ban_under_cursor(),
            FocusedPanel::Bans => self.remove_selected_ban(),
            FocusedPanel::History => self.select_from_history(),
        }
    }

    /// Cycle to next focused panel
    pub fn cycle_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Artwork => FocusedPanel::Bans,
            FocusedPanel::Bans => FocusedPanel::History,
            FocusedPanel::History => FocusedPanel::Artwork,
        };
    }

    /// Cycle to previous focused panel
    pub fn cycle_focus_reverse(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Artwork => FocusedPanel::History,
            FocusedPanel::History => FocusedPanel::Bans,
            FocusedPanel::Bans => FocusedPanel::Artwork,
        };
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// The displayed record, if any.
    pub fn current(&self) -> Option<&ArtObject> {
        self.session.current()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Keep cursors inside their lists after bans or history shrink.
    fn clamp_cursors(&mut self) {
        let ban_max = self.session.bans().len().saturating_sub(1);
        self.ban_cursor = self.ban_cursor.min(ban_max);
        let history_max = self.session.history().len().saturating_sub(1);
        self.history_cursor = self.history_cursor.min(history_max);
    }
}
