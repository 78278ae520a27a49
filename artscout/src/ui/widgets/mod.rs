//! Widgets for the artscout TUI

pub mod artwork;
pub mod ban_list;
pub mod history;
pub mod status_bar;

pub use artwork::ArtworkWidget;
pub use ban_list::BanListWidget;
pub use history::HistoryWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
