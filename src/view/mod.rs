//! View module - UI rendering
//!
//! Renders a [`ViewState`] snapshot with ratatui. Nothing here mutates state.
//!
//! - `utils`: shared formatting helpers
//! - `layout`: search bar and status line
//! - `content`: result list
//! - `overlays`: playlist picker and help popup

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{UiState, ViewState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, view: &ViewState, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], view);
        content::render_results(frame, chunks[1], view, ui_state);
        layout::render_status_line(frame, chunks[2], view);

        if let Some(track) = &view.pending_selection {
            overlays::render_playlist_picker(frame, track, &view.playlists, ui_state.playlist_selected);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
