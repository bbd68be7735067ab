//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::SearchController;

impl SearchController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.ui_state.lock().await.should_quit = true;
            return Ok(());
        }

        let view = self.view_state().await;
        let mut ui_state = self.ui_state.lock().await;

        // Help popup blocks everything else
        if ui_state.show_help_popup {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                ui_state.show_help_popup = false;
            }
            return Ok(());
        }

        // Playlist picker modal
        if view.pending_selection.is_some() {
            match key.code {
                KeyCode::Up => {
                    ui_state.playlist_selected = ui_state.playlist_selected.saturating_sub(1);
                }
                KeyCode::Down => {
                    if ui_state.playlist_selected + 1 < view.playlists.len() {
                        ui_state.playlist_selected += 1;
                    }
                }
                KeyCode::Enter => {
                    // No catalog means nothing to pick; the modal stays until Esc.
                    if let Some(playlist) = view.playlists.get(ui_state.playlist_selected) {
                        let playlist = playlist.name().to_string();
                        drop(ui_state);
                        let controller = self.clone();
                        tokio::spawn(async move {
                            controller.confirm_assignment(&playlist).await;
                        });
                    }
                }
                KeyCode::Esc => {
                    drop(ui_state);
                    self.cancel_assignment().await;
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => {
                ui_state.show_help_popup = true;
            }
            KeyCode::Up => {
                ui_state.result_selected = ui_state.result_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if ui_state.result_selected + 1 < view.results.len() {
                    ui_state.result_selected += 1;
                } else if view.can_load_more {
                    drop(ui_state);
                    self.spawn_load_more();
                }
            }
            KeyCode::PageDown => {
                if view.can_load_more {
                    drop(ui_state);
                    self.spawn_load_more();
                }
            }
            KeyCode::Enter => {
                if let Some(track) = view.results.get(ui_state.result_selected).cloned() {
                    drop(ui_state);
                    self.open_assignment(track).await;
                }
            }
            KeyCode::Esc => {
                drop(ui_state);
                if !view.query_text.is_empty() {
                    self.set_query(String::new()).await;
                }
            }
            KeyCode::Backspace => {
                drop(ui_state);
                let mut query = view.query_text;
                if query.pop().is_some() {
                    self.set_query(query).await;
                }
            }
            KeyCode::Char(c) => {
                drop(ui_state);
                let mut query = view.query_text;
                query.push(c);
                self.set_query(query).await;
            }
            _ => {}
        }
        Ok(())
    }

    fn spawn_load_more(&self) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.load_more().await;
        });
    }
}
