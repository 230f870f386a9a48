//! Modal dialog handlers
//!
//! Handles input for the server URL modal.

use super::helpers::{apply, read_state, write_state};
use crate::actions::AppAction;
use crate::config;
use crate::state::AppState;
use crate::types::UrlSubmission;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Handle URL dialog activation
pub fn handle_url_dialog(state: &Arc<RwLock<AppState>>, current: &str) {
    apply(
        state,
        AppAction::EnterUrlInputMode {
            current: current.to_string(),
        },
    );
    tracing::debug!("Entering URL input mode");
}

/// Handle a key while the URL modal is open
pub fn handle_url_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) -> Option<UrlSubmission> {
    match key.code {
        KeyCode::Enter => {
            let url = read_state(state).input.url_input.trimmed().to_string();

            match config::validate_url(&url) {
                Ok(()) => {
                    apply(state, AppAction::ExitUrlInputMode);
                    tracing::info!(base_url = %url, "Server URL submitted");
                    return Some(UrlSubmission { base_url: url });
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Invalid server URL");
                    // Keep modal open
                    apply(state, AppAction::SetUrlError(e));
                }
            }
        }

        KeyCode::Esc => {
            apply(state, AppAction::ExitUrlInputMode);
            tracing::debug!("URL input cancelled");
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let batch = write_state(state).input.url_input.handle_paste_batch(c);
            if let Some(next) = batch.leftover {
                return handle_url_input(next, state);
            }
        }

        _ => {
            write_state(state).input.url_input.handle_key_event(key);
        }
    }

    None
}
