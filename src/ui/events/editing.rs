//! Form field editing
//!
//! Keys typed while the topic or perspective field has focus.

use super::helpers::{apply, write_state};
use super::submit;
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{AnalysisRequest, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Handle a key while `field` is being edited
///
/// Returns a request when the key was Enter and the form is valid.
pub fn handle_editing_input(
    key: KeyEvent,
    field: FormField,
    state: &Arc<RwLock<AppState>>,
) -> Option<AnalysisRequest> {
    match key.code {
        KeyCode::Esc => {
            apply(state, AppAction::StopEditing);
        }

        KeyCode::Enter => {
            apply(state, AppAction::StopEditing);
            return submit::handle_submit(state);
        }

        KeyCode::Tab | KeyCode::BackTab => {
            apply(state, AppAction::SwitchEditingField);
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let batch = write_state(state).form.field_mut(field).handle_paste_batch(c);
            if batch.inserted > 1 {
                tracing::debug!(chars = batch.inserted, ?field, "Pasted into form field");
            }
            // a key typed right after the burst (Enter, Tab, ...) still counts
            if let Some(next) = batch.leftover {
                return handle_editing_input(next, field, state);
            }
        }

        _ => {
            write_state(state).form.field_mut(field).handle_key_event(key);
        }
    }

    None
}
