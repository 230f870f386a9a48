//! Yank (copy) and download handlers
//!
//! Both act on the plain text of the rendered result and do nothing when
//! there is no result.

use super::helpers::{read_state, toast};
use crate::export::{copy_text, save_text, ClipboardWriter};
use crate::state::AppState;
use crate::types::ToastKind;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Copy the rendered result to the clipboard
pub fn handle_copy(state: &Arc<RwLock<AppState>>, clipboard: &mut dyn ClipboardWriter) {
    let text = read_state(state).rendered_text();

    match copy_text(text.as_deref(), clipboard) {
        None => tracing::debug!("No results to copy"),
        Some(Ok(())) => {
            tracing::info!(chars = text.as_deref().map_or(0, str::len), "Results copied");
            toast(state, ToastKind::Success, "Results copied to clipboard!");
        }
        Some(Err(err)) => {
            tracing::error!(error = %err, "Could not copy text");
            toast(state, ToastKind::Error, "Failed to copy text");
        }
    }
}

/// Save the rendered result as a text file in `dir`
pub fn handle_download(state: &Arc<RwLock<AppState>>, dir: &Path) {
    let Some(text) = read_state(state).rendered_text() else {
        tracing::debug!("No results to download");
        return;
    };

    match save_text(&text, dir) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Results downloaded");
            toast(
                state,
                ToastKind::Success,
                format!("Results downloaded to {}", path.display()),
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "Could not save results");
            toast(state, ToastKind::Error, err.to_string());
        }
    }
}
