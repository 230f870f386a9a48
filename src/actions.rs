use crate::editor::TextInput;
use crate::error::AppError;
use crate::format::Document;
use crate::notify::Toast;
use crate::state::AppState;
use crate::types::{AnalysisMode, FormField, InputMode, LoadingState, ToastKind};
use std::time::Instant;

/// Represents all possible state-changing actions in the application
///
/// Key handlers and finished network requests both produce actions, and
/// every state transition goes through `apply_action`.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Mode selection
    SelectMode(AnalysisMode),
    ToggleMode,

    // Form editing
    StartEditing(FormField),
    SwitchEditingField,
    StopEditing,

    // Analysis lifecycle
    BeginAnalysis {
        request_id: u64,
    },
    FinishAnalysis {
        request_id: u64,
        outcome: Result<String, AppError>,
    },

    // Results scrolling
    ScrollResultsUp(u16),
    ScrollResultsDown(u16),
    /// Largest scroll offset for the result as last drawn
    SetResultsMaxScroll(u16),

    // Notifications
    ShowToast {
        kind: ToastKind,
        message: String,
    },
    DismissToast,
    ExpireToast(Instant),

    // Server URL modal
    EnterUrlInputMode {
        current: String,
    },
    ExitUrlInputMode,
    SetUrlError(String),
}

impl AppAction {
    pub fn toast(kind: ToastKind, message: impl Into<String>) -> Self {
        AppAction::ShowToast {
            kind,
            message: message.into(),
        }
    }
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::SelectMode(mode) => {
            state.ui.current_mode = mode;
        }
        AppAction::ToggleMode => {
            state.ui.current_mode = state.ui.current_mode.toggled();
        }

        AppAction::StartEditing(field) => {
            state.ui.input_mode = InputMode::Editing(field);
        }
        AppAction::SwitchEditingField => {
            if let InputMode::Editing(field) = state.ui.input_mode {
                state.ui.input_mode = InputMode::Editing(field.next());
            }
        }
        AppAction::StopEditing => {
            if matches!(state.ui.input_mode, InputMode::Editing(_)) {
                state.ui.input_mode = InputMode::Normal;
            }
        }

        AppAction::BeginAnalysis { request_id } => {
            state.analysis.loading = LoadingState::Loading;
            state.analysis.in_flight = Some(request_id);
            state.analysis.document = None;
            state.ui.results_scroll = 0;
        }
        AppAction::FinishAnalysis {
            request_id,
            outcome,
        } => {
            // a superseded request must not overwrite the newer one
            if state.analysis.in_flight != Some(request_id) {
                tracing::debug!(request_id, "Ignoring stale analysis completion");
                return;
            }
            state.analysis.in_flight = None;

            match outcome {
                Ok(text) => {
                    tracing::debug!(request_id, chars = text.len(), "Analysis finished");
                    state.analysis.document = Some(Document::parse(&text));
                    state.analysis.loading = LoadingState::Success;
                }
                Err(err) => {
                    let detail = err.to_string();
                    state.analysis.loading = LoadingState::Error(detail.clone());
                    show_toast(state, ToastKind::Error, format!("Error: {detail}"));
                }
            }
        }

        AppAction::ScrollResultsUp(lines) => {
            state.ui.results_scroll = state.ui.results_scroll.saturating_sub(lines);
        }
        AppAction::ScrollResultsDown(lines) => {
            state.ui.results_scroll = state
                .ui
                .results_scroll
                .saturating_add(lines)
                .min(state.ui.results_max_scroll);
        }
        AppAction::SetResultsMaxScroll(max) => {
            state.ui.results_max_scroll = max;
            state.ui.results_scroll = state.ui.results_scroll.min(max);
        }

        AppAction::ShowToast { kind, message } => {
            show_toast(state, kind, message);
        }
        AppAction::DismissToast => {
            state.toast = None;
        }
        AppAction::ExpireToast(now) => {
            if state.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
                state.toast = None;
            }
        }

        AppAction::EnterUrlInputMode { current } => {
            state.input.url_input = TextInput::with_content(current);
            state.input.url_error = None;
            state.ui.input_mode = InputMode::EnteringUrl;
        }
        AppAction::ExitUrlInputMode => {
            state.input.url_input.clear();
            state.input.url_error = None;
            state.ui.input_mode = InputMode::Normal;
        }
        AppAction::SetUrlError(message) => {
            state.input.url_error = Some(message);
        }
    }
}

/// Replace any current toast with a new one
fn show_toast(state: &mut AppState, kind: ToastKind, message: String) {
    state.toast = Some(Toast::new(kind, message, state.ui.toast_duration));
}
