use crate::editor::TextInput;
use crate::error::{AppError, AppResult};
use crate::format::Document;
use crate::notify::{Toast, DEFAULT_TOAST_DURATION};
use crate::types::{AnalysisMode, AnalysisRequest, FormField, InputMode, LoadingState};
use std::time::Duration;

/// Everything the UI draws from, grouped by concern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub form: FormState,
    pub analysis: AnalysisState,
    pub input: InputState,
    /// At most one toast is shown at a time
    pub toast: Option<Toast>,
}

#[derive(Debug, Clone)]
pub struct UiState {
    /// Active analysis mode; decides the visible description and the tag sent
    pub current_mode: AnalysisMode,
    pub input_mode: InputMode,
    /// Scroll offset for the results panel (wrapped rows)
    pub results_scroll: u16,
    pub results_max_scroll: u16,
    pub toast_duration: Duration,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            current_mode: AnalysisMode::default(),
            input_mode: InputMode::Normal,
            results_scroll: 0,
            results_max_scroll: 0,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub topic: TextInput,
    pub perspective: TextInput,
}

impl FormState {
    pub fn field_mut(&mut self, field: FormField) -> &mut TextInput {
        match field {
            FormField::Topic => &mut self.topic,
            FormField::Perspective => &mut self.perspective,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisState {
    pub loading: LoadingState,
    /// Id of the request whose completion will be accepted
    pub in_flight: Option<u64>,
    pub document: Option<Document>,
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self {
            loading: LoadingState::Idle,
            in_flight: None,
            document: None,
        }
    }
}

/// State of the server URL modal
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub url_input: TextInput,
    pub url_error: Option<String>,
}

impl AppState {
    pub fn with_toast_duration(toast_duration: Duration) -> Self {
        let mut state = Self::default();
        state.ui.toast_duration = toast_duration;
        state
    }

    /// Build the request for the current form, rejecting an empty topic
    pub fn prepare_request(&self) -> AppResult<AnalysisRequest> {
        let topic = self.form.topic.trimmed();
        if topic.is_empty() {
            return Err(AppError::EmptyTopic);
        }

        Ok(AnalysisRequest {
            topic: topic.to_string(),
            perspective: self.form.perspective.trimmed().to_string(),
            mode: self.ui.current_mode,
        })
    }

    /// Plain text of the rendered result, if there is any
    pub fn rendered_text(&self) -> Option<String> {
        self.analysis
            .document
            .as_ref()
            .filter(|doc| !doc.is_empty())
            .map(Document::plain_text)
    }
}
