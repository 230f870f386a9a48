use serde::{Deserialize, Serialize};

/// Analysis style requested from the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Counterarguments,
    Fallacies,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 2] = [AnalysisMode::Counterarguments, AnalysisMode::Fallacies];

    /// Tag sent over the wire
    pub fn tag(&self) -> &'static str {
        match self {
            AnalysisMode::Counterarguments => "counterarguments",
            AnalysisMode::Fallacies => "fallacies",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AnalysisMode::Counterarguments => "Counterarguments",
            AnalysisMode::Fallacies => "Fallacies",
        }
    }

    /// Text of the description panel shown while this mode is active
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisMode::Counterarguments => {
                "Generate strong counterarguments to a position, or balanced arguments for both sides when no position is given."
            }
            AnalysisMode::Fallacies => {
                "Find logical fallacies in an argument, or common fallacies for this topic when no argument is given."
            }
        }
    }

    /// Label for the perspective field, which means something different per mode
    pub fn perspective_label(&self) -> &'static str {
        match self {
            AnalysisMode::Counterarguments => "Your position (optional)",
            AnalysisMode::Fallacies => "Argument to analyze (optional)",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AnalysisMode::Counterarguments => 0,
            AnalysisMode::Fallacies => 1,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            AnalysisMode::Counterarguments => AnalysisMode::Fallacies,
            AnalysisMode::Fallacies => AnalysisMode::Counterarguments,
        }
    }
}

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub topic: String,
    pub perspective: String,
    pub mode: AnalysisMode,
}

/// Success body of `POST /analyze`
///
/// `result` is kept loose so that `null`, numbers and empty strings can be
/// reported as a malformed response instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl AnalysisResponse {
    /// The result text, if present and non-empty
    pub fn result_text(&self) -> Option<&str> {
        match &self.result {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Editable fields of the analysis form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Perspective,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Topic => FormField::Perspective,
            FormField::Perspective => FormField::Topic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing(FormField),
    EnteringUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✔",
            ToastKind::Error => "✖",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UrlSubmission {
    pub base_url: String,
}
