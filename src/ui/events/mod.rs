//! Event handling for debate-assistant-tui
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles three input modes:
//! - Normal: mode selection, submission, copy/download and scrolling
//! - Editing: text entry into the topic or perspective field
//! - EnteringUrl: modal for configuring the analysis server
//!
//! # Architecture
//!
//! Key handlers generate AppActions that are applied to AppState via
//! `apply_action` in actions.rs. Anything that needs the HTTP client or the
//! config file (a submission, a new server URL) is returned to the app loop
//! in an [`EventOutcome`] instead of being performed here.
//!
//! # Lock Management
//!
//! Handlers take short read or write locks on `Arc<RwLock<AppState>>` and
//! never hold one across a call into another handler.

mod editing;
mod helpers;
mod modals;
mod submit;
mod yank;

pub use helpers::{apply, apply_many, read_state};

use crate::actions::AppAction;
use crate::export::{ClipboardWriter, SystemClipboard};
use crate::state::AppState;
use crate::types::{AnalysisMode, AnalysisRequest, FormField, InputMode, UrlSubmission};
use crate::ui::draw::SCROLL_LINES_PER_ACTION;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Work the app loop must carry out after an input event
#[derive(Debug, Default)]
pub struct EventOutcome {
    pub submission: Option<AnalysisRequest>,
    pub url_submitted: Option<UrlSubmission>,
}

/// Event handler for managing user input and state updates
pub struct EventHandler {
    pub should_quit: bool,
    download_dir: PathBuf,
    clipboard: Box<dyn ClipboardWriter>,
}

impl EventHandler {
    pub fn new(download_dir: PathBuf) -> Self {
        Self::with_clipboard(download_dir, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(download_dir: PathBuf, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            should_quit: false,
            download_dir,
            clipboard,
        }
    }

    /// Poll for one terminal event and dispatch it
    pub fn handle_events(
        &mut self,
        state: &Arc<RwLock<AppState>>,
        base_url: &str,
    ) -> Result<EventOutcome> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    return Ok(self.handle_key(key, state, base_url));
                }
            }
        }

        Ok(EventOutcome::default())
    }

    /// Dispatch a key press according to the current input mode
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        base_url: &str,
    ) -> EventOutcome {
        let input_mode = read_state(state).ui.input_mode;
        let mut outcome = EventOutcome::default();

        match input_mode {
            InputMode::EnteringUrl => {
                outcome.url_submitted = modals::handle_url_input(key, state);
            }
            InputMode::Editing(field) => {
                outcome.submission = editing::handle_editing_input(key, field, state);
            }
            InputMode::Normal => {
                outcome.submission = self.handle_normal_key(key, state, base_url);
            }
        }

        outcome
    }

    fn handle_normal_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        base_url: &str,
    ) -> Option<AnalysisRequest> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            // Mode selection
            KeyCode::Char('1') => apply(state, AppAction::SelectMode(AnalysisMode::Counterarguments)),
            KeyCode::Char('2') => apply(state, AppAction::SelectMode(AnalysisMode::Fallacies)),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                apply(state, AppAction::ToggleMode);
            }

            // Form
            KeyCode::Char('t') => apply(state, AppAction::StartEditing(FormField::Topic)),
            KeyCode::Char('p') => apply(state, AppAction::StartEditing(FormField::Perspective)),
            KeyCode::Enter | KeyCode::Char('s') => return submit::handle_submit(state),

            // Results
            KeyCode::Char('y') => yank::handle_copy(state, self.clipboard.as_mut()),
            KeyCode::Char('d') if ctrl => {
                apply(state, AppAction::ScrollResultsDown(SCROLL_LINES_PER_ACTION));
            }
            KeyCode::Char('u') if ctrl => {
                apply(state, AppAction::ScrollResultsUp(SCROLL_LINES_PER_ACTION));
            }
            KeyCode::Char('d') => yank::handle_download(state, &self.download_dir),
            KeyCode::Char('j') | KeyCode::Down => apply(state, AppAction::ScrollResultsDown(1)),
            KeyCode::Char('k') | KeyCode::Up => apply(state, AppAction::ScrollResultsUp(1)),

            KeyCode::Char(',') => modals::handle_url_dialog(state, base_url),
            KeyCode::Esc => apply(state, AppAction::DismissToast),

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextInput;
    use crate::error::{AppError, AppResult};
    use crate::types::{LoadingState, ToastKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    const BASE_URL: &str = "http://localhost:8000";

    struct SharedClipboard(Rc<RefCell<Vec<String>>>);

    impl ClipboardWriter for SharedClipboard {
        fn write_text(&mut self, text: &str) -> AppResult<()> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardWriter for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> AppResult<()> {
            Err(AppError::Clipboard("no display".to_string()))
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn handler() -> (EventHandler, Rc<RefCell<Vec<String>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let handler = EventHandler::with_clipboard(
            std::env::temp_dir(),
            Box::new(SharedClipboard(writes.clone())),
        );
        (handler, writes)
    }

    fn state_with_result(text: &str) -> Arc<RwLock<AppState>> {
        let state = Arc::new(RwLock::new(AppState::default()));
        apply_many(
            &state,
            vec![
                AppAction::BeginAnalysis { request_id: 1 },
                AppAction::FinishAnalysis {
                    request_id: 1,
                    outcome: Ok(text.to_string()),
                },
            ],
        );
        state
    }

    #[test]
    fn test_submit_with_empty_topic_shows_error() {
        let (mut handler, _) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));

        let outcome = handler.handle_key(press(KeyCode::Enter), &state, BASE_URL);

        assert!(outcome.submission.is_none());
        let s = read_state(&state);
        let toast = s.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Please enter a debate topic");
        assert_eq!(s.analysis.loading, LoadingState::Idle);
    }

    #[test]
    fn test_submit_uses_selected_mode() {
        let (mut handler, _) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));
        {
            let mut s = state.write().unwrap();
            s.form.topic = TextInput::with_content("Remote work");
            s.form.perspective = TextInput::with_content("It hurts teams");
        }

        handler.handle_key(press(KeyCode::Char('2')), &state, BASE_URL);
        let outcome = handler.handle_key(press(KeyCode::Char('s')), &state, BASE_URL);

        let request = outcome.submission.unwrap();
        assert_eq!(request.topic, "Remote work");
        assert_eq!(request.perspective, "It hurts teams");
        assert_eq!(request.mode, AnalysisMode::Fallacies);
    }

    #[test]
    fn test_mode_keys() {
        let (mut handler, _) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));

        handler.handle_key(press(KeyCode::Char('2')), &state, BASE_URL);
        handler.handle_key(press(KeyCode::Char('2')), &state, BASE_URL);
        assert_eq!(read_state(&state).ui.current_mode, AnalysisMode::Fallacies);

        handler.handle_key(press(KeyCode::Right), &state, BASE_URL);
        assert_eq!(
            read_state(&state).ui.current_mode,
            AnalysisMode::Counterarguments
        );
    }

    #[test]
    fn test_copy_writes_rendered_text_once() {
        let (mut handler, writes) = handler();
        let state = state_with_result("**Point** one");

        handler.handle_key(press(KeyCode::Char('y')), &state, BASE_URL);

        assert_eq!(*writes.borrow(), vec!["Point one".to_string()]);
        let s = read_state(&state);
        let toast = s.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Results copied to clipboard!");
    }

    #[test]
    fn test_copy_without_result_does_nothing() {
        let (mut handler, writes) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));

        handler.handle_key(press(KeyCode::Char('y')), &state, BASE_URL);

        assert!(writes.borrow().is_empty());
        assert!(read_state(&state).toast.is_none());
    }

    #[test]
    fn test_copy_failure_shows_error_toast() {
        let mut handler = EventHandler::with_clipboard(std::env::temp_dir(), Box::new(BrokenClipboard));
        let state = state_with_result("text");

        handler.handle_key(press(KeyCode::Char('y')), &state, BASE_URL);

        let s = read_state(&state);
        let toast = s.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Failed to copy text");
    }

    #[test]
    fn test_download_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut handler = EventHandler::with_clipboard(dir.path().to_path_buf(), Box::new(BrokenClipboard));
        let state = state_with_result("*Claim*\n\nRebuttal");

        handler.handle_key(press(KeyCode::Char('d')), &state, BASE_URL);

        let saved = std::fs::read_to_string(dir.path().join("debate-analysis.txt")).unwrap();
        assert_eq!(saved, "Claim\n\nRebuttal");
        let s = read_state(&state);
        let toast = s.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(toast.message.starts_with("Results downloaded to "));
    }

    #[test]
    fn test_escape_dismisses_toast() {
        let (mut handler, _) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));
        apply(&state, AppAction::toast(ToastKind::Info, "hello"));

        handler.handle_key(press(KeyCode::Esc), &state, BASE_URL);
        assert!(read_state(&state).toast.is_none());
    }

    #[test]
    fn test_editing_mode_keys() {
        let (mut handler, _) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));

        handler.handle_key(press(KeyCode::Char('t')), &state, BASE_URL);
        assert_eq!(
            read_state(&state).ui.input_mode,
            InputMode::Editing(FormField::Topic)
        );

        state.write().unwrap().form.topic = TextInput::with_content("Quotas");
        handler.handle_key(press(KeyCode::Backspace), &state, BASE_URL);
        assert!(!handler.should_quit);
        assert_eq!(read_state(&state).form.topic.content(), "Quota");

        handler.handle_key(press(KeyCode::Tab), &state, BASE_URL);
        assert_eq!(
            read_state(&state).ui.input_mode,
            InputMode::Editing(FormField::Perspective)
        );

        let outcome = handler.handle_key(press(KeyCode::Enter), &state, BASE_URL);
        assert_eq!(read_state(&state).ui.input_mode, InputMode::Normal);
        assert_eq!(outcome.submission.unwrap().topic, "Quota");
    }

    #[test]
    fn test_url_modal_rejects_invalid_url() {
        let (mut handler, _) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));

        handler.handle_key(press(KeyCode::Char(',')), &state, BASE_URL);
        assert_eq!(read_state(&state).ui.input_mode, InputMode::EnteringUrl);

        state.write().unwrap().input.url_input = TextInput::with_content("ftp://nope");
        let outcome = handler.handle_key(press(KeyCode::Enter), &state, BASE_URL);

        assert!(outcome.url_submitted.is_none());
        let s = read_state(&state);
        assert_eq!(s.ui.input_mode, InputMode::EnteringUrl);
        assert!(s.input.url_error.is_some());
    }

    #[test]
    fn test_url_modal_submits_valid_url() {
        let (mut handler, _) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));

        handler.handle_key(press(KeyCode::Char(',')), &state, BASE_URL);
        state.write().unwrap().input.url_input = TextInput::with_content(" https://debate.example.com ");
        let outcome = handler.handle_key(press(KeyCode::Enter), &state, BASE_URL);

        assert_eq!(
            outcome.url_submitted.unwrap().base_url,
            "https://debate.example.com"
        );
        assert_eq!(read_state(&state).ui.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_quit() {
        let (mut handler, _) = handler();
        let state = Arc::new(RwLock::new(AppState::default()));
        handler.handle_key(press(KeyCode::Char('q')), &state, BASE_URL);
        assert!(handler.should_quit);
    }
}
