use crate::actions::AppAction;
use crate::request::{spawn_analysis, AnalysisClient};
use crate::types::{AnalysisRequest, InputMode, ToastKind, UrlSubmission};
use crate::ui::{self, apply, apply_many, read_state};
use crate::{config::Config, state::AppState};
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

pub struct App {
    state: Arc<RwLock<AppState>>,
    config: Config,
    client: AnalysisClient,
    event_handler: ui::EventHandler,
    /// Completions from background analysis tasks
    tx: UnboundedSender<AppAction>,
    rx: UnboundedReceiver<AppAction>,
    pending: Option<JoinHandle<()>>,
    next_request_id: u64,
    spinner_index: usize,
    last_tick: Instant,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = AnalysisClient::new(config.server.base_url.clone(), config.request_timeout())?;
        let state = AppState::with_toast_duration(config.toast_duration());
        let event_handler = ui::EventHandler::new(config.download_dir());
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            config,
            client,
            event_handler,
            tx,
            rx,
            pending: None,
            next_request_id: 1,
            spinner_index: 0,
            last_tick: Instant::now(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        tracing::info!(base_url = %self.client.base_url(), "Starting UI loop");

        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            // Finished requests, then toast expiry
            let mut actions = Vec::new();
            while let Ok(action) = self.rx.try_recv() {
                actions.push(action);
            }
            actions.push(AppAction::ExpireToast(Instant::now()));
            apply_many(&self.state, actions);

            let mut max_scroll = 0;
            terminal.draw(|frame| max_scroll = self.draw(frame))?;
            apply(&self.state, AppAction::SetResultsMaxScroll(max_scroll));

            let base_url = self.client.base_url().to_string();
            let outcome = self.event_handler.handle_events(&self.state, &base_url)?;

            if let Some(submission) = outcome.url_submitted {
                self.update_base_url(submission);
            }
            if let Some(request) = outcome.submission {
                self.start_analysis(request);
            }
        }

        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        tracing::info!("UI loop finished");
        Ok(())
    }

    /// Send a request, superseding any analysis still in flight
    fn start_analysis(&mut self, request: AnalysisRequest) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                handle.abort();
                tracing::info!("Previous analysis cancelled");
                apply(
                    &self.state,
                    AppAction::toast(ToastKind::Info, "Previous analysis cancelled"),
                );
            }
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        apply(&self.state, AppAction::BeginAnalysis { request_id });
        self.pending = Some(spawn_analysis(
            self.client.clone(),
            request,
            request_id,
            self.tx.clone(),
        ));
    }

    fn update_base_url(&mut self, submission: UrlSubmission) {
        match self.config.set_base_url(submission.base_url) {
            Ok(()) => {
                apply(&self.state, AppAction::toast(ToastKind::Info, "Server URL saved"));
            }
            Err(err) => {
                tracing::error!(error = %err, "Could not save config");
                apply(
                    &self.state,
                    AppAction::toast(ToastKind::Error, format!("Could not save config: {err}")),
                );
            }
        }
        // used for this session even when saving failed
        self.client.set_base_url(self.config.server.base_url.clone());
    }

    /// Draw one frame and return the results panel's scroll limit
    fn draw(&self, frame: &mut Frame) -> u16 {
        let state = read_state(&self.state);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Mode tabs + description
                Constraint::Length(6), // Topic + perspective
                Constraint::Min(0),    // Results
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        ui::render_header(
            frame,
            chunks[0],
            self.client.base_url(),
            &state.analysis.loading,
            self.spinner_index,
        );
        ui::render_mode_panel(frame, chunks[1], state.ui.current_mode);
        ui::render_form_panel(frame, chunks[2], &state);
        let max_scroll = ui::render_results_panel(frame, chunks[3], &state, self.spinner_index);
        ui::render_footer(frame, chunks[4], &state.ui.input_mode);

        // Overlays last
        if let Some(toast) = &state.toast {
            ui::render_toast(frame, toast, Instant::now());
        }
        if state.ui.input_mode == InputMode::EnteringUrl {
            ui::render_url_input_modal(frame, &state);
        }

        max_scroll
    }
}
