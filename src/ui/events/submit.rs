//! Analysis submission
//!
//! Validates the form and hands the request back to the app loop, which
//! owns the HTTP client and spawns the network task.

use super::helpers::{read_state, toast};
use crate::state::AppState;
use crate::types::{AnalysisRequest, ToastKind};
use std::sync::{Arc, RwLock};

/// Handle Enter - build a request from the form or report why not
pub fn handle_submit(state: &Arc<RwLock<AppState>>) -> Option<AnalysisRequest> {
    let prepared = read_state(state).prepare_request();

    match prepared {
        Ok(request) => {
            tracing::debug!(mode = request.mode.tag(), "Submitting analysis");
            Some(request)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Submission rejected");
            toast(state, ToastKind::Error, err.to_string());
            None
        }
    }
}
