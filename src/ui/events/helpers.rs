//! Helper functions for event handling
//!
//! State locking helpers. A poisoned lock still holds usable state (every
//! mutation goes through `apply_action`), so it is recovered instead of
//! propagated.

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::types::ToastKind;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub fn read_state(state: &Arc<RwLock<AppState>>) -> RwLockReadGuard<'_, AppState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_state(state: &Arc<RwLock<AppState>>) -> RwLockWriteGuard<'_, AppState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    let mut s = write_state(state);
    apply_action(action, &mut s);
}

/// Apply multiple actions under one lock
pub fn apply_many(state: &Arc<RwLock<AppState>>, actions: Vec<AppAction>) {
    let mut s = write_state(state);
    for action in actions {
        apply_action(action, &mut s);
    }
}

pub fn toast(state: &Arc<RwLock<AppState>>, kind: ToastKind, message: impl Into<String>) {
    apply(state, AppAction::toast(kind, message));
}
