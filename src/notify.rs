//! Toast notifications
//!
//! A toast lives through four phases measured from the moment it is shown:
//! a short enter delay, the visible period, an exit transition (drawn
//! dimmed) and finally expiry, after which it is removed on the next tick.

use crate::types::ToastKind;
use std::time::{Duration, Instant};

/// Delay before a new toast is drawn
pub const TOAST_ENTER_DELAY: Duration = Duration::from_millis(10);

/// How long the exit transition lasts
pub const TOAST_EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Default visible time when the config does not override it
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Longer messages (e.g. a whole HTTP error page) are cut here
pub const MAX_TOAST_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
    Expired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>, duration: Duration) -> Self {
        Self::shown_at(kind, message, duration, Instant::now())
    }

    pub fn shown_at(
        kind: ToastKind,
        message: impl Into<String>,
        duration: Duration,
        shown_at: Instant,
    ) -> Self {
        let mut message = message.into();
        if let Some((cut, _)) = message.char_indices().nth(MAX_TOAST_CHARS) {
            message.truncate(cut);
            message.push('…');
        }

        Self {
            kind,
            message,
            shown_at,
            duration,
        }
    }

    pub fn phase(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);

        if elapsed < TOAST_ENTER_DELAY {
            ToastPhase::Entering
        } else if elapsed < self.duration {
            ToastPhase::Visible
        } else if elapsed < self.duration + TOAST_EXIT_TRANSITION {
            ToastPhase::Leaving
        } else {
            ToastPhase::Expired
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.phase(now) == ToastPhase::Expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast_at(start: Instant) -> Toast {
        Toast::shown_at(
            ToastKind::Success,
            "Results copied to clipboard!",
            DEFAULT_TOAST_DURATION,
            start,
        )
    }

    #[test]
    fn test_phases_follow_timing() {
        let start = Instant::now();
        let toast = toast_at(start);

        assert_eq!(toast.phase(start), ToastPhase::Entering);
        assert_eq!(
            toast.phase(start + Duration::from_millis(10)),
            ToastPhase::Visible
        );
        assert_eq!(
            toast.phase(start + Duration::from_millis(2999)),
            ToastPhase::Visible
        );
        assert_eq!(
            toast.phase(start + Duration::from_millis(3000)),
            ToastPhase::Leaving
        );
        assert_eq!(
            toast.phase(start + Duration::from_millis(3299)),
            ToastPhase::Leaving
        );
        assert_eq!(
            toast.phase(start + Duration::from_millis(3300)),
            ToastPhase::Expired
        );
    }

    #[test]
    fn test_custom_duration() {
        let start = Instant::now();
        let toast = Toast::shown_at(ToastKind::Info, "hi", Duration::from_millis(500), start);

        assert!(!toast.is_expired(start + Duration::from_millis(700)));
        assert!(toast.is_expired(start + Duration::from_millis(800)));
    }

    #[test]
    fn test_long_message_is_truncated() {
        let body = "é".repeat(70_000);
        let toast = Toast::new(ToastKind::Error, format!("Error: {body}"), DEFAULT_TOAST_DURATION);

        assert_eq!(toast.message.chars().count(), MAX_TOAST_CHARS + 1);
        assert!(toast.message.starts_with("Error: éé"));
        assert!(toast.message.ends_with('…'));

        let short = Toast::new(ToastKind::Info, "Server URL saved", DEFAULT_TOAST_DURATION);
        assert_eq!(short.message, "Server URL saved");
    }

    #[test]
    fn test_clock_before_shown_at_is_entering() {
        let now = Instant::now();
        let toast = toast_at(now + Duration::from_secs(1));
        assert_eq!(toast.phase(now), ToastPhase::Entering);
    }
}
