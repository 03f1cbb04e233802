//! Transient toasts raised by the editor and the admin listing.

use std::time::{Duration, Instant};

/// Whether a toast reports a completed action or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// A save or other user action went through.
    Success,
    /// A request failed; the message carries the reason.
    Error,
}

/// A toast waiting in, or at the head of, the notification queue.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity, which picks the popup colour.
    pub level: NotificationLevel,
    /// Popup title, e.g. `Post created` or `Error`.
    pub title: String,
    /// Body text, empty for title-only toasts.
    pub message: String,
    shown_at: Option<Instant>,
    lifetime: Duration,
}

impl Notification {
    /// Title-only toast for a completed action.
    #[must_use]
    pub fn success(title: impl Into<String>, lifetime: Duration) -> Self {
        Self::with_level(NotificationLevel::Success, title.into(), String::new(), lifetime)
    }

    /// Failure toast carrying the error text.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>, lifetime: Duration) -> Self {
        Self::with_level(NotificationLevel::Error, title.into(), message.into(), lifetime)
    }

    const fn with_level(
        level: NotificationLevel,
        title: String,
        message: String,
        lifetime: Duration,
    ) -> Self {
        Self {
            level,
            title,
            message,
            shown_at: None,
            lifetime,
        }
    }

    /// When the toast first reached the screen.
    #[must_use]
    pub const fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    /// Starts the display clock unless it is already running.
    pub fn show(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// Whether the toast has been on screen for longer than its lifetime.
    #[must_use]
    pub fn has_elapsed(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|shown| now.saturating_duration_since(shown) > self.lifetime)
    }
}
