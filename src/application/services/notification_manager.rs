//! Queue behind the notification popup.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::domain::Notification;

/// FIFO of toasts; only the head is on screen.
#[derive(Debug)]
pub struct NotificationManager {
    pending: VecDeque<Notification>,
    lifetime: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    /// Creates an empty queue whose toasts stay up for `lifetime`.
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            pending: VecDeque::new(),
            lifetime,
        }
    }

    /// Queues a title-only success toast.
    pub fn success(&mut self, title: impl Into<String>) {
        self.pending
            .push_back(Notification::success(title, self.lifetime));
    }

    /// Queues a failure toast.
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.pending
            .push_back(Notification::error(title, message, self.lifetime));
    }

    /// Advances the display clock of the head toast.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        let Some(head) = self.pending.front_mut() else {
            return;
        };
        head.show(now);
        if head.has_elapsed(now) {
            self.pending.pop_front();
            if let Some(next) = self.pending.front_mut() {
                next.show(now);
            }
        }
    }

    /// The toast currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.pending.front()
    }
}
