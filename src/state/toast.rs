//! Transient notifications shown over the form

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Colour class of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Fire-and-forget notification surface
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

/// Queue of visible toasts, oldest first
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    /// Never show more than this many toasts at once
    const MAX_VISIBLE: usize = 4;

    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    /// Drop toasts older than the configured lifetime.
    /// Returns true if any toast was removed.
    pub fn prune(&mut self) -> bool {
        self.prune_at(Instant::now())
    }

    fn prune_at(&mut self, now: Instant) -> bool {
        let ttl = self.ttl;
        let before = self.toasts.len();
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, message: &str, severity: Severity) {
        if self.toasts.len() == Self::MAX_VISIBLE {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message: message.to_string(),
            severity,
            shown_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_appends() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.notify("Could not find the package.", Severity::Error);
        assert_eq!(queue.len(), 1);
        let toast = queue.iter().next().unwrap();
        assert_eq!(toast.message, "Could not find the package.");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        for i in 0..6 {
            queue.notify(&format!("toast {i}"), Severity::Info);
        }
        assert_eq!(queue.len(), ToastQueue::MAX_VISIBLE);
        assert_eq!(queue.iter().next().unwrap().message, "toast 2");
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut queue = ToastQueue::new(Duration::from_millis(100));
        queue.notify("old", Severity::Warning);
        let later = Instant::now() + Duration::from_millis(200);
        assert!(queue.prune_at(later));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_prune_keeps_fresh() {
        let mut queue = ToastQueue::new(Duration::from_secs(60));
        queue.notify("fresh", Severity::Warning);
        assert!(!queue.prune());
        assert_eq!(queue.len(), 1);
    }
}
