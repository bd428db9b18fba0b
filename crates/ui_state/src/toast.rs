//! Notification queue rendered as stacked toast cards.

use serde::{Deserialize, Serialize};

/// A title/body pair for one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// One queued toast with its dismissal handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastEntry {
    pub id: u64,
    pub notice: Notice,
}

/// FIFO queue of visible toasts.
///
/// Ids increase monotonically and are never reused, so a delayed
/// dismissal can never remove a newer toast than the one it was
/// scheduled for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastQueue {
    next_id: u64,
    entries: Vec<ToastEntry>,
}

impl ToastQueue {
    /// Append a notice; returns the id to dismiss it with.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, notice });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Visible toasts, oldest first.
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_monotonic_ids() {
        let mut queue = ToastQueue::default();

        let a = queue.push(Notice::new("First", "one"));
        let b = queue.push(Notice::new("Second", "two"));
        let c = queue.push(Notice::new("Third", "three"));

        assert!(a < b && b < c);
        assert_eq!(queue.entries().len(), 3);
    }

    #[test]
    fn test_entries_kept_in_push_order() {
        let mut queue = ToastQueue::default();

        queue.push(Notice::new("First", ""));
        queue.push(Notice::new("Second", ""));

        let titles: Vec<&str> = queue
            .entries()
            .iter()
            .map(|entry| entry.notice.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();

        let a = queue.push(Notice::new("Keep", ""));
        let b = queue.push(Notice::new("Drop", ""));

        queue.dismiss(b);

        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].id, a);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut queue = ToastQueue::default();
        queue.push(Notice::new("Stays", ""));

        queue.dismiss(999);

        assert_eq!(queue.entries().len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();

        let a = queue.push(Notice::new("First", ""));
        queue.dismiss(a);
        let b = queue.push(Notice::new("Second", ""));

        assert!(b > a);
    }

    #[test]
    fn test_is_empty() {
        let mut queue = ToastQueue::default();
        assert!(queue.is_empty());

        let id = queue.push(Notice::new("One", ""));
        assert!(!queue.is_empty());

        queue.dismiss(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_serialization_round_trip() {
        let mut queue = ToastQueue::default();
        queue.push(Notice::new("Welcome back!", "Redirecting to dashboard..."));

        let json = serde_json::to_string(&queue).unwrap();
        let parsed: ToastQueue = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, queue);
    }
}
