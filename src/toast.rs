use std::collections::VecDeque;
use std::time::Duration;

/// Most toasts on screen at once; older ones are evicted first.
pub const TOAST_LIMIT: usize = 3;

/// What a handler asks the notification surface to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast { id, notice });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
        id
    }

    /// Returns false if the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(title: &str) -> Notice {
        Notice::new(title, "details", Duration::from_secs(3))
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(notice("a"));
        let b = queue.push(notice("b"));
        assert!(b > a);
        assert_eq!(queue.len(), 2);
        let titles = queue
            .iter()
            .map(|t| t.notice.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut queue = ToastQueue::default();
        let first = queue.push(notice("first"));
        for i in 0..TOAST_LIMIT {
            queue.push(notice(&format!("toast {i}")));
        }
        assert_eq!(queue.len(), TOAST_LIMIT);
        assert!(queue.iter().all(|t| t.id != first));
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.push(notice("copied"));
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(notice("a"));
        queue.dismiss(id);
        let next = queue.push(notice("b"));
        assert_ne!(id, next);
    }
}
