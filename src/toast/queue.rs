//! Priority toast queue with synchronous change listeners.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use super::types::Toast;

new_key_type! {
    /// Handle to a queued toast.
    pub struct ToastId;
    /// Handle to a registered listener.
    pub struct SubscriptionId;
}

/// Called after every mutation with the currently visible toasts.
pub type ToastListener = Box<dyn FnMut(&[(ToastId, Toast)])>;

const DEFAULT_MAX_VISIBLE: usize = 3;

struct Entry {
    toast: Toast,
    seq: u64,
}

// ---------------------------------------------------------------------------
// ToastQueue
// ---------------------------------------------------------------------------

/// Toasts ordered by priority (highest first), then by arrival.
///
/// The queue is an ordinary value: the host creates it and hands it to
/// whatever needs to raise notifications.
pub struct ToastQueue {
    entries: SlotMap<ToastId, Entry>,
    listeners: SlotMap<SubscriptionId, ToastListener>,
    next_seq: u64,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            listeners: SlotMap::with_key(),
            next_seq: 0,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }

    /// Cap on how many toasts [`visible`](Self::visible) returns (builder pattern).
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Enqueue a toast.
    pub fn push(&mut self, toast: Toast) -> ToastId {
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::debug!(kind = ?toast.kind, priority = ?toast.priority, "toast queued");
        let id = self.entries.insert(Entry { toast, seq });
        self.notify();
        id
    }

    /// Remove a specific toast. Returns it if it was still queued.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Toast> {
        let entry = self.entries.remove(id)?;
        tracing::debug!(kind = ?entry.toast.kind, "toast dismissed");
        self.notify();
        Some(entry.toast)
    }

    /// Remove and return the highest-priority toast (oldest among equals).
    pub fn pop(&mut self) -> Option<Toast> {
        let id = self.ordered_ids().into_iter().next()?;
        self.dismiss(id)
    }

    /// Remove every toast.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.notify();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.entries.get(id).map(|e| &e.toast)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `max_visible` toasts in display order.
    pub fn visible(&self) -> Vec<(ToastId, &Toast)> {
        self.ordered_ids()
            .into_iter()
            .take(self.max_visible)
            .map(|id| (id, &self.entries[id].toast))
            .collect()
    }

    fn ordered_ids(&self) -> Vec<ToastId> {
        let mut ids: Vec<(ToastId, &Entry)> = self.entries.iter().collect();
        ids.sort_by(|(_, a), (_, b)| {
            b.toast
                .priority
                .cmp(&a.toast.priority)
                .then(a.seq.cmp(&b.seq))
        });
        ids.into_iter().map(|(id, _)| id).collect()
    }

    // -----------------------------------------------------------------------
    // Listeners
    // -----------------------------------------------------------------------

    /// Register a listener. It is not called until the next mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[(ToastId, Toast)]) + 'static) -> SubscriptionId {
        self.listeners.insert(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot: Vec<(ToastId, Toast)> = self
            .visible()
            .into_iter()
            .map(|(id, toast)| (id, toast.clone()))
            .collect();
        for listener in self.listeners.values_mut() {
            listener(&snapshot);
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field("len", &self.entries.len())
            .field("listeners", &self.listeners.len())
            .field("max_visible", &self.max_visible)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::toast::types::ToastPriority;
    use pretty_assertions::assert_eq;

    fn titles(queue: &ToastQueue) -> Vec<String> {
        queue.visible().into_iter().map(|(_, t)| t.title.clone()).collect()
    }

    // ── Ordering ─────────────────────────────────────────────────────

    #[test]
    fn higher_priority_first_then_fifo() {
        let mut q = ToastQueue::new().with_max_visible(10);
        q.push(Toast::info("first"));
        q.push(Toast::info("low").with_priority(ToastPriority::Low));
        q.push(Toast::error("error"));
        q.push(Toast::info("second"));
        q.push(Toast::warning("critical").with_priority(ToastPriority::Critical));
        assert_eq!(titles(&q), vec!["critical", "error", "first", "second", "low"]);
    }

    #[test]
    fn visible_is_capped() {
        let mut q = ToastQueue::new();
        for i in 0..5 {
            q.push(Toast::info(format!("t{i}")));
        }
        assert_eq!(q.len(), 5);
        assert_eq!(titles(&q), vec!["t0", "t1", "t2"]);
    }

    #[test]
    fn pop_takes_highest() {
        let mut q = ToastQueue::new();
        q.push(Toast::info("a"));
        q.push(Toast::error("b"));
        assert_eq!(q.pop().map(|t| t.title), Some("b".to_owned()));
        assert_eq!(q.pop().map(|t| t.title), Some("a".to_owned()));
        assert_eq!(q.pop(), None);
    }

    // ── Dismiss / Clear ──────────────────────────────────────────────

    #[test]
    fn dismiss_by_id() {
        let mut q = ToastQueue::new();
        let a = q.push(Toast::info("a"));
        let b = q.push(Toast::info("b"));
        assert_eq!(q.dismiss(a).map(|t| t.title), Some("a".to_owned()));
        assert_eq!(q.dismiss(a), None);
        assert!(q.get(a).is_none());
        assert_eq!(q.get(b).map(|t| t.title.as_str()), Some("b"));
    }

    #[test]
    fn stale_id_after_reuse() {
        let mut q = ToastQueue::new();
        let a = q.push(Toast::info("a"));
        q.dismiss(a);
        let _b = q.push(Toast::info("b"));
        assert!(q.get(a).is_none());
    }

    #[test]
    fn clear_empties() {
        let mut q = ToastQueue::new();
        q.push(Toast::info("a"));
        q.clear();
        assert!(q.is_empty());
    }

    // ── Listeners ────────────────────────────────────────────────────

    #[test]
    fn listeners_see_each_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut q = ToastQueue::new();
        q.subscribe(move |visible| sink.borrow_mut().push(visible.len()));

        let a = q.push(Toast::info("a"));
        q.push(Toast::info("b"));
        q.dismiss(a);
        q.clear();
        q.clear();
        assert_eq!(*seen.borrow(), vec![1, 2, 1, 0]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut q = ToastQueue::new();
        let sub = q.subscribe(move |_| *sink.borrow_mut() += 1);
        q.push(Toast::info("a"));
        assert!(q.unsubscribe(sub));
        assert!(!q.unsubscribe(sub));
        q.push(Toast::info("b"));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn listener_snapshot_is_in_display_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut q = ToastQueue::new();
        q.push(Toast::info("info"));
        q.subscribe(move |visible| {
            *sink.borrow_mut() = visible.iter().map(|(_, t)| t.title.clone()).collect();
        });
        q.push(Toast::error("error"));
        assert_eq!(*seen.borrow(), vec!["error".to_owned(), "info".to_owned()]);
    }
}
