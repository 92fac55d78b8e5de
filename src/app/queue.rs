//! Ordered work queue of pending images.
//!
//! [`TriageQueue`] owns the queue mutation rules: a fixed item sequence from
//! the initial directory listing plus a cursor marking the pending/assigned
//! boundary. Items are never removed on assign; the cursor moving past an
//! item is what marks it assigned. This keeps every position stable, which
//! is what makes undo a pure cursor retreat.
//!
//! # Invariant
//!
//! `0 <= cursor <= len` always holds. The cursor is either `len` (queue
//! exhausted) or points at the single item currently awaiting a decision —
//! the only item ever handed to the display or the file mover. Everything in
//! `[0, cursor)` has been assigned and physically lives in a category
//! folder; everything in `[cursor, len)` is pending and lives in the root.

use crate::domain::ImageItem;

/// Ordered sequence of image identifiers plus a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageQueue {
    items: Vec<ImageItem>,
    cursor: usize,
}

impl TriageQueue {
    /// Creates a queue from an initial listing, cursor at the front.
    #[must_use]
    pub fn new(items: Vec<ImageItem>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Returns the item at the cursor, or `None` when the queue is exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&ImageItem> {
        self.items.get(self.cursor)
    }

    /// Moves the cursor past the current item, saturating at the end.
    ///
    /// Called exactly once per successful assign.
    pub fn advance(&mut self) {
        if self.cursor < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor back by one, saturating at zero.
    ///
    /// Called exactly once per successful undo.
    pub fn retreat(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Inserts `item` at the cursor position unless an item with the same
    /// identifier is already anywhere in the queue.
    ///
    /// Used by undo so the restored image reappears as the next item to
    /// review. Because assign never removes items, the usual outcome is a
    /// no-op: the item is still sitting at the cursor. The containment check
    /// makes the operation idempotent on identifiers — a deliberate carry of
    /// the source behavior where the *name* is the de-duplication key (see
    /// DESIGN.md), so two same-named files can never both occupy the queue.
    pub fn reinsert_at_cursor(&mut self, item: ImageItem) {
        if self.items.contains(&item) {
            tracing::debug!(item = %item, "reinsert skipped, identifier already queued");
            return;
        }
        self.items.insert(self.cursor, item);
    }

    /// Number of items the queue was built with (assigned and pending).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the queue holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current cursor position; equals the number of items already assigned
    /// and not undone.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// True once the cursor has passed the last item.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(names: &[&str]) -> TriageQueue {
        TriageQueue::new(names.iter().copied().map(ImageItem::new).collect())
    }

    #[test]
    fn advance_saturates_at_length() {
        let mut q = queue(&["a.jpg"]);
        q.advance();
        q.advance();
        assert_eq!(q.position(), 1);
        assert!(q.is_exhausted());
        assert!(q.current().is_none());
    }

    #[test]
    fn retreat_saturates_at_zero() {
        let mut q = queue(&["a.jpg", "b.png"]);
        q.retreat();
        assert_eq!(q.position(), 0);
        assert_eq!(q.current().map(ImageItem::name), Some("a.jpg"));
    }

    #[test]
    fn reinsert_is_idempotent_on_identifier() {
        let mut q = queue(&["a.jpg", "b.png"]);
        q.advance();
        q.retreat();
        q.reinsert_at_cursor(ImageItem::new("a.jpg"));
        assert_eq!(q.len(), 2);
        assert_eq!(q.current().map(ImageItem::name), Some("a.jpg"));
    }

    #[test]
    fn reinsert_places_missing_item_at_cursor() {
        let mut q = queue(&["b.png"]);
        q.reinsert_at_cursor(ImageItem::new("a.jpg"));
        assert_eq!(q.len(), 2);
        assert_eq!(q.current().map(ImageItem::name), Some("a.jpg"));
    }

    #[test]
    fn empty_queue_is_exhausted_immediately() {
        let q = queue(&[]);
        assert!(q.is_exhausted());
        assert!(q.current().is_none());
    }
}
