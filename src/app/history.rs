//! LIFO history of performed moves.
//!
//! [`HistoryStack`] records completed relocations so they can be undone in
//! reverse order of execution. It owns no files — each [`MoveRecord`] only
//! describes a relocation that already happened.
//!
//! The stack is unbounded by default. A capacity bound with oldest-record
//! eviction is available for long sessions; once a record is evicted, the
//! move it described can no longer be undone.

use crate::domain::MoveRecord;
use std::collections::VecDeque;

/// Ordered record of performed moves with LIFO pop discipline.
///
/// The back of the deque is the top of the stack: the most recent
/// not-yet-undone move. Popping and reversing it restores the filesystem and
/// the queue to the state immediately before that move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    records: VecDeque<MoveRecord>,
    limit: Option<usize>,
}

impl HistoryStack {
    /// Creates an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            limit: None,
        }
    }

    /// Creates a history bounded to `limit` records.
    ///
    /// Pushing onto a full stack evicts the oldest record first. A limit of
    /// zero means nothing is ever retained and undo is permanently
    /// unavailable.
    #[must_use]
    pub fn bounded(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Pushes a record onto the top of the stack.
    pub fn push(&mut self, record: MoveRecord) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.records.len() >= limit {
                let evicted = self.records.pop_front();
                tracing::debug!(?evicted, "history bound reached, evicting oldest record");
            }
        }
        self.records.push_back(record);
    }

    /// Removes and returns the top record, or `None` when the history is
    /// empty.
    ///
    /// Empty history is an expected condition — callers report "nothing to
    /// undo" to the user and continue.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    /// Number of undoable moves currently recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}
