//! Triage session state container.
//!
//! This module defines [`TriageSession`], the single owner of all mutable
//! triage state: the work queue, the move history, the resolved key-to-folder
//! map, and the file mover capability. It is constructed once by the entry
//! point and passed by mutable reference to the event handler — there are no
//! ambient globals.
//!
//! # Architecture
//!
//! `TriageSession` provides the state *mechanics* (assign the current item,
//! undo the last move, compute a view); the event handler in
//! [`handler`](super::handler) owns the *policy* of mapping input events onto
//! those mechanics and deciding what the user is told.
//!
//! # State consistency
//!
//! Both mutating operations are written for strong exception safety: the
//! filesystem move happens first, and queue/history are only touched after
//! it succeeds. A failed move leaves the session exactly as it was, so the
//! item stays pending at the same position for retry.

use crate::app::history::HistoryStack;
use crate::app::queue::TriageQueue;
use crate::domain::error::{Result, TriageError};
use crate::domain::{ImageItem, MoveRecord};
use crate::infrastructure::FileMover;
use crate::ui::viewmodel::{DisplayTarget, TriageView};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Central state container for one triage session.
///
/// Owns one [`TriageQueue`] and one [`HistoryStack`] for the lifetime of the
/// session, plus the [`FileMover`] through which all filesystem mutation
/// flows. Never shared across threads; all mutation is serialized through
/// `&mut self`.
pub struct TriageSession {
    /// Directory being triaged. Category folders are created beneath it.
    root: PathBuf,

    /// Immutable mapping from digit keys to category folder names.
    keymap: BTreeMap<char, String>,

    /// Pending/assigned items and the cursor between them.
    queue: TriageQueue,

    /// LIFO record of moves available for undo.
    history: HistoryStack,

    /// The one capability used to touch the filesystem.
    mover: Box<dyn FileMover>,
}

impl TriageSession {
    /// Creates a session over `root` with the given queue contents.
    #[must_use]
    pub fn new(
        root: PathBuf,
        keymap: BTreeMap<char, String>,
        items: Vec<ImageItem>,
        history: HistoryStack,
        mover: Box<dyn FileMover>,
    ) -> Self {
        Self {
            root,
            keymap,
            queue: TriageQueue::new(items),
            history,
            mover,
        }
    }

    /// Resolves a category key to its folder name, if mapped.
    #[must_use]
    pub fn folder_for(&self, key: char) -> Option<&str> {
        self.keymap.get(&key).map(String::as_str)
    }

    /// Directory being triaged.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns what the display collaborator should render: the absolute
    /// path of the current item, or the exhausted marker.
    #[must_use]
    pub fn current_display_item(&self) -> DisplayTarget {
        match self.queue.current() {
            Some(item) => DisplayTarget::Image(self.root.join(item.name())),
            None => DisplayTarget::Exhausted,
        }
    }

    /// Computes a renderable snapshot of session progress.
    #[must_use]
    pub fn compute_view(&self) -> TriageView {
        TriageView {
            target: self.current_display_item(),
            reviewed: self.queue.position(),
            remaining: self.queue.len() - self.queue.position(),
            undoable: self.history.len(),
        }
    }

    /// Moves the current item into `folder` under the root.
    ///
    /// On success the move is recorded in history, the cursor advances, and
    /// the record is returned for reporting. Returns `Ok(None)` when the
    /// queue is exhausted (nothing to assign — a no-op, not an error).
    ///
    /// # Errors
    ///
    /// Propagates [`TriageError::NotFound`] / [`TriageError::Io`] from the
    /// mover. On error the queue and history are untouched.
    pub(crate) fn assign_current(&mut self, folder: &str) -> Result<Option<MoveRecord>> {
        let Some(item) = self.queue.current() else {
            return Ok(None);
        };

        let source = self.root.join(item.name());
        let dest_dir = self.root.join(folder);

        let destination = self.mover.relocate(&source, &dest_dir)?;
        let record = MoveRecord::new(source, destination);

        self.history.push(record.clone());
        self.queue.advance();

        tracing::info!(
            item = %record.source.display(),
            folder = %folder,
            position = self.queue.position(),
            "assigned current item"
        );

        Ok(Some(record))
    }

    /// Reverses the most recent not-yet-undone move.
    ///
    /// Pops the top history record, moves the file back to the directory its
    /// source path named, retreats the cursor, and reinserts the item at the
    /// cursor so it is the next thing reviewed. Returns `Ok(None)` when the
    /// history is empty.
    ///
    /// # Errors
    ///
    /// If the reverse move fails, the popped record is pushed back onto the
    /// history so the user can retry the undo, and the error is returned.
    /// The queue is untouched in that case. Filesystem state may then be
    /// inconsistent with the record (the file may be gone entirely); this is
    /// surfaced to the user for manual correction.
    pub(crate) fn undo_last(&mut self) -> Result<Option<MoveRecord>> {
        let Some(record) = self.history.pop() else {
            return Ok(None);
        };

        let Some(original_dir) = record.source.parent() else {
            // Source paths are always root-joined, so this cannot happen;
            // treat it as an unrecoverable record rather than panicking.
            return Err(TriageError::Config(format!(
                "move record source has no parent directory: {}",
                record.source.display()
            )));
        };

        match self.mover.relocate(&record.destination, original_dir) {
            Ok(_) => {}
            Err(err) => {
                self.history.push(record);
                return Err(err);
            }
        }

        self.queue.retreat();

        let name = record
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.queue.reinsert_at_cursor(ImageItem::new(name));

        tracing::info!(
            item = %record.source.display(),
            position = self.queue.position(),
            "undid last move"
        );

        Ok(Some(record))
    }
}
