//! View model handed to the display collaborator.
//!
//! The core never renders anything itself. After every cursor change it
//! exposes a [`TriageView`] snapshot; the frontend decides what "render"
//! means (print a path, load pixels into a window, anything). The snapshot
//! is plain data — no references into session state — so a multi-threaded
//! display could hold it across frames without touching the core.

use std::path::PathBuf;

/// What the display should be showing right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayTarget {
    /// Absolute path of the image currently awaiting a decision.
    Image(PathBuf),
    /// No pending images remain.
    Exhausted,
}

/// Renderable snapshot of session progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageView {
    /// Current image or the exhausted marker.
    pub target: DisplayTarget,
    /// Items assigned so far and not undone.
    pub reviewed: usize,
    /// Items still awaiting a decision, current one included.
    pub remaining: usize,
    /// Moves currently undoable.
    pub undoable: usize,
}
