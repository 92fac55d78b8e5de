//! Image item and move record domain models.
//!
//! This module defines the two value types the triage state machine is built
//! on: [`ImageItem`], a logical reference to a file awaiting a decision, and
//! [`MoveRecord`], the immutable record of one completed relocation that the
//! history stack replays in reverse on undo.

use std::path::PathBuf;

/// Recognized image file extensions, matched case-insensitively.
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// A logical reference to an image awaiting triage.
///
/// The identifier is the relative filename within the root directory at the
/// time the item entered the queue. It is *not* an owned resource: the file
/// may have been moved away already (items behind the cursor live in a
/// category folder), so holding an `ImageItem` says nothing about where the
/// file currently is.
///
/// Identity is the filename alone. Two items with the same filename are the
/// same item as far as the queue is concerned, which is what makes undo
/// reinsertion idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem(String);

impl ImageItem {
    /// Creates an item from a relative filename.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the relative filename identifying this item.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record of exactly one completed relocation.
///
/// Created when a relocate succeeds, consumed (popped) at most once by undo,
/// never mutated. Reversing it — moving `destination` back into the parent
/// directory of `source` — restores the filesystem to the state immediately
/// before the move.
///
/// # Fields
///
/// - `source`: absolute path the file was moved *from*
/// - `destination`: absolute path the file was moved *to*
/// - `moved_at`: Unix timestamp of the move, for notifications and logs only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub moved_at: i64,
}

impl MoveRecord {
    /// Creates a record for a move that just completed, stamped with the
    /// current time.
    #[must_use]
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
            moved_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Returns true if `name` carries a recognized image extension.
///
/// Matching is case-insensitive on the extension only; the rest of the name
/// is not inspected.
///
/// # Examples
///
/// ```
/// use pictriage::domain::is_image_file;
///
/// assert!(is_image_file("holiday.JPG"));
/// assert!(is_image_file("cat.jpeg"));
/// assert!(!is_image_file("notes.txt"));
/// assert!(!is_image_file("jpg"));
/// ```
#[must_use]
pub fn is_image_file(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
