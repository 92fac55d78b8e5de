//! Directory listing for triage queue construction.
//!
//! Produces the ordered set of image filenames a session starts from. The
//! listing is filtered to recognized image extensions and sorted
//! lexicographically: directory enumeration order is not guaranteed by the
//! OS, and the queue order must be deterministic across runs.

use crate::domain::error::Result;
use crate::domain::is_image_file;
use std::path::Path;

/// Lists image filenames directly under `root`, sorted lexicographically.
///
/// Only regular files whose extension is one of `png`, `jpg`, `jpeg`
/// (case-insensitive) are included. Subdirectories — including category
/// folders from a previous session — are never descended into, so already
/// triaged images do not re-enter the queue.
///
/// Filenames that are not valid UTF-8 are skipped with a warning; the queue
/// identifies items by string name.
///
/// # Errors
///
/// Returns an error if `root` cannot be read.
pub fn list_image_files(root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if is_image_file(&name) => names.push(name),
            Ok(_) => {}
            Err(raw) => {
                tracing::warn!(name = ?raw, "skipping non-UTF-8 filename");
            }
        }
    }

    names.sort();

    tracing::debug!(root = %root.display(), count = names.len(), "listed image files");

    Ok(names)
}
