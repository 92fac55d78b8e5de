//! File relocation primitive.
//!
//! This module defines the [`FileMover`] trait that abstracts over the one
//! physical side effect the triage core performs: moving a file into a
//! directory. The abstraction keeps the state machine testable without a
//! real filesystem; tests inject a recording or failing implementation.
//!
//! # Design Philosophy
//!
//! The trait is deliberately a single method. It is not a filesystem
//! abstraction layer — it is exactly the capability the controller needs,
//! and nothing else.

use crate::domain::error::{Result, TriageError};
use std::path::{Path, PathBuf};

/// Abstraction over the physical file move.
///
/// Implementations must create the destination directory (including missing
/// parents) when absent and move the source file so it ends up at
/// `destination_directory/basename(source)`.
///
/// # Implementations
///
/// - [`OsFileMover`]: performs real `std::fs` operations (default)
pub trait FileMover {
    /// Moves `source` into `dest_dir`, returning the final destination path.
    ///
    /// The returned path is always `dest_dir` joined with the basename of
    /// `source`. Callers must use the returned path rather than recomputing
    /// it.
    ///
    /// # Errors
    ///
    /// - [`TriageError::NotFound`] if `source` does not exist at call time
    /// - [`TriageError::Io`] for permission, cross-device, or directory
    ///   creation failures
    ///
    /// Either error is fatal to this single operation only; the session
    /// continues.
    fn relocate(&self, source: &Path, dest_dir: &Path) -> Result<PathBuf>;
}

/// The real filesystem mover.
///
/// Stateless; a session owns one for its lifetime. The move is a plain
/// `rename`, atomic on a single filesystem. A cross-device rename fails
/// outright rather than degrading to copy+delete, so a move either completes
/// or leaves the source untouched.
#[derive(Debug, Default)]
pub struct OsFileMover;

impl FileMover for OsFileMover {
    fn relocate(&self, source: &Path, dest_dir: &Path) -> Result<PathBuf> {
        if !source.is_file() {
            return Err(TriageError::NotFound(source.to_path_buf()));
        }

        let basename = source.file_name().ok_or_else(|| {
            TriageError::Config(format!("source path has no filename: {}", source.display()))
        })?;

        std::fs::create_dir_all(dest_dir)?;

        let destination = dest_dir.join(basename);
        std::fs::rename(source, &destination)?;

        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            "relocated file"
        );

        Ok(destination)
    }
}
