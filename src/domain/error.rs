//! Error types for pictriage.
//!
//! This module defines the centralized error type [`TriageError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented
//! using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Two conditions from the triage design are deliberately *not* errors:
//! undoing with an empty history and pressing an unmapped key are expected,
//! silently-handled situations. They are encoded as `Option`/no-op results
//! and surfaced to the user as notifications, never as a `TriageError`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pictriage operations.
///
/// Consolidates the failure modes of a triage session: a source file vanishing
/// before a move, filesystem failures while creating folders or moving files,
/// and invalid configuration.
///
/// # Examples
///
/// ```
/// use pictriage::{Result, TriageError};
///
/// fn validate_key(key: &str) -> Result<()> {
///     if key.len() != 1 {
///         return Err(TriageError::Config(format!(
///             "category key must be a single character, got {key:?}"
///         )));
///     }
///     Ok(())
/// }
///
/// assert!(validate_key("12").is_err());
/// ```
#[derive(Debug, Error)]
pub enum TriageError {
    /// The source file no longer exists at the expected path.
    ///
    /// Occurs when a relocate is requested for a file that vanished between
    /// queue construction and the move, for example because the user cleaned
    /// the directory by hand. Fatal to the single requested operation, never
    /// to the session.
    #[error("source file not found: {0}")]
    NotFound(PathBuf),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps permission errors, cross-device moves, and directory creation
    /// failures. Automatically converts from `std::io::Error` using the
    /// `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the key-to-folder map contains a key that is not a single
    /// digit, or the configuration file cannot be parsed. The string
    /// describes the specific problem.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for pictriage operations.
pub type Result<T> = std::result::Result<T, TriageError>;
