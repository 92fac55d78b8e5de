//! Domain layer for pictriage.
//!
//! This module contains the core domain types for the triage state machine,
//! independent of terminal or filesystem concerns. It keeps the business
//! rules (what an item is, what a completed move looks like, which files
//! count as images) isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Image item identity, move records, and the image-extension
//!   predicate

pub mod error;
pub mod item;

pub use error::{Result, TriageError};
pub use item::{is_image_file, ImageItem, MoveRecord};
