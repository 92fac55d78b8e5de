//! Infrastructure layer for filesystem interactions.
//!
//! This module holds the two capabilities the triage core borrows from the
//! outside world: relocating a file ([`mover`]) and enumerating the images
//! in the root directory ([`listing`]). Everything above this layer treats
//! the filesystem as these two calls and nothing more.

pub mod listing;
pub mod mover;

pub use listing::list_image_files;
pub use mover::{FileMover, OsFileMover};
