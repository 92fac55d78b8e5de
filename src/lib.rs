//! # pictriage
//!
//! A keyboard-driven image triage tool: view the images in a directory one
//! at a time, file each into a category folder with a single digit
//! keypress, and undo mistakes in LIFO order.
//!
//! # Architecture
//!
//! The crate is a library with a thin terminal binary on top:
//!
//! ```text
//! Keypress → Event → handle_event ─→ TriageSession ─→ FileMover (fs)
//!                         │              │
//!                         ▼              ▼
//!                      Actions       TriageView → render
//! ```
//!
//! - [`domain`]: item identity, move records, the central error type
//! - [`app`]: the triage state machine — queue, history, session, handler
//! - [`infrastructure`]: the filesystem seam (directory listing, file moves)
//! - [`ui`]: view model snapshots for the display collaborator
//! - [`observability`]: tracing setup
//!
//! All session state lives in one [`TriageSession`] owned by the entry
//! point. Events are handled to completion one at a time; a failed file
//! move never corrupts queue or history (the operation is reported and the
//! item stays pending).
//!
//! # Configuration
//!
//! Configuration is a TOML file with a `[categories]` table mapping single
//! digit keys to folder names:
//!
//! ```toml
//! history_limit = 100
//! trace_level = "debug"
//!
//! [categories]
//! "1" = "Family"
//! "2" = "Friends"
//! ```
//!
//! With no file present, the built-in map covers keys `0`–`9`
//! (`1` Family, `2` Friends, `3` Work, `4` Nature, `5` Pets, `6` Travel,
//! `7` Events, `8` Favorites, `9` Other, `0` Unsorted).
//!
//! # Example
//!
//! ```no_run
//! use pictriage::{handle_event, initialize, Config, Event};
//! use std::path::Path;
//!
//! let config = Config::default();
//! let mut session = initialize(Path::new("/photos/inbox"), &config)?;
//!
//! // Assign the current image to category '1', then change your mind.
//! let (_render, _actions) = handle_event(&mut session, &Event::Assign('1'));
//! let (_render, _actions) = handle_event(&mut session, &Event::Undo);
//! # Ok::<(), pictriage::TriageError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, Event, HistoryStack, TriageQueue, TriageSession};
pub use domain::{ImageItem, MoveRecord, Result, TriageError};
pub use infrastructure::{FileMover, OsFileMover};
pub use ui::{DisplayTarget, TriageView};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Startup configuration for a triage session.
///
/// Loaded once from a TOML file (or defaulted) and immutable thereafter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Mapping from single-character digit keys to category folder names.
    #[serde(default = "default_categories")]
    pub categories: BTreeMap<String, String>,

    /// Maximum number of moves kept undoable. `None` means unbounded.
    ///
    /// When bounded, pushing past the limit evicts the oldest record; undo
    /// beyond the bound is unavailable.
    #[serde(default)]
    pub history_limit: Option<usize>,

    /// Tracing filter level (`error`, `warn`, `info`, `debug`, `trace`).
    ///
    /// Overridden by the `RUST_LOG` environment variable when set.
    #[serde(default)]
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            history_limit: None,
            trace_level: None,
        }
    }
}

fn default_categories() -> BTreeMap<String, String> {
    [
        ("1", "Family"),
        ("2", "Friends"),
        ("3", "Work"),
        ("4", "Nature"),
        ("5", "Pets"),
        ("6", "Travel"),
        ("7", "Events"),
        ("8", "Favorites"),
        ("9", "Other"),
        ("0", "Unsorted"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Io`] if the file cannot be read and
    /// [`TriageError::Config`] if it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| TriageError::Config(err.to_string()))
    }

    /// Validates the category table into a `char`-keyed map.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Config`] if any key is not a single ASCII
    /// digit, or any folder name is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictriage::Config;
    ///
    /// let keymap = Config::default().keymap()?;
    /// assert_eq!(keymap.get(&'1').map(String::as_str), Some("Family"));
    /// # Ok::<(), pictriage::TriageError>(())
    /// ```
    pub fn keymap(&self) -> Result<BTreeMap<char, String>> {
        let mut keymap = BTreeMap::new();
        for (key, folder) in &self.categories {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(TriageError::Config(format!(
                    "category key must be a single character: {key:?}"
                )));
            };
            if !c.is_ascii_digit() {
                return Err(TriageError::Config(format!(
                    "category key must be a digit 0-9: {key:?}"
                )));
            }
            if folder.is_empty() {
                return Err(TriageError::Config(format!(
                    "category folder for key {key:?} is empty"
                )));
            }
            keymap.insert(c, folder.clone());
        }
        Ok(keymap)
    }
}

/// Builds a [`TriageSession`] over `root` using the real filesystem.
///
/// Lists the images directly under `root` (sorted, filtered to recognized
/// extensions), validates the key map, and wires in the [`OsFileMover`].
///
/// # Errors
///
/// Returns an error if `root` cannot be listed or the configuration is
/// invalid.
pub fn initialize(root: &Path, config: &Config) -> Result<TriageSession> {
    let keymap = config.keymap()?;
    let names = infrastructure::list_image_files(root)?;
    let items = names.into_iter().map(ImageItem::new).collect();

    let history = match config.history_limit {
        Some(limit) => HistoryStack::bounded(limit),
        None => HistoryStack::new(),
    };

    tracing::info!(root = %root.display(), "initialized triage session");

    Ok(TriageSession::new(
        root.to_path_buf(),
        keymap,
        items,
        history,
        Box::new(OsFileMover),
    ))
}
