//! Display-facing types.
//!
//! - [`viewmodel`]: snapshot structures the frontend renders from

pub mod viewmodel;

pub use viewmodel::{DisplayTarget, TriageView};
