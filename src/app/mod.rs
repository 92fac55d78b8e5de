//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the terminal frontend (`main.rs`) and the
//! domain/infrastructure layers, implementing the event-driven triage loop.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow:
//!
//! ```text
//! Keypress → Event → Event Handler → Session Mutations → Actions → Frontend
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`history`]: LIFO stack of performed moves
//! - [`queue`]: Ordered work queue with cursor
//! - [`state`]: Session state container and view computation

pub mod actions;
pub mod handler;
pub mod history;
pub mod queue;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use history::HistoryStack;
pub use queue::TriageQueue;
pub use state::TriageSession;
