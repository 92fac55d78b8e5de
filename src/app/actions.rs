//! Actions representing side effects to be executed by the frontend.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions are the boundary between the pure-ish state machine and the
//! effectful outside world: the frontend executes them in sequence after
//! each `handle_event` call. Rendering is *not* an action — the handler
//! signals "needs render" separately, and the frontend pulls a fresh view
//! snapshot from the session.

/// Commands emitted by the event handler for the frontend to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Shows a one-line message to the user.
    ///
    /// Used for move confirmations, "nothing to undo", and move failures.
    /// Never fatal; the session continues after every notification.
    Notify(String),

    /// Ends the session; the frontend tears down and exits.
    Quit,
}
