//! Event handling and state transition logic.
//!
//! This module implements the controller of the triage state machine: it
//! processes input events one at a time, mutates [`TriageSession`] through
//! its state methods, and returns the actions the frontend must execute.
//!
//! # Architecture
//!
//! The handler follows a unidirectional flow:
//! 1. The input dispatcher delivers an [`Event`]
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutation happens via `TriageSession` methods
//! 4. A render flag and a list of [`Action`]s come back for execution
//!
//! Events are handled to completion before the next is accepted; no two
//! assign/undo operations ever interleave.
//!
//! # Failure policy
//!
//! A failed file move is fatal to that single operation, never to the
//! session: the error is turned into a notification and the state is left
//! for retry. `handle_event` itself therefore has no error return.

use crate::app::actions::Action;
use crate::app::state::TriageSession;

/// Input events delivered to the triage core.
///
/// The dispatcher only ever produces these three; any other keypress is
/// dropped before it reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Assign the current item to the category mapped to this digit key.
    Assign(char),
    /// Reverse the most recent not-yet-undone move.
    Undo,
    /// End the session.
    Quit,
}

/// Processes one event against the session.
///
/// Returns `(needs_render, actions)`: when `needs_render` is true the cursor
/// moved and the frontend must re-render from a fresh
/// [`compute_view`](TriageSession::compute_view) snapshot. The actions are
/// executed in order after rendering.
///
/// Unmapped keys and assigns on an exhausted queue are silent no-ops; undo
/// on an empty history reports "nothing to undo". None of these abort the
/// session.
pub fn handle_event(session: &mut TriageSession, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Assign(key) => {
            let Some(folder) = session.folder_for(*key).map(str::to_owned) else {
                tracing::debug!(%key, "ignoring unmapped category key");
                return (false, vec![]);
            };

            match session.assign_current(&folder) {
                Ok(Some(record)) => {
                    let note = format!(
                        "moved {} to {}",
                        record.source.display(),
                        record.destination.display()
                    );
                    (true, vec![Action::Notify(note)])
                }
                Ok(None) => {
                    tracing::debug!(%key, "assign ignored, queue exhausted");
                    (false, vec![])
                }
                Err(err) => {
                    tracing::warn!(%key, folder = %folder, error = %err, "assign failed, item stays pending");
                    (false, vec![Action::Notify(format!("move failed: {err}"))])
                }
            }
        }
        Event::Undo => match session.undo_last() {
            Ok(Some(record)) => {
                let note = format!("restored {}", record.source.display());
                (true, vec![Action::Notify(note)])
            }
            Ok(None) => (false, vec![Action::Notify("nothing to undo".to_string())]),
            Err(err) => {
                tracing::warn!(error = %err, "undo failed, record kept for retry");
                (
                    false,
                    vec![Action::Notify(format!("undo failed, will retry: {err}"))],
                )
            }
        },
        Event::Quit => (false, vec![Action::Quit]),
    }
}
