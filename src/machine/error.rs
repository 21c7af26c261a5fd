//! Engine error types.

use thiserror::Error;

/// Errors returned by forward transitions.
///
/// A failed call leaves the current state and both history stacks untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// `change_state` named a state that is not declared
    #[error("State '{state}' is not declared")]
    InvalidState { state: String },

    /// `trigger` fired an event with no rule in the current state
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: String, event: String },
}
