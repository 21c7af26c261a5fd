//! The finite state machine engine.
//!
//! This module wraps a [`MachineConfig`](crate::core::MachineConfig) with the
//! mutable pieces: the current state plus undo and redo history.
//!
//! # Key Concepts
//!
//! - **Forward transitions**: `trigger` follows a configured rule, `change_state`
//!   jumps to any declared state. Both clear the redo history.
//! - **History navigation**: `undo` and `redo` move one state between the stacks.
//! - **Reset**: returns to the initial state, recorded in history like a jump.

mod engine;
mod error;

pub use engine::Fsm;
pub use error::FsmError;
