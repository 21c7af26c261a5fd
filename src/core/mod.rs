//! Core configuration and history types.
//!
//! This module contains the data the engine operates on:
//! - The configuration schema (states, events, transition targets)
//! - The LIFO stacks used for undo/redo history
//!
//! Nothing in here performs a transition; see [`crate::machine`] for that.

mod config;
mod error;
mod history;

pub use config::{MachineConfig, StateDescriptor};
pub use error::ConfigError;
pub use history::HistoryStack;
