//! Backtrack: a configuration-driven finite state machine with undo/redo
//!
//! A machine is described once by a static configuration: an initial state
//! and, for every state, the events it reacts to and where each one leads.
//! The engine tracks the current state, applies transitions, and keeps a
//! bidirectional history so callers can step backward and forward through
//! the states they visited.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig`, loaded from JSON, built, or written with `machine_config!`
//! - **Engine**: `Fsm`, which owns the current state and both history stacks
//! - **History**: `HistoryStack`, a LIFO of state names behind `undo` and `redo`
//!
//! # Example
//!
//! ```rust
//! use backtrack::{machine_config, Fsm, FsmError};
//!
//! let config = machine_config! {
//!     initial: green,
//!     states: {
//!         green => { next => yellow },
//!         yellow => { next => red },
//!         red => { next => green },
//!     }
//! };
//!
//! let mut fsm = Fsm::new(config);
//! fsm.trigger("next").unwrap();
//! fsm.trigger("next").unwrap();
//! assert_eq!(fsm.state(), "red");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "yellow");
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "red");
//!
//! assert_eq!(
//!     fsm.change_state("unknown"),
//!     Err(FsmError::InvalidState { state: "unknown".to_string() })
//! );
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use crate::core::{ConfigError, HistoryStack, MachineConfig, StateDescriptor};
pub use machine::{Fsm, FsmError};
