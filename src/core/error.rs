//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating a [`MachineConfig`](super::MachineConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Parsing the JSON form of a configuration failed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Serializing a configuration to JSON failed
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// The initial state is not among the declared states
    #[error("Initial state '{initial}' is not a declared state")]
    UndeclaredInitial { initial: String },

    /// A transition points at a state that was never declared
    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UndeclaredTarget {
        state: String,
        event: String,
        target: String,
    },
}
