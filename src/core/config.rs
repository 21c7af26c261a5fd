//! Configuration schema for state machines.
//!
//! A configuration names the initial state and maps every state name to a
//! descriptor holding its event-triggered transitions. Declaration order is
//! preserved so that state listings come back in the order they were written.

use super::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Transitions available from a single state.
///
/// Maps event name to target state name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescriptor {
    /// Event name -> target state name
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDescriptor {
    /// Create a descriptor with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated descriptor.
    ///
    /// Re-using an event name replaces the earlier target but keeps its position.
    pub fn with_transition(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Look up the target state for an event.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether the descriptor has a rule for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Static description of a state machine.
///
/// Treated as read-only once handed to an engine. Referential integrity
/// (`initial` and every transition target being declared states) is not
/// checked on construction; call [`MachineConfig::validate`] to check it.
///
/// # Example
///
/// ```rust
/// use backtrack::core::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "green",
///         "states": {
///             "green":  { "transitions": { "next": "yellow" } },
///             "yellow": { "transitions": { "next": "red" } },
///             "red":    { "transitions": { "next": "green" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "green");
/// assert_eq!(config.target("yellow", "next"), Some("red"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the starting state
    pub initial: String,
    /// State name -> descriptor, in declaration order
    #[serde(default)]
    pub states: IndexMap<String, StateDescriptor>,
}

impl MachineConfig {
    /// Create a configuration with the given initial state and no declared states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Declare a state, returning the updated configuration.
    pub fn with_state(mut self, name: impl Into<String>, descriptor: StateDescriptor) -> Self {
        self.states.insert(name.into(), descriptor);
        self
    }

    /// Parse a configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render the configuration as JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check whether `name` is a declared state.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Get the descriptor of a declared state.
    pub fn descriptor(&self, name: &str) -> Option<&StateDescriptor> {
        self.states.get(name)
    }

    /// Resolve the target of `event` when fired from `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.descriptor(state)?.target(event)
    }

    /// Check referential integrity.
    ///
    /// Fails on the first problem found: an undeclared `initial`, then the
    /// first transition (in declaration order) targeting an undeclared state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.contains_state(&self.initial) {
            return Err(ConfigError::UndeclaredInitial {
                initial: self.initial.clone(),
            });
        }

        for (state, descriptor) in &self.states {
            for (event, target) in &descriptor.transitions {
                if !self.contains_state(target) {
                    return Err(ConfigError::UndeclaredTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
