//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDescriptor};
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
///
/// Unlike [`MachineConfig::new`] and the `machine_config!` macro, `build`
/// checks referential integrity, so a built configuration never points at an
/// undeclared state.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDescriptor>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring it again keeps its transitions and position.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Add a transition, declaring `from` if needed.
    ///
    /// The target must be declared somewhere before `build` is called.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or a state is undeclared.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let config = MachineConfig {
            initial,
            states: self.states,
        };
        config.validate()?;

        Ok(config)
    }
}
