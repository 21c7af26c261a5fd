//! State machine that tracks the current state and its undo/redo history.

use crate::core::{ConfigError, HistoryStack, MachineConfig};
use crate::machine::error::FsmError;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Configuration-driven finite state machine with undo/redo.
///
/// The configuration is shared and never mutated. The current state and both
/// history stacks are owned by the instance; sharing one engine between
/// threads needs external synchronization.
///
/// # Example
///
/// ```rust
/// use backtrack::core::{MachineConfig, StateDescriptor};
/// use backtrack::machine::{Fsm, FsmError};
///
/// let config = MachineConfig::new("green")
///     .with_state("green", StateDescriptor::new().with_transition("next", "yellow"))
///     .with_state("yellow", StateDescriptor::new().with_transition("next", "red"))
///     .with_state("red", StateDescriptor::new().with_transition("next", "green"));
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("next").unwrap();
/// assert_eq!(fsm.state(), "yellow");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "green");
///
/// assert!(matches!(
///     fsm.trigger("bogus"),
///     Err(FsmError::InvalidTransition { .. })
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Arc<MachineConfig>,
    current: String,
    history: HistoryStack,
    redo_history: HistoryStack,
}

impl Fsm {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is not validated; an undeclared initial state or
    /// transition target only shows up when an operation reaches it.
    pub fn new(config: impl Into<Arc<MachineConfig>>) -> Self {
        Self::with_stacks(config.into(), HistoryStack::new(), HistoryStack::new())
    }

    /// Create a machine after checking the configuration's referential integrity.
    pub fn try_new(config: impl Into<Arc<MachineConfig>>) -> Result<Self, ConfigError> {
        let config = config.into();
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a machine that keeps at most `limit` undo entries.
    ///
    /// The limit is applied when a forward transition or `reset` records a
    /// state; the oldest entries are dropped then. `undo` and `redo` only move
    /// entries between the stacks and never drop any, so an undo/redo pair
    /// always restores both stacks.
    pub fn with_history_limit(config: impl Into<Arc<MachineConfig>>, limit: usize) -> Self {
        Self::with_stacks(config.into(), HistoryStack::bounded(limit), HistoryStack::new())
    }

    fn with_stacks(
        config: Arc<MachineConfig>,
        history: HistoryStack,
        redo_history: HistoryStack,
    ) -> Self {
        let current = config.initial.clone();
        Self {
            config,
            current,
            history,
            redo_history,
        }
    }

    /// Get the active state name (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Get the shared configuration (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Jump to any declared state, regardless of transition rules.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(target) {
            trace!("Rejected jump from '{}' to undeclared state '{}'", self.current, target);
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        debug!("Jumping from '{}' to '{}'", self.current, target);
        self.advance(target.to_string());
        Ok(())
    }

    /// Follow the current state's rule for `event`.
    ///
    /// The target is trusted as configured; it is not checked against the
    /// declared states.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self
            .config
            .target(&self.current, event)
            .map(str::to_owned)
        else {
            trace!("No transition for '{}' from '{}'", event, self.current);
            return Err(FsmError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        if !self.config.contains_state(&target) {
            warn!(
                "Event '{}' moves '{}' into undeclared state '{}'",
                event, self.current, target
            );
        }

        debug!("Event '{}': '{}' -> '{}'", event, self.current, target);
        self.advance(target);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// The state being left is pushed onto history, but unlike the forward
    /// transitions the redo history is left as it is.
    pub fn reset(&mut self) {
        debug!("Resetting from '{}' to '{}'", self.current, self.config.initial);
        let previous = std::mem::replace(&mut self.current, self.config.initial.clone());
        self.history.record(previous);
    }

    /// List state names in declaration order.
    ///
    /// With `None` every declared state is returned. With `Some(event)` only
    /// the states that have a rule for `event` are returned.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, descriptor)| event.is_none_or(|e| descriptor.handles(e)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Event names with a rule in the current state, in declaration order.
    ///
    /// Empty when the current state has no descriptor.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .descriptor(&self.current)
            .map(|d| d.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check whether `event` would be accepted by `trigger` (pure)
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config.target(&self.current, event).is_some()
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` without changing anything when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            trace!("Nothing to undo in '{}'", self.current);
            return false;
        };

        debug!("Undo: '{}' -> '{}'", self.current, previous);
        let left = std::mem::replace(&mut self.current, previous);
        self.redo_history.push(left);
        true
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` without changing anything when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_history.pop() else {
            trace!("Nothing to redo in '{}'", self.current);
            return false;
        };

        debug!("Redo: '{}' -> '{}'", self.current, next);
        let left = std::mem::replace(&mut self.current, next);
        self.history.push(left);
        true
    }

    /// Check whether `undo` would move (pure)
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Check whether `redo` would move (pure)
    pub fn can_redo(&self) -> bool {
        !self.redo_history.is_empty()
    }

    /// States available to `undo`, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.as_slice()
    }

    /// States available to `redo`, oldest first.
    pub fn redo_history(&self) -> &[String] {
        self.redo_history.as_slice()
    }

    /// Forget both histories. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(
            "Clearing {} undo and {} redo entries",
            self.history.len(),
            self.redo_history.len()
        );
        self.history.clear();
        self.redo_history.clear();
    }

    // Forward transition: record the state being left and invalidate redo.
    fn advance(&mut self, target: String) {
        let previous = std::mem::replace(&mut self.current, target);
        self.history.record(previous);
        self.redo_history.clear();
    }
}
