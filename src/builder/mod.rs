//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for creating machine
//! configurations without writing JSON or nested descriptor calls.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;

use crate::core::MachineConfig;

/// Create a cyclic configuration where `event` moves each state to the next
/// and the last state back to the first.
///
/// The first state is the initial one. Returns [`BuildError::NoStates`] when
/// `states` is empty.
///
/// # Example
///
/// ```
/// use backtrack::builder::cycle;
///
/// let config = cycle(["green", "yellow", "red"], "next").unwrap();
///
/// assert_eq!(config.initial, "green");
/// assert_eq!(config.target("red", "next"), Some("green"));
/// ```
pub fn cycle<I, S>(states: I, event: &str) -> Result<MachineConfig, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = states.into_iter().map(Into::into).collect();
    let first = names.first().ok_or(BuildError::NoStates)?;

    names
        .iter()
        .zip(names.iter().cycle().skip(1))
        .fold(ConfigBuilder::new().initial(first.as_str()), |builder, (from, to)| {
            builder.transition(from.as_str(), event, to.as_str())
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_links_states_in_order() {
        let config = cycle(["a", "b", "c"], "step").unwrap();

        assert_eq!(config.initial, "a");
        assert_eq!(config.target("a", "step"), Some("b"));
        assert_eq!(config.target("b", "step"), Some("c"));
        assert_eq!(config.target("c", "step"), Some("a"));
    }

    #[test]
    fn cycle_of_one_loops_on_itself() {
        let config = cycle(["solo"], "again").unwrap();
        assert_eq!(config.target("solo", "again"), Some("solo"));
    }

    #[test]
    fn cycle_requires_states() {
        let result = cycle(Vec::<String>::new(), "next");
        assert!(matches!(result, Err(BuildError::NoStates)));
    }
}
