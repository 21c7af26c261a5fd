//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from identifiers.
///
/// States and events are written as bare identifiers and stored as their
/// names. The result is not validated, matching
/// [`Fsm::new`](crate::machine::Fsm::new).
///
/// # Example
///
/// ```
/// use backtrack::machine_config;
///
/// let config = machine_config! {
///     initial: idle,
///     states: {
///         idle => { start => running },
///         running => { pause => paused, finish => done },
///         paused => { resume => running },
///         done => {},
///     }
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.target("running", "finish"), Some("done"));
/// assert!(config.validate().is_ok());
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => {
                    $( $event:ident => $target:ident ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::core::MachineConfig::new(stringify!($initial))
            $(
                .with_state(
                    stringify!($state),
                    $crate::core::StateDescriptor::new()
                        $( .with_transition(stringify!($event), stringify!($target)) )*,
                )
            )*
    };
}

#[cfg(test)]
mod tests {
    use crate::core::MachineConfig;

    #[test]
    fn machine_config_macro_declares_states() {
        let config = machine_config! {
            initial: green,
            states: {
                green => { next => yellow },
                yellow => { next => red },
                red => { next => green },
            }
        };

        let names: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["green", "yellow", "red"]);
        assert_eq!(config.target("red", "next"), Some("green"));
    }

    #[test]
    fn machine_config_supports_empty_states() {
        let config = machine_config! {
            initial: off,
            states: {
                off => {},
            },
        };

        assert_eq!(config, MachineConfig::new("off").with_state("off", Default::default()));
    }

    #[test]
    fn machine_config_is_not_validated() {
        let config = machine_config! {
            initial: start,
            states: {
                start => { go => missing },
            }
        };

        assert!(config.validate().is_err());
    }
}
