//! Build errors for the configuration builder.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Add at least one state or transition")]
    NoStates,

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}
