//! Build errors for the machine builder.

use crate::engine::ObserverError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("{requested} observers requested but the registry holds {capacity}")]
    TooManyObservers { capacity: usize, requested: usize },

    #[error("Machine configuration has {} problems", .0.len())]
    Invalid(Vec<BuildError>),

    #[error(transparent)]
    Observer(#[from] ObserverError),
}
