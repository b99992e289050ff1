//! Observer registry errors.

use crate::engine::registry::ObserverId;
use thiserror::Error;

/// Errors that can occur when managing observers
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Observer registry is full (capacity {capacity})")]
    RegistryFull { capacity: usize },

    #[error("Observer {0} is not registered")]
    UnknownObserver(ObserverId),
}
