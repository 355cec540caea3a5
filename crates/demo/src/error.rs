use thiserror::Error;

use cartkit_core::{DomainError, ItemId};
use cartkit_events::DispatchError;

#[derive(Debug, Error)]
pub enum DemoError {
    /// The input line is not a known command.
    #[error("{0}")]
    Parse(String),

    /// `add` named an id the catalog does not carry.
    #[error("no catalog entry with id {0}")]
    UnknownItem(ItemId),

    /// The cart rejected the action.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Observers could not be notified.
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

impl From<DispatchError<DomainError>> for DemoError {
    fn from(value: DispatchError<DomainError>) -> Self {
        match value {
            DispatchError::Rejected(err) => DemoError::Domain(err),
            other => DemoError::Dispatch(other.to_string()),
        }
    }
}
