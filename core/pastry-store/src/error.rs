//! Error types for store operations.

use pastry_types::PastryId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Domain failures raised by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store holds no records.
    #[error("All out of pastries. Maybe add something?")]
    Empty,

    /// No record carries the requested id.
    #[error("Pastry with id: {0} not found.")]
    NotFound(PastryId),

    /// Another record already uses this name once normalized.
    #[error("{0} already exists on the menu.")]
    Conflict(String),
}

impl StoreError {
    /// HTTP-class status code declared for this failure.
    pub const fn code(&self) -> u16 {
        match self {
            Self::Empty | Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
        }
    }
}
