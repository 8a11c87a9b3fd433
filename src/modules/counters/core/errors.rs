use thiserror::Error;

/// Failure outcomes of the counter store. No other failure modes exist.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Conflict(String),
}
