//! Error types for outreach-metrics
//!
//! Scoring and date derivation are total and never fail. Errors only arise
//! at the record boundary: validation, store mutations and config loading.

use thiserror::Error;

use crate::experiment::ExperimentStatus;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// outreach-metrics error types
#[derive(Error, Debug)]
pub enum Error {
    /// No experiment with the given ID exists in the store
    #[error("Experiment not found: {0}")]
    NotFound(String),

    /// An experiment with the given ID is already stored
    #[error("Duplicate experiment ID: {0}\nIDs must be unique within a store")]
    DuplicateId(String),

    /// Status change out of a terminal state (or into an unknown one)
    #[error("Invalid status transition: {from:?} -> {to:?}\nCompleted and failed experiments are final")]
    InvalidTransition {
        /// Current status
        from: ExperimentStatus,
        /// Requested status
        to: ExperimentStatus,
    },

    /// Record failed validation at the store boundary
    #[error("Invalid experiment record: {0}")]
    InvalidRecord(String),

    /// Scoring configuration failed validation
    #[error("Invalid scoring config: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
