//! Unified error type for the proof-generation flow

use thiserror::Error;

use cloak_core::{FieldError, MerkleError};

use crate::backend::BackendError;

/// Top-level error for the deposit and spend flows.
///
/// Every variant reflects a deterministic caller or environment problem;
/// nothing here is retryable, and no partial output accompanies an error.
#[derive(Error, Debug)]
pub enum ProverError {
    #[error("Merkle tree error: {0}")]
    Merkle(#[from] MerkleError),

    #[error("Field codec error: {0}")]
    Field(#[from] FieldError),

    #[error("Proof backend error: {0}")]
    Backend(#[from] BackendError),
}
