//! cloak - spend-proof tooling
//!
//! Client-side orchestration for the cloak mixer: assembles the spend
//! witness from a deposit note and the on-chain leaf set, hands it to an
//! external proving backend, and ABI-encodes the result for the on-chain
//! verifier.
//!
//! # Modules
//! - `witness`: the circuit input object and its JSON wire form
//! - `backend`: the proving-backend seam and the out-of-process bridge
//! - `prove`: the end-to-end deposit and spend flows
//! - `encode`: ABI encoding of the two output bundles
//! - `error`: unified error type for the flow

pub mod backend;
pub mod encode;
pub mod error;
pub mod prove;
pub mod witness;

// Re-export common types
pub use backend::{ExternalProver, ProofArtifacts, ProofBackend};
pub use error::ProverError;
pub use prove::{generate_deposit, generate_spend_proof, SpendRequest};
pub use witness::SpendWitness;
