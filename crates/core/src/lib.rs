//! cloak - deposit-note core
//!
//! Cryptographic building blocks for the cloak mixer client tooling.
//!
//! # Modules
//! - `field`: canonical string/byte codec for BN254 field elements
//! - `poseidon`: Poseidon hashing seam shared with the spend circuit
//! - `merkle`: fixed-depth commitment Merkle tree and inclusion proofs
//! - `note`: deposit notes (nullifier, secret) and their commitments

pub mod field;
pub mod merkle;
pub mod note;
pub mod poseidon;

// Re-export common types
pub use field::{fr_from_str, fr_to_hex, FieldError};
pub use merkle::{MerkleError, MerklePath, MerkleTree, DEFAULT_LEAF, TREE_DEPTH};
pub use note::DepositNote;
pub use poseidon::{poseidon_hash1, poseidon_hash2, CircomPoseidon, FieldHasher};
