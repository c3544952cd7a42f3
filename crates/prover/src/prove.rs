//! Deposit and spend flows
//!
//! The two entry points behind the CLI binaries. Each run is transient: the
//! tree is rebuilt from the caller-supplied leaf list, queried once, and
//! dropped with the rest of the intermediate state.

use ark_bn254::Fr;
use rand::Rng;
use tracing::{debug, info};

use cloak_core::{fr_from_str, CircomPoseidon, DepositNote, MerkleTree, TREE_DEPTH};

use crate::backend::ProofBackend;
use crate::encode::{encode_deposit, encode_proof};
use crate::error::ProverError;
use crate::witness::SpendWitness;

/// Caller-supplied inputs for one spend-proof run
#[derive(Clone, Debug)]
pub struct SpendRequest {
    pub nullifier: Fr,
    pub secret: Fr,
    /// Withdrawal recipient, bound into the proof as a public input
    pub recipient: Fr,
    /// All on-chain leaf commitments, in insertion order
    pub leaves: Vec<Fr>,
}

impl SpendRequest {
    /// Parse a request from the CLI's positional string arguments.
    pub fn from_args(
        nullifier: &str,
        secret: &str,
        recipient: &str,
        leaves: &[String],
    ) -> Result<Self, ProverError> {
        Ok(Self {
            nullifier: fr_from_str(nullifier)?,
            secret: fr_from_str(secret)?,
            recipient: fr_from_str(recipient)?,
            leaves: leaves
                .iter()
                .map(|leaf| fr_from_str(leaf))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Sample a fresh deposit note and ABI-encode its
/// `(commitment, nullifier, secret)` triple.
pub fn generate_deposit<R: Rng + ?Sized>(rng: &mut R) -> Vec<u8> {
    let note = DepositNote::random(rng);
    encode_deposit(&note.commitment(), &note.nullifier, &note.secret)
}

/// Run the full spend flow and return the ABI-encoded
/// `(proof, public_inputs)` blob.
///
/// Rebuilds the commitment tree from `request.leaves`, locates the note's
/// commitment, derives its inclusion path, and hands the assembled witness
/// to `backend`. A commitment absent from the leaf set aborts the run; there
/// is no fallback index.
pub fn generate_spend_proof<B: ProofBackend>(
    request: &SpendRequest,
    backend: &B,
) -> Result<Vec<u8>, ProverError> {
    let note = DepositNote::new(request.nullifier, request.secret);
    let commitment = note.commitment();

    let hasher = CircomPoseidon;
    let tree = MerkleTree::build(&request.leaves, TREE_DEPTH, &hasher)?;
    let index = tree.index_of(&commitment)?;
    let path = tree.proof(index)?;
    debug!(leaf_index = index, leaves = tree.len(), "derived inclusion path");

    let witness = SpendWitness::assemble(&note, request.recipient, &path);
    let artifacts = backend.prove(&witness)?;
    info!(
        proof_bytes = artifacts.proof.len(),
        public_inputs = artifacts.public_inputs.len(),
        "spend proof generated"
    );

    Ok(encode_proof(&artifacts.proof, &artifacts.public_inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, ProofArtifacts};
    use cloak_core::MerkleError;

    /// Backend that echoes the witness's public inputs.
    struct StubBackend;

    impl ProofBackend for StubBackend {
        fn prove(&self, witness: &SpendWitness) -> Result<ProofArtifacts, BackendError> {
            Ok(ProofArtifacts {
                proof: vec![0xaa; 8],
                public_inputs: vec![witness.root, witness.nullifier_hash, witness.recipient],
            })
        }
    }

    fn sample_request() -> SpendRequest {
        let note = DepositNote::new(Fr::from(11u64), Fr::from(22u64));
        SpendRequest {
            nullifier: note.nullifier,
            secret: note.secret,
            recipient: Fr::from(33u64),
            leaves: vec![Fr::from(1u64), note.commitment(), Fr::from(2u64)],
        }
    }

    #[test]
    fn test_spend_flow_produces_blob() {
        let blob = generate_spend_proof(&sample_request(), &StubBackend).unwrap();

        // Two head words plus both tails; exact layout is covered in encode.
        assert!(blob.len() > 64);
    }

    #[test]
    fn test_unknown_commitment_aborts() {
        let mut request = sample_request();
        request.leaves.remove(1);

        match generate_spend_proof(&request, &StubBackend) {
            Err(ProverError::Merkle(MerkleError::LeafNotFound)) => {}
            other => panic!("expected LeafNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_backend_error_propagates() {
        struct FailingBackend;
        impl ProofBackend for FailingBackend {
            fn prove(&self, _witness: &SpendWitness) -> Result<ProofArtifacts, BackendError> {
                Err(BackendError::NotConfigured)
            }
        }

        assert!(matches!(
            generate_spend_proof(&sample_request(), &FailingBackend),
            Err(ProverError::Backend(BackendError::NotConfigured))
        ));
    }

    #[test]
    fn test_from_args_rejects_bad_field_element() {
        let leaves = vec!["0x01".to_string(), "nope".to_string()];

        assert!(matches!(
            SpendRequest::from_args("0x01", "0x02", "0x03", &leaves),
            Err(ProverError::Field(_))
        ));
    }

    #[test]
    fn test_generate_deposit_blob_is_96_bytes() {
        let blob = generate_deposit(&mut rand::rngs::OsRng);
        assert_eq!(blob.len(), 96);
    }
}
