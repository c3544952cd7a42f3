//! Spend witness assembly
//!
//! The witness is the full set of values satisfying the spend circuit's
//! constraints. It is serialized to JSON with canonical hex field elements
//! and handed verbatim to the proving backend; field order follows the
//! circuit's input declaration, public inputs first.

use ark_bn254::Fr;
use serde::Serialize;

use cloak_core::field;
use cloak_core::{DepositNote, MerklePath};

/// Input object for the external spend prover
#[derive(Clone, Debug, Serialize)]
pub struct SpendWitness {
    // Public inputs
    #[serde(serialize_with = "field::serialize_hex")]
    pub root: Fr,
    #[serde(serialize_with = "field::serialize_hex")]
    pub nullifier_hash: Fr,
    #[serde(serialize_with = "field::serialize_hex")]
    pub recipient: Fr,

    // Private inputs
    #[serde(serialize_with = "field::serialize_hex")]
    pub nullifier: Fr,
    #[serde(serialize_with = "field::serialize_hex")]
    pub secret: Fr,
    /// Sibling hashes, leaf-to-root
    #[serde(serialize_with = "field::serialize_hex_seq")]
    pub merkle_proof: Vec<Fr>,
    /// Per-level parity, same order as `merkle_proof`
    pub is_even: Vec<bool>,
}

impl SpendWitness {
    /// Wire a note and its inclusion path into the circuit input object.
    ///
    /// The path's sibling and parity ordering is passed through untouched;
    /// the circuit consumes both leaf-to-root.
    pub fn assemble(note: &DepositNote, recipient: Fr, path: &MerklePath) -> Self {
        Self {
            root: path.root,
            nullifier_hash: note.nullifier_hash(),
            recipient,
            nullifier: note.nullifier,
            secret: note.secret,
            merkle_proof: path.siblings.clone(),
            is_even: path.is_even.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloak_core::{CircomPoseidon, MerkleTree};

    fn sample_witness() -> SpendWitness {
        let hasher = CircomPoseidon;
        let note = DepositNote::new(Fr::from(1u64), Fr::from(2u64));
        let leaves = vec![Fr::from(10u64), note.commitment(), Fr::from(30u64)];
        let tree = MerkleTree::build(&leaves, 3, &hasher).unwrap();
        let path = tree.proof(1).unwrap();

        SpendWitness::assemble(&note, Fr::from(7u64), &path)
    }

    #[test]
    fn test_assemble_carries_path_through() {
        let witness = sample_witness();

        assert_eq!(witness.merkle_proof.len(), 3);
        assert_eq!(witness.is_even.len(), 3);
        // index 1 is a right child at level 0, then even at both upper levels
        assert_eq!(witness.is_even, vec![false, true, true]);
    }

    #[test]
    fn test_json_wire_form() {
        let witness = sample_witness();
        let json = serde_json::to_value(&witness).unwrap();

        for key in [
            "root",
            "nullifier_hash",
            "recipient",
            "nullifier",
            "secret",
            "merkle_proof",
            "is_even",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }

        let root = json["root"].as_str().unwrap();
        assert!(root.starts_with("0x") && root.len() == 66);
        assert!(json["is_even"][0].is_boolean());
        assert_eq!(
            json["merkle_proof"].as_array().unwrap().len(),
            json["is_even"].as_array().unwrap().len()
        );
    }
}
