//! Poseidon hashing seam
//!
//! All commitments, nullifier hashes, and Merkle nodes in this workspace are
//! Poseidon hashes over the BN254 scalar field, computed with the
//! circom-compatible parameter set from the `light-poseidon` crate. The
//! parameters must stay identical to the ones compiled into the external
//! spend circuit, so the permutation itself is never reimplemented here.

use ark_bn254::Fr;
use light_poseidon::{Poseidon, PoseidonHasher};

/// Two-to-one hash over field elements.
///
/// The hash is order-sensitive: `hash2(a, b)` and `hash2(b, a)` differ in
/// general, and the Merkle tree relies on the operand order being preserved
/// all the way into the circuit.
pub trait FieldHasher {
    fn hash2(&self, a: &Fr, b: &Fr) -> Fr;
}

/// Circom-parameter Poseidon instantiation of [`FieldHasher`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CircomPoseidon;

impl FieldHasher for CircomPoseidon {
    fn hash2(&self, a: &Fr, b: &Fr) -> Fr {
        poseidon_hash2(a, b)
    }
}

/// Hash a single field element.
pub fn poseidon_hash1(x: &Fr) -> Fr {
    let mut hasher = Poseidon::<Fr>::new_circom(1).expect("width 1 is a supported arity");
    hasher.hash(&[*x]).expect("one input matches the arity")
}

/// Hash two field elements.
pub fn poseidon_hash2(a: &Fr, b: &Fr) -> Fr {
    let mut hasher = Poseidon::<Fr>::new_circom(2).expect("width 2 is a supported arity");
    hasher.hash(&[*a, *b]).expect("two inputs match the arity")
}
