//! Deposit notes
//!
//! A note is the pair of secrets behind one deposit: a nullifier and a
//! secret, both uniformly sampled field elements. The published commitment
//! binds the pair without revealing either; the nullifier hash is published
//! on spend to prevent double-spending without linking back to the
//! commitment.

use ark_bn254::Fr;
use ark_std::rand::Rng;
use ark_std::UniformRand;

use crate::poseidon::{poseidon_hash1, poseidon_hash2};

/// The spendable secrets behind one deposit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositNote {
    pub nullifier: Fr,
    pub secret: Fr,
}

impl DepositNote {
    /// Sample a fresh note.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            nullifier: Fr::rand(rng),
            secret: Fr::rand(rng),
        }
    }

    /// Reconstruct a note from its parts.
    pub fn new(nullifier: Fr, secret: Fr) -> Self {
        Self { nullifier, secret }
    }

    /// The leaf commitment published on deposit: `H2(nullifier, secret)`.
    pub fn commitment(&self) -> Fr {
        poseidon_hash2(&self.nullifier, &self.secret)
    }

    /// The hash published on spend: `H1(nullifier)`.
    pub fn nullifier_hash(&self) -> Fr {
        poseidon_hash1(&self.nullifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn test_commitment_deterministic() {
        let note = DepositNote::new(Fr::from(1u64), Fr::from(2u64));

        assert_eq!(note.commitment(), note.commitment());
        assert_eq!(
            note.commitment(),
            poseidon_hash2(&Fr::from(1u64), &Fr::from(2u64))
        );
    }

    #[test]
    fn test_random_notes_are_distinct() {
        let a = DepositNote::random(&mut OsRng);
        let b = DepositNote::random(&mut OsRng);

        assert_ne!(a, b);
        assert_ne!(a.commitment(), b.commitment());
    }

    #[test]
    fn test_nullifier_hash_ignores_secret() {
        let nullifier = Fr::from(5u64);
        let a = DepositNote::new(nullifier, Fr::from(1u64));
        let b = DepositNote::new(nullifier, Fr::from(2u64));

        assert_eq!(a.nullifier_hash(), b.nullifier_hash());
        assert_ne!(a.commitment(), b.commitment());
    }

    #[test]
    fn test_nullifier_hash_differs_from_commitment() {
        let note = DepositNote::random(&mut OsRng);

        assert_ne!(note.nullifier_hash(), note.commitment());
    }
}
