//! Poseidon-based commitment Merkle tree
//!
//! Fixed-depth binary tree over field-element commitments. The tree is built
//! once per proof-generation run from the full list of on-chain leaves,
//! queried for one inclusion path, and discarded; every level is kept in
//! memory because path derivation needs sibling access at each height.
//!
//! Tree structure:
//! - Leaves sit at level 0 in insertion order, padded to `2^depth` with
//!   [`DEFAULT_LEAF`]
//! - `levels[k + 1][i] = hash2(levels[k][2i], levels[k][2i + 1])`
//! - Root is the single node at level `depth`

use ark_bn254::Fr;
use ark_ff::Field;
use thiserror::Error;

use crate::poseidon::FieldHasher;

/// Depth the external spend circuit is compiled for (2^8 = 256 leaves).
pub const TREE_DEPTH: usize = 8;

/// Padding value for empty leaf slots.
///
/// Must stay bit-for-bit identical to the constant baked into the spend
/// circuit; a mismatch keeps every local invariant intact but makes every
/// proof fail downstream verification.
pub const DEFAULT_LEAF: Fr = Fr::ZERO;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Leaf count {0} exceeds tree capacity {1}")]
    InvalidDepth(usize, usize),
    #[error("Leaf not found among inserted leaves")]
    LeafNotFound,
    #[error("Leaf index {0} out of range for capacity {1}")]
    IndexOutOfRange(usize, usize),
}

/// A Merkle inclusion path for one leaf
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerklePath {
    /// Sibling hashes from leaf level up to, but excluding, the root
    pub siblings: Vec<Fr>,
    /// Parity per level: true when the current node is a left child
    /// (its index at that level is even)
    pub is_even: Vec<bool>,
    /// Root this path authenticates against
    pub root: Fr,
    /// Index of the proven leaf
    pub leaf_index: u64,
}

impl MerklePath {
    /// Recompute the root from `leaf` and compare against the recorded one.
    pub fn verify<H: FieldHasher>(&self, leaf: &Fr, hasher: &H) -> bool {
        if self.siblings.len() != self.is_even.len() {
            return false;
        }

        let mut current = *leaf;

        for (sibling, &is_even) in self.siblings.iter().zip(self.is_even.iter()) {
            current = if is_even {
                hasher.hash2(&current, sibling)
            } else {
                hasher.hash2(sibling, &current)
            };
        }

        current == self.root
    }
}

/// Fully materialized fixed-depth Merkle tree
///
/// Immutable once built; all operations are pure reads.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    depth: usize,
    /// Number of real (non-padding) leaves
    leaf_count: usize,
    /// `levels[0]` is the padded leaf row, `levels[depth]` holds the root
    levels: Vec<Vec<Fr>>,
}

impl MerkleTree {
    /// Build a tree from `leaves`, padding empty slots with [`DEFAULT_LEAF`].
    pub fn build<H: FieldHasher>(
        leaves: &[Fr],
        depth: usize,
        hasher: &H,
    ) -> Result<Self, MerkleError> {
        Self::build_with_padding(leaves, depth, DEFAULT_LEAF, hasher)
    }

    /// Build a tree with an explicit padding value.
    ///
    /// The padding value is part of the shared circuit configuration; this
    /// constructor exists so callers targeting a differently-compiled
    /// circuit can supply theirs.
    pub fn build_with_padding<H: FieldHasher>(
        leaves: &[Fr],
        depth: usize,
        padding: Fr,
        hasher: &H,
    ) -> Result<Self, MerkleError> {
        let capacity = 1usize << depth;
        if leaves.len() > capacity {
            return Err(MerkleError::InvalidDepth(leaves.len(), capacity));
        }

        let mut level = Vec::with_capacity(capacity);
        level.extend_from_slice(leaves);
        level.resize(capacity, padding);

        let mut levels = Vec::with_capacity(depth + 1);
        for _ in 0..depth {
            let next: Vec<Fr> = level
                .chunks(2)
                .map(|pair| hasher.hash2(&pair[0], &pair[1]))
                .collect();
            levels.push(level);
            level = next;
        }
        levels.push(level);

        Ok(Self {
            depth,
            leaf_count: leaves.len(),
            levels,
        })
    }

    /// Get the root
    pub fn root(&self) -> Fr {
        self.levels[self.depth][0]
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of leaf slots (`2^depth`)
    pub fn capacity(&self) -> usize {
        1 << self.depth
    }

    /// Number of real (non-padding) leaves
    pub fn len(&self) -> usize {
        self.leaf_count
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count == 0
    }

    /// Find the slot of the first real leaf equal to `leaf`.
    ///
    /// Padding slots are never searched. Absence is a hard error: without a
    /// valid index the caller cannot derive a path and must abort the run.
    pub fn index_of(&self, leaf: &Fr) -> Result<usize, MerkleError> {
        self.levels[0][..self.leaf_count]
            .iter()
            .position(|candidate| candidate == leaf)
            .ok_or(MerkleError::LeafNotFound)
    }

    /// Derive the inclusion path for the leaf at `index`.
    ///
    /// Siblings and parities are ordered leaf-to-root; the spend circuit
    /// consumes them in exactly this order.
    pub fn proof(&self, index: usize) -> Result<MerklePath, MerkleError> {
        if index >= self.capacity() {
            return Err(MerkleError::IndexOutOfRange(index, self.capacity()));
        }

        let mut siblings = Vec::with_capacity(self.depth);
        let mut is_even = Vec::with_capacity(self.depth);
        let mut i = index;

        for level in &self.levels[..self.depth] {
            siblings.push(level[i ^ 1]);
            is_even.push(i % 2 == 0);
            i /= 2;
        }

        Ok(MerklePath {
            siblings,
            is_even,
            root: self.root(),
            leaf_index: index as u64,
        })
    }
}
