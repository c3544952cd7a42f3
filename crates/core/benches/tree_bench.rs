//! Benchmarks for hashing and tree construction

use ark_bn254::Fr;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cloak_core::{poseidon_hash2, CircomPoseidon, MerkleTree, TREE_DEPTH};

fn bench_poseidon_hash2(c: &mut Criterion) {
    let a = Fr::from(1u64);
    let b = Fr::from(2u64);

    c.bench_function("poseidon_hash2", |bench| {
        bench.iter(|| black_box(poseidon_hash2(black_box(&a), black_box(&b))))
    });
}

fn bench_tree_build(c: &mut Criterion) {
    let hasher = CircomPoseidon;
    let leaves: Vec<Fr> = (0..64u64).map(Fr::from).collect();

    c.bench_function("tree_build_depth_8", |bench| {
        bench.iter(|| {
            let tree = MerkleTree::build(black_box(&leaves), TREE_DEPTH, &hasher).unwrap();
            black_box(tree.root())
        })
    });
}

fn bench_proof_derivation(c: &mut Criterion) {
    let hasher = CircomPoseidon;
    let leaves: Vec<Fr> = (0..64u64).map(Fr::from).collect();
    let tree = MerkleTree::build(&leaves, TREE_DEPTH, &hasher).unwrap();

    c.bench_function("proof_derivation", |bench| {
        bench.iter(|| black_box(tree.proof(black_box(37)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_poseidon_hash2,
    bench_tree_build,
    bench_proof_derivation
);
criterion_main!(benches);
