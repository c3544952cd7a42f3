//! ABI encoding of the tool outputs
//!
//! Both binaries print a single ABI blob for the calling contract tooling to
//! decode: the deposit side a `(bytes32, bytes32, bytes32)` triple, the
//! spend side a `(bytes, bytes32[])` pair. Encoding rules are delegated to
//! `alloy-sol-types`; field elements enter as their 32 big-endian bytes.

use alloy_primitives::{Bytes, FixedBytes};
use alloy_sol_types::SolValue;
use ark_bn254::Fr;

use cloak_core::field::fr_to_bytes_be;

fn to_bytes32(value: &Fr) -> FixedBytes<32> {
    FixedBytes::new(fr_to_bytes_be(value))
}

/// ABI-encode `(bytes32 commitment, bytes32 nullifier, bytes32 secret)`.
pub fn encode_deposit(commitment: &Fr, nullifier: &Fr, secret: &Fr) -> Vec<u8> {
    (to_bytes32(commitment), to_bytes32(nullifier), to_bytes32(secret)).abi_encode_params()
}

/// ABI-encode `(bytes proof, bytes32[] public_inputs)`.
pub fn encode_proof(proof: &[u8], public_inputs: &[Fr]) -> Vec<u8> {
    let inputs: Vec<FixedBytes<32>> = public_inputs.iter().map(to_bytes32).collect();
    (Bytes::copy_from_slice(proof), inputs).abi_encode_params()
}
