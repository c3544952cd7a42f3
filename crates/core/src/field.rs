//! Canonical codec for BN254 scalar field elements
//!
//! Field elements cross two boundaries in this workspace: CLI arguments and
//! the JSON witness handed to the external prover. Both use the same
//! canonical form: 32 big-endian bytes, rendered as a `0x`-prefixed,
//! 64-digit lowercase hex string. Parsing accepts that form plus plain
//! decimal strings.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use serde::{de, Deserialize, Deserializer, Serializer};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid field element string: {0:?}")]
    Parse(String),
    #[error("Value is not a canonical field element")]
    NonCanonical,
}

/// Serialize a field element to 32 big-endian bytes.
pub fn fr_to_bytes_be(value: &Fr) -> [u8; 32] {
    let bytes = value.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Parse a field element from 32 big-endian bytes.
///
/// Rejects encodings at or above the field modulus, so that
/// `fr_to_bytes_be` and `fr_from_bytes_be` round-trip exactly.
pub fn fr_from_bytes_be(bytes: &[u8; 32]) -> Result<Fr, FieldError> {
    let value = Fr::from_be_bytes_mod_order(bytes);
    if fr_to_bytes_be(&value) != *bytes {
        return Err(FieldError::NonCanonical);
    }
    Ok(value)
}

/// Render a field element in its canonical hex form.
pub fn fr_to_hex(value: &Fr) -> String {
    format!("0x{}", hex::encode(fr_to_bytes_be(value)))
}

/// Parse a field element from a `0x` hex string or a decimal string.
pub fn fr_from_str(input: &str) -> Result<Fr, FieldError> {
    let input = input.trim();

    if let Some(digits) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        if digits.is_empty() || digits.len() > 64 {
            return Err(FieldError::Parse(input.to_string()));
        }
        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| FieldError::Parse(input.to_string()))?;
        return fr_from_bytes_be(&bytes);
    }

    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::Parse(input.to_string()));
    }
    input
        .parse::<Fr>()
        .map_err(|_| FieldError::Parse(input.to_string()))
}

/// serde adapter: emit a field element as its canonical hex string.
pub fn serialize_hex<S>(value: &Fr, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&fr_to_hex(value))
}

/// serde adapter: emit a sequence of field elements as hex strings.
pub fn serialize_hex_seq<S>(values: &[Fr], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().map(fr_to_hex))
}

/// serde adapter: parse a field element from a hex or decimal string.
pub fn deserialize_hex<'de, D>(deserializer: D) -> Result<Fr, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    fr_from_str(&s).map_err(de::Error::custom)
}

/// serde adapter: parse a sequence of field elements.
pub fn deserialize_hex_seq<'de, D>(deserializer: D) -> Result<Vec<Fr>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings = Vec::<String>::deserialize(deserializer)?;
    strings
        .iter()
        .map(|s| fr_from_str(s).map_err(de::Error::custom))
        .collect()
}
