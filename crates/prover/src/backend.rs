//! Proving-backend seam
//!
//! Proof generation itself lives outside this workspace: the circuit and its
//! prover are compiled separately, and this crate only talks to them through
//! [`ProofBackend`]. The one shipped implementation, [`ExternalProver`],
//! bridges to an out-of-process prover binary over stdin/stdout.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use ark_bn254::Fr;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use cloak_core::field;

use crate::witness::SpendWitness;

/// Environment variable naming the external prover command.
pub const PROVER_ENV: &str = "CLOAK_PROVER";

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("No prover command configured (set the {} environment variable)", PROVER_ENV)]
    NotConfigured,
    #[error("Failed to run prover: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prover exited with {0}")]
    ProverFailed(ExitStatus),
    #[error("Invalid witness or response JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed prover response: {0}")]
    MalformedResponse(String),
}

/// A proof plus the public inputs it was generated against
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofArtifacts {
    pub proof: Vec<u8>,
    pub public_inputs: Vec<Fr>,
}

/// Interface to an external proving system.
///
/// Consumes the assembled witness, produces the proof and the public inputs
/// in the order the verifier expects them.
pub trait ProofBackend {
    fn prove(&self, witness: &SpendWitness) -> Result<ProofArtifacts, BackendError>;
}

/// JSON response expected on the prover's stdout.
#[derive(Debug, Deserialize)]
struct ProverResponse {
    proof: String,
    #[serde(deserialize_with = "field::deserialize_hex_seq")]
    public_inputs: Vec<Fr>,
}

/// Out-of-process proving backend
///
/// Spawns the configured command, writes the witness JSON to its stdin, and
/// reads a `{"proof": "0x…", "public_inputs": ["0x…", …]}` response from
/// its stdout. The child's stderr is discarded for the duration of the
/// call, so the prover's own diagnostics never end up interleaved with the
/// ABI blob this tool prints.
#[derive(Clone, Debug)]
pub struct ExternalProver {
    program: String,
    args: Vec<String>,
}

impl ExternalProver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Read the prover command line from [`PROVER_ENV`].
    ///
    /// The value is split on whitespace; the first token is the program,
    /// the rest are fixed arguments.
    pub fn from_env() -> Result<Self, BackendError> {
        let raw = std::env::var(PROVER_ENV).map_err(|_| BackendError::NotConfigured)?;
        let mut tokens = raw.split_whitespace().map(str::to_string);
        let program = tokens.next().ok_or(BackendError::NotConfigured)?;

        Ok(Self {
            program,
            args: tokens.collect(),
        })
    }
}

impl ProofBackend for ExternalProver {
    fn prove(&self, witness: &SpendWitness) -> Result<ProofArtifacts, BackendError> {
        let payload = serde_json::to_vec(witness)?;

        debug!(program = %self.program, "invoking external prover");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&payload)?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(BackendError::ProverFailed(output.status));
        }

        let response: ProverResponse = serde_json::from_slice(&output.stdout)?;
        let proof = decode_proof_hex(&response.proof)?;
        debug!(
            proof_bytes = proof.len(),
            public_inputs = response.public_inputs.len(),
            "prover responded"
        );

        Ok(ProofArtifacts {
            proof,
            public_inputs: response.public_inputs,
        })
    }
}

fn decode_proof_hex(input: &str) -> Result<Vec<u8>, BackendError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or_else(|| BackendError::MalformedResponse(format!("proof not 0x-prefixed: {input:?}")))?;
    hex::decode(digits).map_err(|e| BackendError::MalformedResponse(format!("proof hex: {e}")))
}
