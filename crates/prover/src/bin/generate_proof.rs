//! Generate a spend proof and print it as an ABI-encoded
//! `(proof, public_inputs)` blob on stdout.
//!
//! Usage: `generate-proof <nullifier> <secret> <recipient> <leaf>...`
//!
//! Field elements are `0x` hex or decimal strings; leaves are the full
//! on-chain commitment list in insertion order. The external prover command
//! is taken from the `CLOAK_PROVER` environment variable.

use std::io::Write;

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use cloak_prover::{generate_spend_proof, ExternalProver, SpendRequest};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("usage: generate-proof <nullifier> <secret> <recipient> <leaf>...");
    }

    let request = SpendRequest::from_args(&args[0], &args[1], &args[2], &args[3..])?;
    let backend = ExternalProver::from_env()?;
    let blob = generate_spend_proof(&request, &backend)?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "0x{}", hex::encode(blob))?;
    stdout.flush()?;

    Ok(())
}
