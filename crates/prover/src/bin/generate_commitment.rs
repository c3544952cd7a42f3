//! Emit a fresh deposit as an ABI-encoded `(commitment, nullifier, secret)`
//! triple on stdout.
//!
//! The commitment goes on-chain; the nullifier and secret are the caller's
//! note and must be kept private until withdrawal.

use std::io::Write;

use anyhow::Result;
use rand::rngs::OsRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let blob = cloak_prover::generate_deposit(&mut OsRng);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "0x{}", hex::encode(blob))?;
    stdout.flush()?;

    Ok(())
}
