//! `aesvec`: writes AES-128 single-block encryption test vectors.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use aesvec_cli::corpus::builtin_vectors;
use aesvec_cli::encode::to_hex;
use aesvec_cli::export::export_records;

/// AES-128 test-vector generator.
///
/// Encrypts the built-in single-block corpus and writes plaintext, key,
/// and ciphertext as parallel hex and bit-string files for testbench
/// consumption.
#[derive(Parser)]
#[command(name = "aesvec", version, about = "AES-128 test vector generator")]
struct Cli {
    /// Directory receiving the six vector files (created if absent).
    #[arg(long, value_name = "DIR", default_value = "test_vec")]
    out_dir: PathBuf,
    /// Suppress the per-vector console report.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let records = builtin_vectors();

    if !cli.quiet {
        println!("AES-128 Test Vector Generator");
        println!("=============================");
        println!();
    }

    let ciphertexts = export_records(&cli.out_dir, &records)?;

    if !cli.quiet {
        for (index, (record, ciphertext)) in records.iter().zip(&ciphertexts).enumerate() {
            if let Some(label) = record.label {
                println!("Test {}: {label}", index + 1);
                println!("Plaintext:  {}", to_hex(&record.plaintext));
                println!("Key:        {}", to_hex(&record.key.0));
                println!("Ciphertext: {}", to_hex(ciphertext));
                println!();
            }
        }
        println!("Generated {} test vectors", records.len());
        println!("Test vectors written to {}", cli.out_dir.display());
    }

    Ok(())
}
