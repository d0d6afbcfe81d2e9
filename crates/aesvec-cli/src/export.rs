//! Writes the corpus to six parallel text files.
//!
//! Line `i` of every file derives from record `i`, so a testbench can
//! read the files in lockstep. Pre-existing files are truncated, not
//! appended; a failed run leaves whatever lines were already flushed.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use aes_core::{encrypt_block, Block};
use anyhow::{Context, Result};

use crate::corpus::TestVectorRecord;
use crate::encode::{to_bits, to_hex};

/// Bit-string output files, in (plaintext, key, ciphertext) order.
pub const BIT_FILES: [&str; 3] = ["aes_enc_data_i.txt", "aes_enc_key_i.txt", "aes_enc_res_o.txt"];

/// Hex output files, in (plaintext, key, ciphertext) order.
pub const HEX_FILES: [&str; 3] = [
    "aes_enc_data_i_hex.txt",
    "aes_enc_key_i_hex.txt",
    "aes_enc_res_o_hex.txt",
];

/// Buffered writers for the six parallel output channels.
pub struct VectorWriter {
    // Same order as BIT_FILES then HEX_FILES.
    bits: [BufWriter<File>; 3],
    hex: [BufWriter<File>; 3],
}

impl VectorWriter {
    /// Creates `out_dir` if absent and opens the six files, truncating
    /// any previous content.
    pub fn create(out_dir: &Path) -> Result<Self> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("create directory {}", out_dir.display()))?;
        let mut open = |name: &str| -> Result<BufWriter<File>> {
            let path = out_dir.join(name);
            let file =
                File::create(&path).with_context(|| format!("create {}", path.display()))?;
            Ok(BufWriter::new(file))
        };
        Ok(Self {
            bits: [open(BIT_FILES[0])?, open(BIT_FILES[1])?, open(BIT_FILES[2])?],
            hex: [open(HEX_FILES[0])?, open(HEX_FILES[1])?, open(HEX_FILES[2])?],
        })
    }

    /// Appends one newline-terminated line per channel for a record and
    /// its ciphertext.
    pub fn write_record(&mut self, record: &TestVectorRecord, ciphertext: &Block) -> Result<()> {
        let values = [&record.plaintext, &record.key.0, ciphertext];
        for (writer, value) in self.bits.iter_mut().zip(values) {
            writeln!(writer, "{}", to_bits(value)).context("write bit line")?;
        }
        for (writer, value) in self.hex.iter_mut().zip(values) {
            writeln!(writer, "{}", to_hex(value)).context("write hex line")?;
        }
        Ok(())
    }

    /// Flushes all six channels.
    pub fn finish(mut self) -> Result<()> {
        for (writer, name) in self.bits.iter_mut().zip(BIT_FILES) {
            writer.flush().with_context(|| format!("flush {name}"))?;
        }
        for (writer, name) in self.hex.iter_mut().zip(HEX_FILES) {
            writer.flush().with_context(|| format!("flush {name}"))?;
        }
        Ok(())
    }
}

/// Encrypts every record and writes it to the six channels in input
/// order. Returns the ciphertexts, index-aligned with `records`, for the
/// caller's report.
pub fn export_records(out_dir: &Path, records: &[TestVectorRecord]) -> Result<Vec<Block>> {
    let mut writer = VectorWriter::create(out_dir)?;
    let mut ciphertexts = Vec::with_capacity(records.len());
    for record in records {
        let ciphertext = encrypt_block(&record.key, &record.plaintext);
        writer.write_record(record, &ciphertext)?;
        ciphertexts.push(ciphertext);
    }
    writer.finish()?;
    Ok(ciphertexts)
}
