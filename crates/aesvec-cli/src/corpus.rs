//! The built-in test-vector corpus.

use aes_core::{Aes128Key, Block};

/// One immutable test-vector input: a plaintext block, a key, and an
/// optional human-readable label for the progress report.
pub struct TestVectorRecord {
    /// 16-byte plaintext block.
    pub plaintext: Block,
    /// AES-128 key.
    pub key: Aes128Key,
    /// Label shown in the console report; unlabeled records are exported
    /// silently.
    pub label: Option<&'static str>,
}

impl TestVectorRecord {
    fn new(plaintext: Block, key: [u8; 16], label: &'static str) -> Self {
        Self {
            plaintext,
            key: Aes128Key::from(key),
            label: Some(label),
        }
    }
}

/// The five canonical records, in export order: the two NIST/FIPS
/// vectors, the all-zero and all-one degenerate inputs, and an ASCII
/// pair whose ciphertext is whatever this cipher computes (it is not a
/// published known-answer value).
pub fn builtin_vectors() -> Vec<TestVectorRecord> {
    vec![
        TestVectorRecord::new(
            [
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc,
                0xdd, 0xee, 0xff,
            ],
            [
                0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
                0x0d, 0x0e, 0x0f,
            ],
            "NIST Test Vector 1",
        ),
        TestVectorRecord::new(
            [
                0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0,
                0x37, 0x07, 0x34,
            ],
            [
                0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09,
                0xcf, 0x4f, 0x3c,
            ],
            "NIST Test Vector 2",
        ),
        TestVectorRecord::new([0x00; 16], [0x00; 16], "All Zeros"),
        TestVectorRecord::new([0xff; 16], [0xff; 16], "All Ones"),
        TestVectorRecord::new(
            *b"Two One Nine Two",
            *b"Thats my Kung Fu",
            "'Two One Nine Two' with 'Thats my Kung Fu'",
        ),
    ]
}
