//! Textual encodings for exported vectors.
//!
//! Two renderings of the same bytes: lowercase hex (two characters per
//! byte, no prefix or separators) and an MSB-first '0'/'1' bit string
//! (eight characters per byte). A 16-byte value is 32 hex characters or
//! 128 bit characters.

/// Renders bytes as a lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Renders bytes as an MSB-first bit string.
pub fn to_bits(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for shift in (0..8).rev() {
            out.push(if byte >> shift & 1 == 1 { '1' } else { '0' });
        }
    }
    out
}

/// Decodes an MSB-first bit string back into bytes.
///
/// Returns `None` when the length is not a multiple of eight or any
/// character is not '0' or '1'.
pub fn from_bits(bits: &str) -> Option<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return None;
    }
    bits.as_bytes()
        .chunks_exact(8)
        .map(|chunk| {
            chunk.iter().try_fold(0u8, |acc, &ch| match ch {
                b'0' => Some(acc << 1),
                b'1' => Some(acc << 1 | 1),
                _ => None,
            })
        })
        .collect()
}
