//! Block representation and helpers.

use crate::error::CipherError;

/// AES block of 16 bytes.
///
/// Conceptually a 4x4 byte matrix stored column-major: byte `i` sits at
/// row `i % 4`, column `i / 4`.
pub type Block = [u8; 16];

/// Converts a byte slice into a [`Block`], rejecting any other length.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block, CipherError> {
    Block::try_from(bytes).map_err(|_| CipherError::InvalidBlockLength { len: bytes.len() })
}

/// XORs `rhs` into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
