//! Key types for AES-128.

use crate::block::Block;
use crate::error::CipherError;

/// AES-128 key, always exactly 16 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = CipherError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| CipherError::InvalidKeyLength { len: bytes.len() })
    }
}

/// The 11 round keys produced by key expansion, round 0 first.
///
/// A schedule is built once per encryption call and never cached or
/// shared between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys([Block; 11]);

impl RoundKeys {
    pub(crate) fn new(keys: [Block; 11]) -> Self {
        Self(keys)
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
