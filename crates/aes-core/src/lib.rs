//! From-scratch AES-128 single-block encryption.
//!
//! This crate implements the FIPS-197 key schedule and the 10-round
//! encryption of one 16-byte block with no external cryptographic
//! dependency. It exists to produce deterministic test vectors for
//! hardware and software AES implementations, and provides:
//! - Key expansion for AES-128.
//! - Single-block ECB encryption.
//! - A validating entry point over byte slices.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened. There is deliberately no decryption path.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::{block_from_slice, Block};
pub use crate::cipher::{encrypt, encrypt_block, expand_key};
pub use crate::error::CipherError;
pub use crate::key::{Aes128Key, RoundKeys};
