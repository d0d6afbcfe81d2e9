//! Library surface of the `aesvec` test-vector generator.
//!
//! The binary in `main.rs` is a thin wrapper; the corpus, the textual
//! encodings, and the six-file export live here so integration tests can
//! drive the pipeline directly.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod corpus;
pub mod encode;
pub mod export;
