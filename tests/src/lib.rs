//! Known-answer vectors and shared helpers for the chap test suites
//!
//! Vectors live as hex strings in JSON under `src/vectors/` and are decoded
//! once per test binary.


pub use vectors::{aead_vectors, chacha20_vectors, poly1305_vectors, DecodedAead, VectorError};
