//! Cryptographic primitives for the chap AEAD with constant-time implementation
//!
//! This crate provides the three pieces of the RFC 8439 construction:
//!
//! - [`ChaCha20`]: the keystream generator, keyed by a 256-bit key, a 96-bit
//!   nonce and a 32-bit block counter
//! - [`Poly1305`]: the one-time authenticator over GF(2^130 - 5)
//! - [`ChaCha20Poly1305`]: the composition that derives a fresh Poly1305 key
//!   from keystream block 0, encrypts from block 1 and authenticates
//!   `aad ‖ pad16 ‖ ciphertext ‖ pad16 ‖ le64(len aad) ‖ le64(len ciphertext)`
//!
//! # Security Features
//!
//! - Keys, one-time MAC keys and keystream blocks are zeroized after use
//! - Tag comparison and the final field reduction are branch-free
//! - No plaintext is produced unless the tag verifies
//!
//! All operations are synchronous and allocation-free in their in-place form;
//! the `alloc` feature adds `Vec`-returning helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Type system
pub mod types;
pub use types::{Nonce, Tag};

// Stream cipher implementations
pub mod stream;
pub use stream::{ChaCha20, StreamCipher};

// MAC implementations
pub mod mac;
pub use mac::Poly1305;

// AEAD cipher implementations
pub mod aead;
pub use aead::ChaCha20Poly1305;
