//! Cipher handle for the chap ChaCha20-Poly1305 AEAD
//!
//! This crate wraps the primitives in `chap-algorithms` behind a handle that
//! holds the long-term key and exposes Seal / Open / Overhead over byte
//! slices, reporting failures through the unified API error system.
//!
//! ```
//! use chap_symmetric::{Aead, ChaCha20Poly1305Cipher, SymmetricCipher};
//!
//! # fn main() -> chap_symmetric::Result<()> {
//! let cipher = ChaCha20Poly1305Cipher::new(&[0x42u8; 32])?;
//! let nonce = [0u8; 12];
//!
//! let sealed = cipher.seal(&nonce, b"attack at dawn", b"header")?;
//! assert_eq!(sealed.len(), 14 + cipher.overhead());
//!
//! let opened = cipher.open(&nonce, &sealed, b"header")?;
//! assert_eq!(opened, b"attack at dawn");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod aead;
pub mod cipher;
pub mod error;

// Re-export main types for convenience
pub use aead::chacha20poly1305::ChaCha20Poly1305Cipher;
pub use cipher::{Aead, SymmetricCipher};

// Re-export the API error system instead of custom error types
pub use chap_api::error::{Error, Result};
