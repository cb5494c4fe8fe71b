//! # chap
//!
//! A pure Rust ChaCha20-Poly1305 AEAD (RFC 8439).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! chap = "0.1"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and `std::error::Error` impls
//! - `alloc`: `Vec`-returning encrypt/decrypt on the primitives
//! - `symmetric` (default): the [`ChaCha20Poly1305Cipher`](symmetric::ChaCha20Poly1305Cipher)
//!   handle with Seal / Open / Overhead
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`chap-algorithms`]: ChaCha20, Poly1305 and the AEAD composition
//! - [`chap-symmetric`]: the keyed cipher handle
//! - [`chap-api`]: error taxonomy and cipher descriptor trait
//! - [`chap-common`]: zeroizing secret containers
//! - [`chap-internal`]: constant-time helpers
//! - [`chap-params`]: sizes and limits
//!
//! ```
//! # #[cfg(feature = "symmetric")]
//! # fn main() -> chap::api::Result<()> {
//! use chap::prelude::*;
//!
//! let cipher = ChaCha20Poly1305Cipher::new(&[7u8; 32])?;
//! let sealed = cipher.seal(&[0u8; 12], b"hello", b"")?;
//! assert_eq!(cipher.open(&[0u8; 12], &sealed, b"")?, b"hello");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "symmetric"))]
//! # fn main() {}
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use chap_algorithms as algorithms;
pub use chap_api as api;
pub use chap_common as common;
pub use chap_internal as internal;
pub use chap_params as params;

// Feature-gated re-exports
#[cfg(feature = "symmetric")]
pub use chap_symmetric as symmetric;

// Re-export the zeroize and subtle crates used across the public API
pub use subtle;
pub use zeroize;

/// Common imports for chap users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{AuthenticatedCipher, Error, Result};

    // Re-export primitives
    pub use crate::algorithms::{ChaCha20, ChaCha20Poly1305, Nonce, Poly1305, StreamCipher, Tag};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

    // Re-export the cipher handle and its traits
    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{Aead, ChaCha20Poly1305Cipher, SymmetricCipher};
}
