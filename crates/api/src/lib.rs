//! Public API traits and types for the chap AEAD
//!
//! This crate provides the error taxonomy every public chap operation reports
//! and the descriptor trait shared by authenticated ciphers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::AuthenticatedCipher;
