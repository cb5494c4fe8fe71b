//! Common implementations and shared functionality for the chap AEAD
//!
//! This crate provides the secret-holding containers used by the ChaCha20,
//! Poly1305 and AEAD layers so that keys and keystream never outlive the
//! operation that needs them.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
