//! Authenticated Encryption with Associated Data (AEAD)
//!
//! ChaCha20-Poly1305 as defined in RFC 8439. Every call is stateless apart
//! from the long-term key; the caller supplies a fresh nonce per message.

pub mod chacha20poly1305;

pub use chacha20poly1305::{
    ChaCha20Poly1305, CHACHA20POLY1305_KEY_SIZE, CHACHA20POLY1305_NONCE_SIZE,
    CHACHA20POLY1305_TAG_SIZE,
};
