//! Message Authentication Code (MAC) algorithms
//!
//! Only the one-time authenticator needed by the RFC 8439 AEAD lives here.
//! A Poly1305 key must never authenticate more than one message.

pub mod poly1305;

pub use poly1305::{Poly1305, POLY1305_KEY_SIZE, POLY1305_TAG_SIZE};
