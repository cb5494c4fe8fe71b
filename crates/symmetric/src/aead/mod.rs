//! Authenticated cipher handles

pub mod chacha20poly1305;

pub use chacha20poly1305::ChaCha20Poly1305Cipher;
