//! ChaCha family of stream ciphers

pub mod chacha20;

// Re-export for convenience
pub use chacha20::ChaCha20;
