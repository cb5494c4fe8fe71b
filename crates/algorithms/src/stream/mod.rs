//! Stream cipher implementations
//!
//! Stream ciphers encrypt by XORing the input with a pseudorandom keystream,
//! so encryption and decryption are the same operation.
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Reusing a nonce with the same key completely breaks the security
//! of the cipher.

/// ChaCha family of stream cipher implementations
pub mod chacha;

// Re-export commonly used types
pub use chacha::chacha20::{ChaCha20, CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};

use crate::error::{validate, Result};

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// The key size in bytes
    const KEY_SIZE: usize;

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The internal block size in bytes (if applicable)
    const BLOCK_SIZE: usize;

    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Reset the cipher to its initial state
    fn reset(&mut self) -> Result<()>;

    /// Seek to an absolute block position
    fn seek(&mut self, block: u64) -> Result<()>;
}

impl StreamCipher for ChaCha20 {
    const KEY_SIZE: usize = CHACHA20_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        ChaCha20::process(self, data)
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        ChaCha20::keystream(self, output)
    }

    fn reset(&mut self) -> Result<()> {
        ChaCha20::reset(self);
        Ok(())
    }

    fn seek(&mut self, block: u64) -> Result<()> {
        validate::parameter(
            block <= u64::from(u32::MAX),
            "block",
            "ChaCha20 block counter must fit in u32",
        )?;
        ChaCha20::seek(self, block as u32);
        Ok(())
    }
}
