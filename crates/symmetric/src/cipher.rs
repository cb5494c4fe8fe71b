//! Symmetric cipher traits for chap-symmetric
//!
//! `Aead` follows an output-buffer reuse convention: the `*_into` forms append
//! to caller-supplied storage, the plain forms allocate. Input slices are
//! never aliased with the output.

use alloc::vec::Vec;

use crate::error::Result;

/// Common trait for all symmetric encryption algorithms
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key: ?Sized;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}

/// Trait for Authenticated Encryption with Associated Data
pub trait Aead: SymmetricCipher {
    /// Size of the nonce in bytes
    fn nonce_size(&self) -> usize;

    /// Difference between ciphertext and plaintext lengths
    fn overhead(&self) -> usize;

    /// Encrypts and authenticates `plaintext`, appending `ciphertext ‖ tag` to `dst`
    ///
    /// On error `dst` is restored to its original length.
    fn seal_into(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], aad: &[u8])
        -> Result<()>;

    /// Authenticates and decrypts `input` (`ciphertext ‖ tag`), appending the plaintext to `dst`
    ///
    /// On error `dst` is restored to its original length and no plaintext is released.
    fn open_into(&self, dst: &mut Vec<u8>, nonce: &[u8], input: &[u8], aad: &[u8])
        -> Result<()>;

    /// Encrypts and authenticates `plaintext` into fresh storage
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(plaintext.len() + self.overhead());
        self.seal_into(&mut out, nonce, plaintext, aad)?;
        Ok(out)
    }

    /// Authenticates and decrypts `input` into fresh storage
    fn open(&self, nonce: &[u8], input: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(input.len().saturating_sub(self.overhead()));
        self.open_into(&mut out, nonce, input, aad)?;
        Ok(out)
    }
}
