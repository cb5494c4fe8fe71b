//! Type-safe nonce implementation with generic size parameter
//!
//! The nonce is caller-owned and never persisted; uniqueness per key is the
//! caller's responsibility. Reusing a (key, nonce) pair for two messages
//! reveals the XOR of their plaintexts and lets an attacker forge tags for
//! both.

use core::fmt;
use core::ops::Deref;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;

/// Generic nonce type with compile-time size guarantee
#[derive(Clone, Zeroize)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Sealed for Nonce<N> {}

impl<const N: usize> Nonce<N> {
    /// Create a new nonce from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed nonce
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::nonce_length("Nonce", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Generate a random nonce
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data[..].ct_eq(&other.data[..]).into()
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>({:?})", N, &self.data[..])
    }
}

/// Nonce sizes ChaCha20 accepts (the RFC 8439 96-bit nonce)
pub trait ChaCha20Compatible: Sealed {}
impl ChaCha20Compatible for Nonce<12> {}
