//! ChaCha20Poly1305 cipher handle
//!
//! The handle owns the long-term key and nothing else, so one instance can
//! serve any number of concurrent Seal/Open calls. Each call derives its own
//! one-time Poly1305 key and keystream and discards them before returning.
//!
//! Nonce uniqueness is the caller's responsibility: sealing two messages
//! under the same (key, nonce) pair destroys confidentiality and
//! authenticity for both.

use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::{Aead, SymmetricCipher};
use crate::error::{Error, Result, SymmetricResultExt};
use chap_algorithms::aead::ChaCha20Poly1305;
use chap_algorithms::types::Nonce;
use chap_params::symmetric::{CHACHA20POLY1305_NONCE_SIZE, CHACHA20POLY1305_TAG_SIZE};

const ALGORITHM: &str = "ChaCha20Poly1305";

/// ChaCha20-Poly1305 AEAD bound to a 256-bit key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20Poly1305Cipher {
    inner: ChaCha20Poly1305,
}

impl ChaCha20Poly1305Cipher {
    fn nonce(nonce: &[u8]) -> Result<Nonce<CHACHA20POLY1305_NONCE_SIZE>> {
        Nonce::from_slice(nonce).map_primitive_err(ALGORITHM).map_err(|e| {
            debug!(nonce_len = nonce.len(), "rejected nonce");
            e
        })
    }
}

impl SymmetricCipher for ChaCha20Poly1305Cipher {
    type Key = [u8];

    fn new(key: &[u8]) -> Result<Self> {
        let inner = ChaCha20Poly1305::new_from_slice(key)
            .map_primitive_err(ALGORITHM)
            .map_err(|e| {
                debug!(key_len = key.len(), "rejected key");
                e
            })?;
        Ok(Self { inner })
    }

    fn name() -> &'static str {
        ALGORITHM
    }
}

impl Aead for ChaCha20Poly1305Cipher {
    fn nonce_size(&self) -> usize {
        CHACHA20POLY1305_NONCE_SIZE
    }

    fn overhead(&self) -> usize {
        CHACHA20POLY1305_TAG_SIZE
    }

    fn seal_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<()> {
        let nonce = Self::nonce(nonce)?;
        trace!(plaintext_len = plaintext.len(), aad_len = aad.len(), "seal");

        let start = dst.len();
        dst.reserve(plaintext.len() + CHACHA20POLY1305_TAG_SIZE);
        dst.extend_from_slice(plaintext);

        match self.inner.seal_in_place_detached(&nonce, aad, &mut dst[start..]) {
            Ok(tag) => {
                dst.extend_from_slice(tag.as_ref());
                Ok(())
            }
            Err(e) => {
                dst[start..].zeroize();
                dst.truncate(start);
                debug!(plaintext_len = plaintext.len(), "seal rejected");
                Err(Error::from(e).with_context(ALGORITHM))
            }
        }
    }

    fn open_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        input: &[u8],
        aad: &[u8],
    ) -> Result<()> {
        let nonce = Self::nonce(nonce)?;
        trace!(input_len = input.len(), aad_len = aad.len(), "open");

        if input.len() < CHACHA20POLY1305_TAG_SIZE {
            debug!(input_len = input.len(), "input shorter than tag");
            return Err(Error::InvalidLength {
                context: ALGORITHM,
                expected: CHACHA20POLY1305_TAG_SIZE,
                actual: input.len(),
            });
        }

        let (ciphertext, tag) = input.split_at(input.len() - CHACHA20POLY1305_TAG_SIZE);

        let start = dst.len();
        dst.extend_from_slice(ciphertext);

        match self
            .inner
            .open_in_place_detached(&nonce, aad, &mut dst[start..], tag)
        {
            Ok(()) => Ok(()),
            Err(e) => {
                dst[start..].zeroize();
                dst.truncate(start);
                let err = Error::from(e).with_context(ALGORITHM);
                if err.is_authentication_failure() {
                    debug!(input_len = input.len(), aad_len = aad.len(), "authentication failed");
                }
                Err(err)
            }
        }
    }
}

impl fmt::Debug for ChaCha20Poly1305Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaCha20Poly1305Cipher")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
