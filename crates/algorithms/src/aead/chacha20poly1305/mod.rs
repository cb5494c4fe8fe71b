//! ChaCha20-Poly1305 authenticated encryption
//!
//! This module implements the ChaCha20-Poly1305 AEAD algorithm as specified in
//! RFC 8439 section 2.8.
//!
//! ## Construction
//!
//! * Keystream block 0 under `(key, nonce)` supplies the one-time Poly1305 key.
//! * The message is encrypted with ChaCha20 starting at block counter 1.
//! * The tag authenticates `aad ‖ pad16 ‖ ciphertext ‖ pad16 ‖ le64(|aad|) ‖ le64(|ciphertext|)`.
//!
//! ## Constant-Time Guarantees
//!
//! * The tag is compared with a constant-time equality; no early exit on the
//!   first differing byte.
//! * Decryption only runs after the tag has verified, so a forged message
//!   never produces plaintext or keystream-derived output.
//! * The one-time key lives in a zeroizing buffer for the duration of a
//!   single call.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::mac::poly1305::{Poly1305, POLY1305_KEY_SIZE, POLY1305_TAG_SIZE};
use crate::stream::chacha::chacha20::{ChaCha20, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
use crate::types::{Nonce, SecretBuffer, Tag, ZeroizeGuard};
use chap_api::traits::AuthenticatedCipher;
use chap_internal::constant_time::ct_eq;
use chap_params::symmetric::CHACHA20POLY1305_INITIAL_COUNTER;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Size constants
pub const CHACHA20POLY1305_KEY_SIZE: usize = CHACHA20_KEY_SIZE;
/// Size of the nonce used by ChaCha20Poly1305 in bytes
pub const CHACHA20POLY1305_NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;
/// Size of the authentication tag produced by ChaCha20Poly1305 in bytes
pub const CHACHA20POLY1305_TAG_SIZE: usize = POLY1305_TAG_SIZE;

const ALGORITHM: &str = "ChaCha20Poly1305";

const ZERO_PAD: [u8; 16] = [0u8; 16];

/// ChaCha20-Poly1305 AEAD
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20Poly1305 {
    key: SecretBuffer<CHACHA20POLY1305_KEY_SIZE>,
}

impl ChaCha20Poly1305 {
    /// Create a new instance from a 256-bit key.
    pub fn new(key: &[u8; CHACHA20POLY1305_KEY_SIZE]) -> Self {
        Self {
            key: SecretBuffer::new(*key),
        }
    }

    /// Create a new instance from a key slice, which must be exactly 32 bytes.
    pub fn new_from_slice(key: &[u8]) -> Result<Self> {
        validate::key_length(ALGORITHM, key.len(), CHACHA20POLY1305_KEY_SIZE)?;

        let mut key_array = [0u8; CHACHA20POLY1305_KEY_SIZE];
        key_array.copy_from_slice(key);
        let cipher = Self::new(&key_array);
        key_array.zeroize();

        Ok(cipher)
    }

    /// Derive the one-time Poly1305 key (RFC 8439 §2.6).
    fn poly1305_key(
        &self,
        nonce: &Nonce<CHACHA20POLY1305_NONCE_SIZE>,
    ) -> SecretBuffer<POLY1305_KEY_SIZE> {
        let mut block = ChaCha20::block(self.key.as_array(), nonce, 0);
        let block = ZeroizeGuard::new(&mut block);

        let mut poly_key = SecretBuffer::zeroed();
        poly_key
            .as_mut_slice()
            .copy_from_slice(&block[..POLY1305_KEY_SIZE]);
        poly_key
    }

    /// Keystream generator positioned at the first message block.
    fn message_cipher(&self, nonce: &Nonce<CHACHA20POLY1305_NONCE_SIZE>) -> ChaCha20 {
        ChaCha20::from_secret_key(&self.key, nonce, CHACHA20POLY1305_INITIAL_COUNTER)
    }

    /// RFC 8439 §2.8: Poly1305 over the padded AAD, ciphertext and lengths.
    fn compute_tag(
        poly_key: &SecretBuffer<POLY1305_KEY_SIZE>,
        aad: &[u8],
        ciphertext: &[u8],
    ) -> Tag<POLY1305_TAG_SIZE> {
        let mut poly = Poly1305::new(poly_key.as_array());

        poly.update(aad);
        poly.update(&ZERO_PAD[..pad16(aad.len())]);

        poly.update(ciphertext);
        poly.update(&ZERO_PAD[..pad16(ciphertext.len())]);

        let mut lengths = [0u8; 16];
        LittleEndian::write_u64(&mut lengths[..8], aad.len() as u64);
        LittleEndian::write_u64(&mut lengths[8..], ciphertext.len() as u64);
        poly.update(&lengths);

        poly.finalize()
    }

    /// Encrypt `buffer` in place and return the detached tag.
    ///
    /// Fails with `CounterOverflow`, leaving `buffer` untouched, if the
    /// message needs more keystream than the 32-bit counter can supply.
    pub fn seal_in_place_detached(
        &self,
        nonce: &Nonce<CHACHA20POLY1305_NONCE_SIZE>,
        aad: &[u8],
        buffer: &mut [u8],
    ) -> Result<Tag<POLY1305_TAG_SIZE>> {
        validate::message_length(ALGORITHM, buffer.len())?;

        let poly_key = self.poly1305_key(nonce);
        self.message_cipher(nonce).encrypt(buffer)?;

        Ok(Self::compute_tag(&poly_key, aad, buffer))
    }

    /// Verify `tag` over `buffer` and, only if it matches, decrypt in place.
    ///
    /// On authentication failure `buffer` still holds the ciphertext.
    pub fn open_in_place_detached(
        &self,
        nonce: &Nonce<CHACHA20POLY1305_NONCE_SIZE>,
        aad: &[u8],
        buffer: &mut [u8],
        tag: &[u8],
    ) -> Result<()> {
        validate::message_length(ALGORITHM, buffer.len())?;

        let poly_key = self.poly1305_key(nonce);
        let expected = Self::compute_tag(&poly_key, aad, buffer);
        validate::authentication(ct_eq(expected.as_ref(), tag), ALGORITHM)?;

        self.message_cipher(nonce).decrypt(buffer)
    }

    /// Encrypt `plaintext`, returning `ciphertext ‖ tag`.
    #[cfg(feature = "alloc")]
    pub fn encrypt(
        &self,
        nonce: &Nonce<CHACHA20POLY1305_NONCE_SIZE>,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        validate::message_length(ALGORITHM, plaintext.len())?;

        let mut out = Vec::with_capacity(plaintext.len() + CHACHA20POLY1305_TAG_SIZE);
        out.extend_from_slice(plaintext);

        match self.seal_in_place_detached(nonce, aad.unwrap_or(&[]), &mut out) {
            Ok(tag) => {
                out.extend_from_slice(tag.as_ref());
                Ok(out)
            }
            Err(e) => {
                out.zeroize();
                Err(e)
            }
        }
    }

    /// Verify and decrypt `ciphertext ‖ tag`, returning the plaintext.
    ///
    /// No plaintext is produced if the tag does not verify.
    #[cfg(feature = "alloc")]
    pub fn decrypt(
        &self,
        nonce: &Nonce<CHACHA20POLY1305_NONCE_SIZE>,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        validate::min_length(
            "ChaCha20Poly1305 ciphertext",
            ciphertext.len(),
            CHACHA20POLY1305_TAG_SIZE,
        )?;

        let (encrypted, tag) = ciphertext.split_at(ciphertext.len() - CHACHA20POLY1305_TAG_SIZE);

        let mut out = encrypted.to_vec();
        match self.open_in_place_detached(nonce, aad.unwrap_or(&[]), &mut out, tag) {
            Ok(()) => Ok(out),
            Err(e) => {
                out.zeroize();
                Err(e)
            }
        }
    }
}

/// Bytes of zero padding that bring `len` up to a multiple of 16
#[inline]
fn pad16(len: usize) -> usize {
    (16 - len % 16) % 16
}

impl AuthenticatedCipher for ChaCha20Poly1305 {
    const KEY_SIZE: usize = CHACHA20POLY1305_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA20POLY1305_NONCE_SIZE;
    const TAG_SIZE: usize = CHACHA20POLY1305_TAG_SIZE;
    const ALGORITHM_ID: &'static str = ALGORITHM;
}
