//! ChaCha20 stream cipher implementation
//!
//! This module implements the ChaCha20 stream cipher as defined in RFC 8439:
//! a 256-bit key, a 96-bit nonce and a 32-bit little-endian block counter.
//!
//! The generator tracks the next block counter in 64 bits so that a request
//! running past block `2^32 - 1` is rejected instead of silently wrapping
//! back to block 0.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::types::nonce::ChaCha20Compatible;
use crate::types::Nonce;
use chap_common::security::{EphemeralSecret, SecretBuffer};
use chap_params::symmetric::{
    CHACHA20_CONSTANTS, CHACHA20_DOUBLE_ROUNDS, CHACHA20_MAX_COUNTER, CHACHA20_STATE_WORDS,
};

pub use chap_params::symmetric::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};

const ALGORITHM: &str = "ChaCha20";

/// One past the last usable block counter
const COUNTER_LIMIT: u64 = CHACHA20_MAX_COUNTER as u64 + 1;

/// ChaCha20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    /// Constants, key, starting counter and nonce
    state: [u32; CHACHA20_STATE_WORDS],
    /// Keystream buffer
    buffer: [u8; CHACHA20_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Counter of the next block to generate
    counter: u64,
}

impl ChaCha20 {
    /// Creates a new ChaCha20 instance starting at block counter 0
    pub fn new<const N: usize>(key: &[u8; CHACHA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: ChaCha20Compatible,
    {
        Self::with_counter(key, nonce, 0)
    }

    /// Creates a new ChaCha20 instance with the specified key, nonce, and counter
    pub fn with_counter<const N: usize>(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &Nonce<N>,
        counter: u32,
    ) -> Self
    where
        Nonce<N>: ChaCha20Compatible,
    {
        let key_buf = SecretBuffer::new(*key);
        Self::with_counter_secure(&key_buf, nonce.as_ref(), counter)
    }

    /// Creates from a SecretBuffer key without copying it out of protected storage
    pub(crate) fn from_secret_key(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: &Nonce<CHACHA20_NONCE_SIZE>,
        counter: u32,
    ) -> Self {
        Self::with_counter_secure(key, nonce.as_ref(), counter)
    }

    fn with_counter_secure(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: &[u8],
        counter: u32,
    ) -> Self {
        Self {
            state: Self::initial_state(key.as_array(), nonce, counter),
            buffer: [0; CHACHA20_BLOCK_SIZE],
            position: CHACHA20_BLOCK_SIZE, // Force initial keystream generation
            counter: counter as u64,
        }
    }

    /// Lay out the 4x4 state: constants, key words, counter, nonce words
    fn initial_state(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8],
        counter: u32,
    ) -> [u32; CHACHA20_STATE_WORDS] {
        let mut state = [0u32; CHACHA20_STATE_WORDS];
        state[..4].copy_from_slice(&CHACHA20_CONSTANTS);
        LittleEndian::read_u32_into(key, &mut state[4..12]);
        state[12] = counter;
        LittleEndian::read_u32_into(&nonce[..CHACHA20_NONCE_SIZE], &mut state[13..16]);
        state
    }

    /// Compute a single 64-byte keystream block for `(key, nonce, counter)`
    pub fn block<const N: usize>(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &Nonce<N>,
        counter: u32,
    ) -> [u8; CHACHA20_BLOCK_SIZE]
    where
        Nonce<N>: ChaCha20Compatible,
    {
        let state = EphemeralSecret::new(Self::initial_state(key, nonce.as_ref(), counter));
        let mut out = [0u8; CHACHA20_BLOCK_SIZE];
        Self::block_function(&state, counter, &mut out);
        out
    }

    /// The ChaCha20 quarter round function
    #[inline(always)]
    fn quarter_round(state: &mut [u32; CHACHA20_STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(16);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(12);

        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(8);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(7);
    }

    /// Run 20 rounds over `state` with `counter` and serialize into `out`
    fn block_function(
        state: &[u32; CHACHA20_STATE_WORDS],
        counter: u32,
        out: &mut [u8; CHACHA20_BLOCK_SIZE],
    ) {
        let mut input = EphemeralSecret::new(*state);
        input[12] = counter;

        let mut working = EphemeralSecret::new(*input);
        for _ in 0..CHACHA20_DOUBLE_ROUNDS {
            // Column rounds
            Self::quarter_round(&mut working, 0, 4, 8, 12);
            Self::quarter_round(&mut working, 1, 5, 9, 13);
            Self::quarter_round(&mut working, 2, 6, 10, 14);
            Self::quarter_round(&mut working, 3, 7, 11, 15);

            // Diagonal rounds
            Self::quarter_round(&mut working, 0, 5, 10, 15);
            Self::quarter_round(&mut working, 1, 6, 11, 12);
            Self::quarter_round(&mut working, 2, 7, 8, 13);
            Self::quarter_round(&mut working, 3, 4, 9, 14);
        }

        for (word, original) in working.iter_mut().zip(input.iter()) {
            *word = word.wrapping_add(*original);
        }

        LittleEndian::write_u32_into(&working[..], out);
    }

    /// Generate the next block of keystream into the internal buffer
    fn generate_keystream(&mut self) {
        debug_assert!(self.counter < COUNTER_LIMIT);
        Self::block_function(&self.state, self.counter as u32, &mut self.buffer);

        self.position = 0;
        self.counter += 1;
    }

    /// Keystream bytes still available before the block counter wraps
    pub fn remaining(&self) -> u64 {
        let buffered = (CHACHA20_BLOCK_SIZE - self.position) as u64;
        let blocks_left = COUNTER_LIMIT.saturating_sub(self.counter);
        blocks_left * CHACHA20_BLOCK_SIZE as u64 + buffered
    }

    /// Encrypt or decrypt data in place using the ChaCha20 stream cipher
    ///
    /// Fails without touching `data` if the request would run past the last
    /// block counter.
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        let requested = data.len() as u64;
        let limit = self.remaining();
        if requested > limit {
            return Err(Error::CounterOverflow {
                algorithm: ALGORITHM,
                limit,
                requested,
            });
        }

        let mut offset = 0;
        while offset < data.len() {
            if self.position >= CHACHA20_BLOCK_SIZE {
                self.generate_keystream();
            }

            let take = (CHACHA20_BLOCK_SIZE - self.position).min(data.len() - offset);
            let keystream = &self.buffer[self.position..self.position + take];
            for (byte, ks) in data[offset..offset + take].iter_mut().zip(keystream) {
                *byte ^= ks;
            }

            self.position += take;
            offset += take;
        }

        Ok(())
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Write raw keystream into `output`, continuing from the current position
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.zeroize();
        self.process(output)
    }

    /// Seek to an absolute block counter
    ///
    /// The next byte produced is the first byte of block `block`.
    pub fn seek(&mut self, block: u32) {
        self.counter = block as u64;
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }

    /// Reset to the starting counter with the same key and nonce
    pub fn reset(&mut self) {
        self.counter = self.state[12] as u64;
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }
}
