//! Poly1305 one-time authenticator
//!
//! Implements Poly1305 as specified in RFC 8439 section 2.5. The 130-bit
//! accumulator is held in five 26-bit limbs so every product fits in a u64,
//! and the final reduction modulo `2^130 - 5` selects between the candidate
//! results with a mask rather than a branch.
//!
//! The 32-byte key is split into `r` (clamped) and `s`. The tag is
//! `(((m_1 * r^q) + ... + (m_q * r)) mod (2^130 - 5) + s) mod 2^128`.

use byteorder::{ByteOrder, LittleEndian};
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::types::Tag;
use chap_internal::constant_time::{ct_eq, ct_select_u32};

pub use chap_params::symmetric::{POLY1305_BLOCK_SIZE, POLY1305_KEY_SIZE, POLY1305_TAG_SIZE};

const ALGORITHM: &str = "Poly1305";

/// Low 26 bits
const LIMB_MASK: u32 = 0x03ff_ffff;

/// The 2^128 bit appended to every full 16-byte block
const HIBIT: u32 = 1 << 24;

/// Incremental Poly1305 state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    /// Clamped `r` in 26-bit limbs
    r: [u32; 5],
    /// `s` as four little-endian words
    s: [u32; 4],
    /// Accumulator in 26-bit limbs
    h: [u32; 5],
    buffer: [u8; POLY1305_BLOCK_SIZE],
    buffer_len: usize,
}

impl Poly1305 {
    /// Create a new authenticator from a 32-byte one-time key
    pub fn new(key: &[u8; POLY1305_KEY_SIZE]) -> Self {
        let t0 = LittleEndian::read_u32(&key[0..4]);
        let t1 = LittleEndian::read_u32(&key[4..8]);
        let t2 = LittleEndian::read_u32(&key[8..12]);
        let t3 = LittleEndian::read_u32(&key[12..16]);

        // Clamp: clear the top four bits of r[3], r[7], r[11], r[15] and the
        // bottom two bits of r[4], r[8], r[12], folded into the limb split.
        let r = [
            t0 & 0x03ff_ffff,
            ((t0 >> 26) | (t1 << 6)) & 0x03ff_ff03,
            ((t1 >> 20) | (t2 << 12)) & 0x03ff_c0ff,
            ((t2 >> 14) | (t3 << 18)) & 0x03f0_3fff,
            (t3 >> 8) & 0x000f_ffff,
        ];

        let mut s = [0u32; 4];
        LittleEndian::read_u32_into(&key[16..32], &mut s);

        Self {
            r,
            s,
            h: [0; 5],
            buffer: [0; POLY1305_BLOCK_SIZE],
            buffer_len: 0,
        }
    }

    /// Create a new authenticator from a key slice
    pub fn new_from_slice(key: &[u8]) -> Result<Self> {
        validate::key_length(ALGORITHM, key.len(), POLY1305_KEY_SIZE)?;

        let mut key_array = [0u8; POLY1305_KEY_SIZE];
        key_array.copy_from_slice(key);
        let mac = Self::new(&key_array);
        key_array.zeroize();

        Ok(mac)
    }

    /// Absorb one 16-byte block; `hibit` is `2^128` for full blocks and 0
    /// for the padded final block
    fn process_block(&mut self, block: &[u8], hibit: u32) {
        let [r0, r1, r2, r3, r4] = self.r;
        let (s1, s2, s3, s4) = (r1 * 5, r2 * 5, r3 * 5, r4 * 5);

        let t0 = LittleEndian::read_u32(&block[0..4]);
        let t1 = LittleEndian::read_u32(&block[4..8]);
        let t2 = LittleEndian::read_u32(&block[8..12]);
        let t3 = LittleEndian::read_u32(&block[12..16]);

        let h0 = self.h[0] + (t0 & LIMB_MASK);
        let h1 = self.h[1] + (((t0 >> 26) | (t1 << 6)) & LIMB_MASK);
        let h2 = self.h[2] + (((t1 >> 20) | (t2 << 12)) & LIMB_MASK);
        let h3 = self.h[3] + (((t2 >> 14) | (t3 << 18)) & LIMB_MASK);
        let h4 = self.h[4] + ((t3 >> 8) | hibit);

        // h *= r, with the 2^130 wraparound folded in through s_i = 5 * r_i
        let mul = |a: u32, b: u32| a as u64 * b as u64;
        let d0 = mul(h0, r0) + mul(h1, s4) + mul(h2, s3) + mul(h3, s2) + mul(h4, s1);
        let mut d1 = mul(h0, r1) + mul(h1, r0) + mul(h2, s4) + mul(h3, s3) + mul(h4, s2);
        let mut d2 = mul(h0, r2) + mul(h1, r1) + mul(h2, r0) + mul(h3, s4) + mul(h4, s3);
        let mut d3 = mul(h0, r3) + mul(h1, r2) + mul(h2, r1) + mul(h3, r0) + mul(h4, s4);
        let mut d4 = mul(h0, r4) + mul(h1, r3) + mul(h2, r2) + mul(h3, r1) + mul(h4, r0);

        // Partial reduction
        let mut h = [0u32; 5];
        h[0] = (d0 as u32) & LIMB_MASK;
        d1 += d0 >> 26;
        h[1] = (d1 as u32) & LIMB_MASK;
        d2 += d1 >> 26;
        h[2] = (d2 as u32) & LIMB_MASK;
        d3 += d2 >> 26;
        h[3] = (d3 as u32) & LIMB_MASK;
        d4 += d3 >> 26;
        h[4] = (d4 as u32) & LIMB_MASK;

        let carry = (d4 >> 26) as u32;
        h[0] += carry * 5;
        h[1] += h[0] >> 26;
        h[0] &= LIMB_MASK;

        self.h = h;
    }

    /// Absorb message bytes
    pub fn update(&mut self, mut data: &[u8]) {
        if self.buffer_len > 0 {
            let take = (POLY1305_BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < POLY1305_BLOCK_SIZE {
                return;
            }

            let mut block = self.buffer;
            self.process_block(&block, HIBIT);
            block.zeroize();
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(POLY1305_BLOCK_SIZE);
        for block in &mut blocks {
            self.process_block(block, HIBIT);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Consume the state and produce the 16-byte tag
    pub fn finalize(mut self) -> Tag<POLY1305_TAG_SIZE> {
        if self.buffer_len > 0 {
            let mut block = [0u8; POLY1305_BLOCK_SIZE];
            block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
            block[self.buffer_len] = 1;
            self.process_block(&block, 0);
            block.zeroize();
        }

        let mut h = self.h;

        // Full carry propagation
        let mut c;
        c = h[1] >> 26;
        h[1] &= LIMB_MASK;
        h[2] += c;
        c = h[2] >> 26;
        h[2] &= LIMB_MASK;
        h[3] += c;
        c = h[3] >> 26;
        h[3] &= LIMB_MASK;
        h[4] += c;
        c = h[4] >> 26;
        h[4] &= LIMB_MASK;
        h[0] += c * 5;
        c = h[0] >> 26;
        h[0] &= LIMB_MASK;
        h[1] += c;

        // g = h + 5 - 2^130
        let mut g = [0u32; 5];
        g[0] = h[0] + 5;
        c = g[0] >> 26;
        g[0] &= LIMB_MASK;
        g[1] = h[1] + c;
        c = g[1] >> 26;
        g[1] &= LIMB_MASK;
        g[2] = h[2] + c;
        c = g[2] >> 26;
        g[2] &= LIMB_MASK;
        g[3] = h[3] + c;
        c = g[3] >> 26;
        g[3] &= LIMB_MASK;
        g[4] = (h[4] + c).wrapping_sub(1 << 26);

        // h >= 2^130 - 5 exactly when g did not borrow
        let use_g = Choice::from(((g[4] >> 31) ^ 1) as u8);
        for (hi, gi) in h.iter_mut().zip(g.iter()) {
            *hi = ct_select_u32(*hi, *gi, use_g);
        }
        h[4] &= LIMB_MASK;

        // Repack into 128 bits, dropping anything above 2^128
        let packed = [
            h[0] | (h[1] << 26),
            (h[1] >> 6) | (h[2] << 20),
            (h[2] >> 12) | (h[3] << 14),
            (h[3] >> 18) | (h[4] << 8),
        ];

        // tag = (h + s) mod 2^128
        let mut out = [0u8; POLY1305_TAG_SIZE];
        let mut carry = 0u64;
        for (i, (word, s)) in packed.iter().zip(self.s.iter()).enumerate() {
            let sum = *word as u64 + *s as u64 + carry;
            LittleEndian::write_u32(&mut out[i * 4..i * 4 + 4], sum as u32);
            carry = sum >> 32;
        }

        h.zeroize();
        g.zeroize();

        Tag::new(out)
    }

    /// One-shot MAC computation
    pub fn mac(key: &[u8; POLY1305_KEY_SIZE], message: &[u8]) -> Tag<POLY1305_TAG_SIZE> {
        let mut poly = Self::new(key);
        poly.update(message);
        poly.finalize()
    }

    /// Recompute the tag for `message` and compare it with `tag` in constant time
    pub fn verify(key: &[u8; POLY1305_KEY_SIZE], message: &[u8], tag: &[u8]) -> Result<()> {
        let computed = Self::mac(key, message);
        validate::authentication(ct_eq(computed.as_ref(), tag), ALGORITHM)
    }
}
