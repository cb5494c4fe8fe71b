//! Constants for the ChaCha20-Poly1305 construction (RFC 8439)

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the ChaCha20 state
pub const CHACHA20_STATE_WORDS: usize = 16;

/// Number of double rounds (column + diagonal) applied per block
pub const CHACHA20_DOUBLE_ROUNDS: usize = 10;

/// "expand 32-byte k" as four little-endian words
pub const CHACHA20_CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Highest block counter a ChaCha20 keystream may use
pub const CHACHA20_MAX_COUNTER: u32 = u32::MAX;

/// Poly1305 one-time key size in bytes
pub const POLY1305_KEY_SIZE: usize = 32;

/// Poly1305 tag size in bytes
pub const POLY1305_TAG_SIZE: usize = 16;

/// Poly1305 message block size in bytes
pub const POLY1305_BLOCK_SIZE: usize = 16;

/// ChaCha20-Poly1305 key size in bytes
pub const CHACHA20POLY1305_KEY_SIZE: usize = CHACHA20_KEY_SIZE;

/// ChaCha20-Poly1305 nonce size in bytes
pub const CHACHA20POLY1305_NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;

/// ChaCha20-Poly1305 tag size in bytes
pub const CHACHA20POLY1305_TAG_SIZE: usize = POLY1305_TAG_SIZE;

/// Block counter of the first plaintext block (block 0 keys Poly1305)
pub const CHACHA20POLY1305_INITIAL_COUNTER: u32 = 1;

/// Longest plaintext a single message may carry: counters 1..=2^32-1, 64 bytes each
pub const CHACHA20POLY1305_MAX_MESSAGE_LEN: u64 =
    (CHACHA20_MAX_COUNTER as u64) * (CHACHA20_BLOCK_SIZE as u64);
