//! Traits shared across the chap crates

/// Static description of an authenticated cipher.
///
/// Implementors expose their fixed sizes so that framing layers can size
/// buffers without holding a cipher instance.
pub trait AuthenticatedCipher {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Nonce size in bytes
    const NONCE_SIZE: usize;

    /// Authentication tag size in bytes
    const TAG_SIZE: usize;

    /// Algorithm identifier used in error contexts
    const ALGORITHM_ID: &'static str;
}
