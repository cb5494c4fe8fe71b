//! Type-safe authentication tag implementation with size guarantees

use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

use chap_internal::constant_time::ct_eq;

/// A cryptographic authentication tag with fixed size
#[derive(Clone, Zeroize)]
pub struct Tag<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Tag<N> {
    /// Create a new tag from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Consume the tag and return the raw bytes
    pub fn into_bytes(self) -> [u8; N] {
        self.data
    }
}

impl<const N: usize> AsRef<[u8]> for Tag<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Tag<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

// Equality is always constant-time
impl<const N: usize> PartialEq for Tag<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for Tag<N> {}

impl<const N: usize> fmt::LowerHex for Tag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Tag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>({:x})", N, self)
    }
}

impl<const N: usize> fmt::Display for Tag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}
