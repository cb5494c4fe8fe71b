//! Fixed-size nonce and tag types
//!
//! The const parameter carries the size; the sealed marker traits tie a size
//! to the algorithm that accepts it.

pub mod nonce;
pub mod tag;

pub(crate) mod sealed;

pub use nonce::Nonce;
pub use tag::Tag;

// Secret containers used alongside these types
pub use chap_common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
