//! Error handling for the chap AEAD

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};
