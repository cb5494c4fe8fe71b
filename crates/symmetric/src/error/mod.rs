//! Error handling for symmetric cryptographic operations
//!
//! Re-exports the API error system and adds the conversion used when a
//! primitive-level result crosses into the handle.

pub use chap_api::error::{Error, Result};

use chap_algorithms::error::Error as PrimitiveError;

/// Extension trait to lift primitive results into API results
pub trait SymmetricResultExt<T> {
    /// Convert the error and tag it with `context`
    fn map_primitive_err(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self, context: &'static str) -> Result<T> {
        self.map_err(|e| Error::from(e).with_context(context))
    }
}
