//! Error handling for cryptographic primitives

use core::fmt;

use chap_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key of the wrong size
    KeyLength {
        /// Algorithm that rejected the key
        algorithm: &'static str,
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Nonce of the wrong size
    NonceLength {
        /// Algorithm that rejected the nonce
        algorithm: &'static str,
        /// Expected nonce length in bytes
        expected: usize,
        /// Actual nonce length in bytes
        actual: usize,
    },

    /// Authentication failure (e.g., AEAD tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Keystream request past the last 32-bit block counter
    CounterOverflow {
        /// Algorithm whose counter would wrap
        algorithm: &'static str,
        /// Bytes still available before the counter wraps
        limit: u64,
        /// Bytes requested
        requested: u64,
    },
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}", context, expected, actual)
            }
            Error::KeyLength { algorithm, expected, actual } => {
                write!(f, "Invalid {} key length: expected {}, got {}", algorithm, expected, actual)
            }
            Error::NonceLength { algorithm, expected, actual } => {
                write!(f, "Invalid {} nonce length: expected {}, got {}", algorithm, expected, actual)
            }
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::CounterOverflow { algorithm, limit, requested } => {
                write!(
                    f,
                    "{} block counter exhausted: {} bytes requested, {} available",
                    algorithm, requested, limit
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                reason,
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::KeyLength { algorithm, expected, actual } => CoreError::InvalidKeyLength {
                context: algorithm,
                expected,
                actual,
            },
            Error::NonceLength { algorithm, expected, actual } => CoreError::InvalidNonceLength {
                context: algorithm,
                expected,
                actual,
            },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
            },
            Error::CounterOverflow { algorithm, limit, requested } => CoreError::CounterOverflow {
                context: algorithm,
                limit,
                actual: requested,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
