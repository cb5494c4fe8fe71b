//! Error type definitions for cryptographic operations

/// Primary error type for chap operations
///
/// None of the variants carry key, keystream, tag or plaintext bytes; only
/// public lengths and static context strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Key is not the size the algorithm requires
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid key length (expected {expected}, got {actual})")
    )]
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Nonce is not the size the algorithm requires
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid nonce length (expected {expected}, got {actual})")
    )]
    InvalidNonceLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Any other length violation, e.g. an input shorter than the tag
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length (expected {expected}, got {actual})")
    )]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Tag verification failed; no plaintext was released
    #[cfg_attr(feature = "std", error("Authentication failed: {context}"))]
    AuthenticationFailed { context: &'static str },

    /// Message would need keystream blocks beyond the 32-bit counter
    #[cfg_attr(
        feature = "std",
        error("{context}: block counter overflow ({actual} bytes exceeds limit of {limit})")
    )]
    CounterOverflow {
        context: &'static str,
        limit: u64,
        actual: u64,
    },

    /// Invalid parameter error
    #[cfg_attr(feature = "std", error("{context}: {reason}"))]
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for chap operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context string of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyLength { expected, actual, .. } => Self::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            Self::InvalidNonceLength { expected, actual, .. } => Self::InvalidNonceLength {
                context,
                expected,
                actual,
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed { context },
            Self::CounterOverflow { limit, actual, .. } => Self::CounterOverflow {
                context,
                limit,
                actual,
            },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
        }
    }

    /// True for the authentication failure that must never release plaintext
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKeyLength { context, expected, actual } => {
                write!(f, "{}: invalid key length (expected {}, got {})", context, expected, actual)
            }
            Self::InvalidNonceLength { context, expected, actual } => {
                write!(f, "{}: invalid nonce length (expected {}, got {})", context, expected, actual)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            }
            Self::CounterOverflow { context, limit, actual } => {
                write!(
                    f,
                    "{}: block counter overflow ({} bytes exceeds limit of {})",
                    context, actual, limit
                )
            }
            Self::InvalidParameter { context, reason } => write!(f, "{}: {}", context, reason),
        }
    }
}
