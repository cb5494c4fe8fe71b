//! Validation utilities for cryptographic primitives

use super::{Error, Result};
use chap_params::symmetric::CHACHA20POLY1305_MAX_MESSAGE_LEN;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a key length
#[inline(always)]
pub fn key_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::KeyLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a nonce length
#[inline(always)]
pub fn nonce_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::NonceLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a message fits in keystream blocks 1..=2^32-1
#[inline(always)]
pub fn message_length(algorithm: &'static str, actual: usize) -> Result<()> {
    let requested = actual as u64;
    if requested > CHACHA20POLY1305_MAX_MESSAGE_LEN {
        return Err(Error::CounterOverflow {
            algorithm,
            limit: CHACHA20POLY1305_MAX_MESSAGE_LEN,
            requested,
        });
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Authentication { algorithm });
    }
    Ok(())
}
