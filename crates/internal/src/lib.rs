//! Internal utilities for the chap AEAD
//!
//! Constant-time comparison and selection helpers for tag verification and
//! the Poly1305 final reduction.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_select_u32};
