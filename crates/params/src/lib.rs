//! Constant values for chap cryptographic operations
//!
//! This library provides the sizes and limits shared by every chap crate.

#![no_std]

pub mod symmetric;

pub use symmetric::*;
