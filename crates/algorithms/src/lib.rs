//! AES block cipher primitives and modes of operation
//!
//! This crate implements AES-128, AES-192 and AES-256 (FIPS 197) together
//! with the ECB, CBC and CTR modes of NIST SP 800-38A. It is usable in both
//! `std` and `no_std` environments; the `alloc` feature adds the helpers that
//! return owned buffers.
//!
//! # Security Features
//!
//! - Key schedules, mode state and key containers are zeroized on drop
//! - Constant-time equality for key and IV containers
//! - Buffers that are not block-aligned are rejected, never truncated
//!
//! The S-box is a lookup table, so block operations are not constant-time
//! with respect to cache timing.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Key and IV containers
pub mod types;
pub use types::{Iv, Nonce, SecretBytes};

// Block cipher and mode implementations
pub mod block;
pub use block::{
    Aes, Aes128, Aes192, Aes256, BlockCipher, Cbc, CipherAlgorithm, CounterPosition,
    CounterWindow, Ctr, Ecb, KeySize, TypedBlockCipher,
};
