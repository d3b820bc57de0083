//! # rijndael
//!
//! AES-128, AES-192 and AES-256 with the ECB, CBC and CTR modes of operation.
//!
//! ## Usage
//!
//! ```
//! use rijndael::AesContext;
//!
//! let key = [0x2bu8; 16];
//! let iv = [0u8; 16];
//!
//! let mut ctx = AesContext::with_iv(&key, &iv).unwrap();
//! let mut buf = *b"any length works in CTR";
//! ctx.ctr_xcrypt_buffer(&mut buf).unwrap();
//!
//! ctx.set_iv(&iv).unwrap();
//! ctx.ctr_xcrypt_buffer(&mut buf).unwrap();
//! assert_eq!(&buf, b"any length works in CTR");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support in the primitives
//!
//! ## Crate Structure
//!
//! This is a facade crate over two sub-crates:
//!
//! - [`rijndael-algorithms`]: AES core, typed ciphers and mode drivers
//! - [`rijndael-params`]: key, block and round constants

pub mod context;
pub mod error;

pub use context::AesContext;
pub use error::{Error, Result};

// Sub-crate re-exports
pub use rijndael_algorithms as algorithms;
pub use rijndael_params as params;

/// Common imports for rijndael users
pub mod prelude {
    pub use crate::{AesContext, Error, Result};

    pub use crate::algorithms::block::{
        Aes, Aes128, Aes192, Aes256, BlockCipher, Cbc, CounterPosition, CounterWindow, Ctr, Ecb,
        KeySize, TypedBlockCipher,
    };
    pub use crate::algorithms::types::{Iv, SecretBytes};
}
