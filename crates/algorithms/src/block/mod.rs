//! Block cipher implementations
//!
//! This module contains the AES block cipher and the modes of operation
//! that turn single-block transforms into buffer-level encryption.
//!
//! ## Example usage
//!
//! ```
//! use rijndael_algorithms::block::{Aes, BlockCipher, Cbc};
//! use rijndael_algorithms::types::Iv;
//!
//! let key = [0x2bu8; 16];
//! let iv = Iv::new([0u8; 16]);
//!
//! let mut enc = Cbc::new(Aes::new(&key).unwrap(), &iv);
//! let mut dec = Cbc::new(Aes::new(&key).unwrap(), &iv);
//!
//! let mut buf = *b"exactly thirty-two bytes long!!!";
//! enc.encrypt_in_place(&mut buf).unwrap();
//! dec.decrypt_in_place(&mut buf).unwrap();
//!
//! assert_eq!(&buf, b"exactly thirty-two bytes long!!!");
//! ```

use zeroize::Zeroize;

use crate::error::Result;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{Aes, Aes128, Aes192, Aes256, KeySize};
pub use modes::{Cbc, CounterPosition, CounterWindow, Ctr, Ecb};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Single-block encryption and decryption
///
/// Implementations validate that the block is exactly one cipher block long.
pub trait BlockCipher {
    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the name of the block cipher
    fn name(&self) -> &'static str;
}

/// Block ciphers whose key size is fixed by the type
pub trait TypedBlockCipher: BlockCipher + Sized {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    fn new(key: &Self::Key) -> Self;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }
}
