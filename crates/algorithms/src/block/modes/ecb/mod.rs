//! Electronic Codebook (ECB) mode
//!
//! Every block is encrypted independently with the same key, so equal
//! plaintext blocks produce equal ciphertext blocks. ECB carries no state
//! between calls and a single instance can be shared across threads.
//!
//! Buffers must be a whole number of blocks. No padding is applied.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use params::utils::symmetric::AES_BLOCK_SIZE;

/// ECB mode over any block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize> Ecb<B> {
    /// Wraps a keyed block cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// Encrypts exactly one block in place
    pub fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.cipher.encrypt_block(block)
    }

    /// Decrypts exactly one block in place
    pub fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.cipher.decrypt_block(block)
    }

    /// Encrypts a block-aligned buffer in place
    pub fn encrypt_in_place(&self, buf: &mut [u8]) -> Result<()> {
        validate::block_aligned("ECB plaintext", buf.len(), AES_BLOCK_SIZE)?;
        for block in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(())
    }

    /// Decrypts a block-aligned buffer in place
    pub fn decrypt_in_place(&self, buf: &mut [u8]) -> Result<()> {
        validate::block_aligned("ECB ciphertext", buf.len(), AES_BLOCK_SIZE)?;
        for block in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(())
    }

    /// Encrypts a message into a new buffer
    #[cfg(feature = "alloc")]
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.encrypt_in_place(&mut out)?;
        Ok(out)
    }

    /// Decrypts a message into a new buffer
    #[cfg(feature = "alloc")]
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut out = ciphertext.to_vec();
        self.decrypt_in_place(&mut out)?;
        Ok(out)
    }
}
