//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode XORs each plaintext block with the previous ciphertext block
//! before encryption. The first block is XORed with an initialization
//! vector (IV).
//!
//! The running IV is updated after every block and carried between calls,
//! so a message may be processed in several block-aligned pieces. Buffers
//! that are not a whole number of blocks are rejected before anything is
//! modified.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::Iv;
use params::utils::symmetric::AES_BLOCK_SIZE;

#[inline(always)]
fn xor_block(block: &mut [u8], other: &[u8; AES_BLOCK_SIZE]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}

/// Encrypts a block-aligned buffer in place, chaining through `iv`
///
/// On return `iv` holds the last ciphertext block.
pub fn encrypt_blocks<B: BlockCipher + ?Sized>(
    cipher: &B,
    iv: &mut [u8; AES_BLOCK_SIZE],
    buf: &mut [u8],
) -> Result<()> {
    validate::block_aligned("CBC plaintext", buf.len(), AES_BLOCK_SIZE)?;

    for block in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
        xor_block(block, iv);
        cipher.encrypt_block(block)?;
        iv.copy_from_slice(block);
    }

    Ok(())
}

/// Decrypts a block-aligned buffer in place, chaining through `iv`
///
/// On return `iv` holds the last ciphertext block that was consumed.
pub fn decrypt_blocks<B: BlockCipher + ?Sized>(
    cipher: &B,
    iv: &mut [u8; AES_BLOCK_SIZE],
    buf: &mut [u8],
) -> Result<()> {
    validate::block_aligned("CBC ciphertext", buf.len(), AES_BLOCK_SIZE)?;

    let mut saved = [0u8; AES_BLOCK_SIZE];
    for block in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
        saved.copy_from_slice(block);
        cipher.decrypt_block(block)?;
        xor_block(block, iv);
        *iv = saved;
    }
    saved.zeroize();

    Ok(())
}

/// CBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Iv,
}

impl<B: BlockCipher + Zeroize> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        tracing::debug!(cipher = cipher.name(), mode = "CBC", "cipher mode initialized");

        Self {
            cipher,
            iv: iv.clone(),
        }
    }

    /// Replaces the running IV, e.g. to start a new message
    pub fn set_iv(&mut self, iv: &Iv) {
        tracing::trace!(mode = "CBC", "IV replaced");
        self.iv = iv.clone();
    }

    /// The current running IV
    ///
    /// After a call this is the last ciphertext block processed.
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// Encrypts a block-aligned buffer in place
    pub fn encrypt_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        encrypt_blocks(&self.cipher, &mut self.iv, buf)
    }

    /// Decrypts a block-aligned buffer in place
    pub fn decrypt_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        decrypt_blocks(&self.cipher, &mut self.iv, buf)
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size. Padding, if any,
    /// is the caller's responsibility.
    #[cfg(feature = "alloc")]
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.encrypt_in_place(&mut out)?;
        Ok(out)
    }

    /// Decrypts a message using CBC mode
    #[cfg(feature = "alloc")]
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut out = ciphertext.to_vec();
        self.decrypt_in_place(&mut out)?;
        Ok(out)
    }
}
