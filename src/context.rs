//! A single AES context covering the ECB, CBC and CTR operations
//!
//! [`AesContext`] holds one expanded key and one 16-byte running value. CBC
//! uses the running value as its chaining IV and CTR uses it as the counter
//! block, so switching modes on one context continues from whatever the
//! previous operation left behind. Call [`AesContext::set_iv`] between
//! messages.

use core::fmt;

use rijndael_algorithms::block::modes::{cbc, ctr::Keystream, CounterWindow};
use rijndael_algorithms::block::{Aes, BlockCipher, KeySize};
use rijndael_algorithms::validate;
use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;

/// Expanded key plus the running IV / counter block
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesContext {
    cipher: Aes,
    iv: [u8; AES_BLOCK_SIZE],
}

impl AesContext {
    /// Expands `key` and starts with an all-zero IV
    ///
    /// The key must be 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher = Aes::new(key)?;
        let key_size = cipher.key_size();

        tracing::debug!(
            key_bits = key_size.bits(),
            rounds = key_size.rounds(),
            mode = "context",
            "AES context initialized"
        );

        Ok(Self {
            cipher,
            iv: [0u8; AES_BLOCK_SIZE],
        })
    }

    /// Expands `key` and sets the initial IV / counter block
    pub fn with_iv(key: &[u8], iv: &[u8]) -> Result<Self> {
        validate::length("AES IV", iv.len(), AES_BLOCK_SIZE)?;
        let mut ctx = Self::new(key)?;
        ctx.iv.copy_from_slice(iv);
        Ok(ctx)
    }

    /// Replaces the running IV without re-expanding the key
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::length("AES IV", iv.len(), AES_BLOCK_SIZE)?;
        tracing::trace!("IV replaced");
        self.iv.copy_from_slice(iv);
        Ok(())
    }

    /// The current IV / counter block
    pub fn iv(&self) -> &[u8; AES_BLOCK_SIZE] {
        &self.iv
    }

    /// Key size chosen from the key length
    pub fn key_size(&self) -> KeySize {
        self.cipher.key_size()
    }

    /// Encrypts one 16-byte block in place
    pub fn ecb_encrypt(&self, block: &mut [u8]) -> Result<()> {
        Ok(self.cipher.encrypt_block(block)?)
    }

    /// Decrypts one 16-byte block in place
    pub fn ecb_decrypt(&self, block: &mut [u8]) -> Result<()> {
        Ok(self.cipher.decrypt_block(block)?)
    }

    /// CBC-encrypts a block-aligned buffer in place
    ///
    /// The IV advances to the last ciphertext block. A misaligned buffer is
    /// rejected and neither the buffer nor the IV is modified.
    pub fn cbc_encrypt_buffer(&mut self, buf: &mut [u8]) -> Result<()> {
        Ok(cbc::encrypt_blocks(&self.cipher, &mut self.iv, buf)?)
    }

    /// CBC-decrypts a block-aligned buffer in place
    pub fn cbc_decrypt_buffer(&mut self, buf: &mut [u8]) -> Result<()> {
        Ok(cbc::decrypt_blocks(&self.cipher, &mut self.iv, buf)?)
    }

    /// CTR-encrypts or decrypts a buffer of any length in place
    ///
    /// The whole 16-byte running value is the big-endian counter. Every call
    /// starts on a fresh keystream block: bytes left unused at the end of a
    /// partial block are dropped, and the counter has already moved past
    /// that block. Use [`Ctr`](rijndael_algorithms::block::Ctr) to carry the
    /// remainder into the next call.
    pub fn ctr_xcrypt_buffer(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut keystream = Keystream::new();
        Ok(keystream.apply(&self.cipher, &mut self.iv, CounterWindow::FULL, buf)?)
    }
}

impl fmt::Debug for AesContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesContext")
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}
