//! Counter (CTR) mode with secure memory handling
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the data.
//! Encryption and decryption are the same operation and any data length is
//! accepted.
//!
//! The counter is incremented as a big-endian integer. By default the whole
//! 16-byte block is the counter, as in NIST SP 800-38A; a [`CounterWindow`]
//! restricts incrementing to a sub-range, leaving the other bytes fixed.
//! When the window overflows it wraps to zero.
//!
//! Unused keystream bytes from a partial block are kept and consumed first
//! by the next call, so splitting a message into arbitrary pieces produces
//! the same output as processing it at once.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::Iv;
use params::utils::symmetric::AES_BLOCK_SIZE;

/// Counter position within the counter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPosition {
    /// Counter occupies the first `counter_size` bytes of the block
    Prefix,

    /// Counter occupies the last `counter_size` bytes of the block
    Postfix,

    /// Counter starts at a specific offset within the block
    Custom(usize),
}

/// The byte range of the counter block that is incremented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterWindow {
    offset: usize,
    size: usize,
}

impl CounterWindow {
    /// The whole block is one 128-bit big-endian counter
    pub const FULL: Self = Self {
        offset: 0,
        size: AES_BLOCK_SIZE,
    };

    /// Creates a window of `size` bytes (1 to 16) at `position`
    pub fn new(position: CounterPosition, size: usize) -> Result<Self> {
        validate::parameter(
            (1..=AES_BLOCK_SIZE).contains(&size),
            "counter_size",
            "Counter size must be between 1 and 16 bytes",
        )?;

        let offset = match position {
            CounterPosition::Prefix => 0,
            CounterPosition::Postfix => AES_BLOCK_SIZE - size,
            CounterPosition::Custom(offset) => {
                validate::parameter(
                    offset <= AES_BLOCK_SIZE - size,
                    "counter_position",
                    "Counter with specified size doesn't fit at offset in block",
                )?;
                offset
            }
        };

        Ok(Self { offset, size })
    }

    /// First byte of the window
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Window length in bytes
    pub fn size(&self) -> usize {
        self.size
    }

    /// Adds one to the window, carrying from its last byte
    ///
    /// Returns `true` if the window wrapped around to zero.
    pub fn increment(&self, counter: &mut [u8; AES_BLOCK_SIZE]) -> bool {
        for byte in counter[self.offset..self.offset + self.size].iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                return false;
            }
        }
        true
    }
}

impl Default for CounterWindow {
    fn default() -> Self {
        Self::FULL
    }
}

/// One block of keystream and the position of the next unused byte
#[derive(Clone)]
pub struct Keystream {
    block: [u8; AES_BLOCK_SIZE],
    pos: usize,
}

impl Keystream {
    /// An empty keystream; the first byte requested generates a block
    pub fn new() -> Self {
        Self {
            block: [0u8; AES_BLOCK_SIZE],
            pos: AES_BLOCK_SIZE,
        }
    }

    /// Discards any unused keystream
    pub fn reset(&mut self) {
        self.block.zeroize();
        self.pos = AES_BLOCK_SIZE;
    }

    /// Number of buffered keystream bytes not yet used
    pub fn remaining(&self) -> usize {
        AES_BLOCK_SIZE - self.pos
    }

    /// XORs keystream into `data`, advancing `counter` once per new block
    pub fn apply<B: BlockCipher + ?Sized>(
        &mut self,
        cipher: &B,
        counter: &mut [u8; AES_BLOCK_SIZE],
        window: CounterWindow,
        data: &mut [u8],
    ) -> Result<()> {
        for byte in data.iter_mut() {
            if self.pos == AES_BLOCK_SIZE {
                self.refill(cipher, counter, window)?;
            }
            *byte ^= self.block[self.pos];
            self.pos += 1;
        }
        Ok(())
    }

    fn refill<B: BlockCipher + ?Sized>(
        &mut self,
        cipher: &B,
        counter: &mut [u8; AES_BLOCK_SIZE],
        window: CounterWindow,
    ) -> Result<()> {
        self.block = *counter;
        cipher.encrypt_block(&mut self.block)?;

        if window.increment(counter) {
            tracing::warn!(
                window_bytes = window.size(),
                "CTR counter wrapped around; keystream will repeat"
            );
        }

        self.pos = 0;
        Ok(())
    }
}

impl Default for Keystream {
    fn default() -> Self {
        Self::new()
    }
}

// Zeroizing must leave the keystream empty, never at position 0 of a
// cleared block.
impl Zeroize for Keystream {
    fn zeroize(&mut self) {
        self.reset();
    }
}

impl Drop for Keystream {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Keystream {}

/// Counter mode implementation with secure memory handling
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher + Zeroize> {
    cipher: B,
    counter: [u8; AES_BLOCK_SIZE],
    #[zeroize(skip)]
    window: CounterWindow,
    keystream: Keystream,
}

impl<B: BlockCipher + Zeroize> Ctr<B> {
    /// Creates a CTR instance that treats the whole IV as the counter
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self::with_window(cipher, iv, CounterWindow::FULL)
    }

    /// Creates a CTR instance with a restricted counter window
    ///
    /// * `cipher` - The block cipher to use
    /// * `iv` - The initial counter block
    /// * `counter_pos` - Position of the counter within the block
    /// * `counter_size` - Size of the counter in bytes (1-16)
    ///
    /// Bytes outside the window are never modified.
    pub fn with_counter_params(
        cipher: B,
        iv: &Iv,
        counter_pos: CounterPosition,
        counter_size: usize,
    ) -> Result<Self> {
        let window = CounterWindow::new(counter_pos, counter_size)?;
        Ok(Self::with_window(cipher, iv, window))
    }

    fn with_window(cipher: B, iv: &Iv, window: CounterWindow) -> Self {
        tracing::debug!(
            cipher = cipher.name(),
            mode = "CTR",
            counter_bytes = window.size(),
            "cipher mode initialized"
        );

        Self {
            cipher,
            counter: **iv,
            window,
            keystream: Keystream::new(),
        }
    }

    /// Processes data in place (encrypt or decrypt)
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.keystream
            .apply(&self.cipher, &mut self.counter, self.window, data)
    }

    /// Encrypts a message using CTR mode
    #[cfg(feature = "alloc")]
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.process(&mut out)?;
        Ok(out)
    }

    /// Decrypts a message using CTR mode
    ///
    /// In CTR mode, encryption and decryption are the same operation.
    #[cfg(feature = "alloc")]
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }

    /// Writes raw keystream into `output`
    ///
    /// Any buffered remainder is discarded first, so the output always
    /// starts at a block boundary.
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.fill(0);
        self.keystream.reset();
        self.process(output)
    }

    /// Replaces the counter block and discards buffered keystream
    pub fn set_iv(&mut self, iv: &Iv) {
        tracing::trace!(mode = "CTR", "IV replaced");
        self.counter = **iv;
        self.keystream.reset();
    }

    /// The counter block that will produce the next keystream block
    pub fn counter_block(&self) -> &[u8; AES_BLOCK_SIZE] {
        &self.counter
    }

    /// The incremented byte range
    pub fn window(&self) -> CounterWindow {
        self.window
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }
}
