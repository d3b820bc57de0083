//! AES block cipher implementations
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128-, 192- and 256-bit keys.
//!
//! [`Aes`] selects the key size at runtime from the key length. [`Aes128`],
//! [`Aes192`] and [`Aes256`] fix it in the type and take a [`SecretBytes`]
//! key. All of them share one key schedule and one round implementation;
//! the only differences between key sizes are Nk, Nr and the schedule
//! length.
//!
//! ## Side channels
//!
//! SubBytes uses straightforward table lookups. Memory access patterns depend
//! on the data, so this implementation makes no constant-time claims.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm, TypedBlockCipher};
use crate::error::{validate, Result};
use crate::types::SecretBytes;
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

pub mod gf;
pub mod key_schedule;
pub mod round;
pub mod tables;

pub use key_schedule::{KeySchedule, KeySize};
pub use round::State;

/// AES with the key size chosen at runtime
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Creates a cipher from a 16-, 24- or 32-byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: KeySchedule::new(key)?,
        })
    }

    fn with_key_size(key_size: KeySize, key: &[u8]) -> Self {
        Self {
            schedule: KeySchedule::expand(key_size, key),
        }
    }

    /// The key size selected at construction
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Number of rounds (Nr)
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// The expanded round keys
    pub fn key_schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts one state in place (the FIPS 197 Cipher)
    pub fn encrypt_state(&self, state: &mut State) {
        let nr = self.schedule.rounds();

        round::add_round_key(state, self.schedule.round_key(0));

        // Nr - 1 full rounds, then a final round without MixColumns
        for r in 1..nr {
            round::sub_bytes(state);
            round::shift_rows(state);
            round::mix_columns(state);
            round::add_round_key(state, self.schedule.round_key(r));
        }

        round::sub_bytes(state);
        round::shift_rows(state);
        round::add_round_key(state, self.schedule.round_key(nr));
    }

    /// Decrypts one state in place (the FIPS 197 InvCipher)
    pub fn decrypt_state(&self, state: &mut State) {
        let nr = self.schedule.rounds();

        round::add_round_key(state, self.schedule.round_key(nr));

        // Key addition must come before InvMixColumns in every round
        for r in (1..nr).rev() {
            round::inv_shift_rows(state);
            round::inv_sub_bytes(state);
            round::add_round_key(state, self.schedule.round_key(r));
            round::inv_mix_columns(state);
        }

        round::inv_shift_rows(state);
        round::inv_sub_bytes(state);
        round::add_round_key(state, self.schedule.round_key(0));
    }

    fn process_block(&self, block: &mut [u8], f: fn(&Self, &mut State)) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = [0u8; AES_BLOCK_SIZE];
        state.copy_from_slice(block);
        f(self, &mut state);
        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }
}

impl BlockCipher for Aes {
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.process_block(block, Self::encrypt_state)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.process_block(block, Self::decrypt_state)
    }

    fn name(&self) -> &'static str {
        self.key_size().name()
    }
}

impl core::fmt::Debug for Aes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aes")
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}

macro_rules! typed_aes {
    ($name:ident, $algorithm:ident, $size:expr, $key_size:expr, $label:expr) => {
        #[doc = concat!("Type-level constants for ", $label)]
        pub enum $algorithm {}

        impl CipherAlgorithm for $algorithm {
            const KEY_SIZE: usize = $size;
            const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

            fn name() -> &'static str {
                $label
            }
        }

        #[doc = concat!($label, " block cipher")]
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            inner: Aes,
        }

        impl $name {
            /// The underlying runtime-sized cipher
            pub fn as_aes(&self) -> &Aes {
                &self.inner
            }
        }

        impl TypedBlockCipher for $name {
            type Algorithm = $algorithm;
            type Key = SecretBytes<$size>;

            fn new(key: &Self::Key) -> Self {
                Self {
                    inner: Aes::with_key_size($key_size, key.as_ref()),
                }
            }
        }

        impl BlockCipher for $name {
            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                self.inner.encrypt_block(block)
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                self.inner.decrypt_block(block)
            }

            fn name(&self) -> &'static str {
                $label
            }
        }
    };
}

typed_aes!(Aes128, Aes128Algorithm, AES128_KEY_SIZE, KeySize::Aes128, "AES-128");
typed_aes!(Aes192, Aes192Algorithm, AES192_KEY_SIZE, KeySize::Aes192, "AES-192");
typed_aes!(Aes256, Aes256Algorithm, AES256_KEY_SIZE, KeySize::Aes256, "AES-256");
