//! AES key expansion (FIPS 197 §5.2)

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::tables::{RCON, SBOX};
use crate::error::{Error, Result};
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_NK, AES128_ROUNDS, AES192_KEY_SIZE, AES192_NK, AES192_ROUNDS,
    AES256_KEY_SIZE, AES256_NK, AES256_ROUNDS, AES_MAX_SCHEDULE_WORDS, AES_NB,
};

/// The three AES key lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds
    Aes128,
    /// 192-bit key, 12 rounds
    Aes192,
    /// 256-bit key, 14 rounds
    Aes256,
}

impl KeySize {
    /// Select the key size from a key length in bytes
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            AES128_KEY_SIZE => Ok(KeySize::Aes128),
            AES192_KEY_SIZE => Ok(KeySize::Aes192),
            AES256_KEY_SIZE => Ok(KeySize::Aes256),
            actual => Err(Error::KeyLength { actual }),
        }
    }

    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_KEY_SIZE,
            KeySize::Aes192 => AES192_KEY_SIZE,
            KeySize::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Key length in 32-bit words (Nk)
    pub const fn nk(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_NK,
            KeySize::Aes192 => AES192_NK,
            KeySize::Aes256 => AES256_NK,
        }
    }

    /// Number of rounds (Nr)
    pub const fn rounds(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_ROUNDS,
            KeySize::Aes192 => AES192_ROUNDS,
            KeySize::Aes256 => AES256_ROUNDS,
        }
    }

    /// Number of words in the expanded schedule, Nb * (Nr + 1)
    pub const fn schedule_words(self) -> usize {
        AES_NB * (self.rounds() + 1)
    }

    /// Key length in bits
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            KeySize::Aes128 => "AES-128",
            KeySize::Aes192 => "AES-192",
            KeySize::Aes256 => "AES-256",
        }
    }
}

/// Applies the S-box to each byte of a word
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let [a, b, c, d] = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[a as usize],
        SBOX[b as usize],
        SBOX[c as usize],
        SBOX[d as usize],
    ])
}

/// Rotates a word left by one byte: [a0,a1,a2,a3] -> [a1,a2,a3,a0]
#[inline(always)]
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Expanded round keys
///
/// Word `i` holds schedule bytes `4i..4i+4` in big-endian order. Storage is
/// sized for AES-256; only the first `Nb * (Nr + 1)` words are meaningful.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: [u32; AES_MAX_SCHEDULE_WORDS],
    #[zeroize(skip)]
    key_size: KeySize,
}

impl KeySchedule {
    /// Validates the key length and expands the key
    pub fn new(key: &[u8]) -> Result<Self> {
        let key_size = KeySize::from_key_len(key.len())?;
        Ok(Self::expand(key_size, key))
    }

    /// Expands a key whose length already matches `key_size`
    pub(crate) fn expand(key_size: KeySize, key: &[u8]) -> Self {
        debug_assert_eq!(key.len(), key_size.key_len());

        let nk = key_size.nk();
        let total = key_size.schedule_words();
        let mut words = [0u32; AES_MAX_SCHEDULE_WORDS];

        // The first Nk words are the key itself
        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
            *word = BigEndian::read_u32(chunk);
        }

        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ ((RCON[i / nk] as u32) << 24);
            } else if nk == AES256_NK && i % nk == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        Self { words, key_size }
    }

    /// The key size this schedule was derived for
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Number of rounds (Nr)
    pub fn rounds(&self) -> usize {
        self.key_size.rounds()
    }

    /// All schedule words, exactly `Nb * (Nr + 1)` of them
    pub fn words(&self) -> &[u32] {
        &self.words[..self.key_size.schedule_words()]
    }

    /// The four words XORed into the state in `round`
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    #[inline(always)]
    pub fn round_key(&self, round: usize) -> &[u32] {
        &self.words()[round * AES_NB..(round + 1) * AES_NB]
    }
}

impl core::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KeySchedule<{}>([REDACTED])", self.key_size.name())
    }
}
