//! Constants for the AES block cipher family

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes, independent of key size
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of 32-bit columns in the AES state (Nb)
pub const AES_NB: usize = 4;

/// Key length in 32-bit words (Nk) for AES-128
pub const AES128_NK: usize = 4;

/// Key length in 32-bit words (Nk) for AES-192
pub const AES192_NK: usize = 6;

/// Key length in 32-bit words (Nk) for AES-256
pub const AES256_NK: usize = 8;

/// Number of rounds (Nr) for AES-128
pub const AES128_ROUNDS: usize = 10;

/// Number of rounds (Nr) for AES-192
pub const AES192_ROUNDS: usize = 12;

/// Number of rounds (Nr) for AES-256
pub const AES256_ROUNDS: usize = 14;

/// Largest key schedule, in words: Nb * (Nr + 1) for AES-256
pub const AES_MAX_SCHEDULE_WORDS: usize = AES_NB * (AES256_ROUNDS + 1);
