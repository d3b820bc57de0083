//! AES round transformations on a single 128-bit state
//!
//! The state is a column-major 16-byte array: byte `4 * c + r` is row `r`
//! of column `c`. Column-wide operations read and write each column as a
//! big-endian `u32`, so row 0 sits in the most significant lane.

use byteorder::{BigEndian, ByteOrder};

use super::gf::{mul11, mul13, mul14, mul9, xtime};
use super::tables::{INV_SBOX, SBOX};

/// One block during transformation
pub type State = [u8; 16];

/// Reads column `c` as a word
#[inline(always)]
pub fn column(state: &State, c: usize) -> u32 {
    BigEndian::read_u32(&state[4 * c..4 * c + 4])
}

/// Writes column `c` from a word
#[inline(always)]
pub fn set_column(state: &mut State, c: usize, word: u32) {
    BigEndian::write_u32(&mut state[4 * c..4 * c + 4], word);
}

/// SubBytes step
pub fn sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

/// Inverse SubBytes
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

/// ShiftRows step: row `r` rotates left by `r` columns
pub fn shift_rows(state: &mut State) {
    let temp = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = temp[4 * ((c + r) % 4) + r];
        }
    }
}

/// Inverse ShiftRows: row `r` rotates right by `r` columns
pub fn inv_shift_rows(state: &mut State) {
    let temp = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = temp[4 * ((c + 4 - r) % 4) + r];
        }
    }
}

/// MixColumns step
///
/// Row `i` of the output is `{02}a_i ^ {03}a_(i+1) ^ a_(i+2) ^ a_(i+3)`.
/// Rotating the column word left by 8 bits moves `a_(i+1)` into lane `i`.
pub fn mix_columns(state: &mut State) {
    for c in 0..4 {
        let s = column(state, c);
        let s1 = s.rotate_left(8);
        let mixed = xtime(s ^ s1) ^ s1 ^ s.rotate_left(16) ^ s.rotate_left(24);
        set_column(state, c, mixed);
    }
}

/// Inverse MixColumns
///
/// Row `i` of the output is `{0e}a_i ^ {0b}a_(i+1) ^ {0d}a_(i+2) ^ {09}a_(i+3)`.
pub fn inv_mix_columns(state: &mut State) {
    for c in 0..4 {
        let s = column(state, c);
        let mixed = mul14(s)
            ^ mul11(s).rotate_left(8)
            ^ mul13(s).rotate_left(16)
            ^ mul9(s).rotate_left(24);
        set_column(state, c, mixed);
    }
}

/// AddRoundKey step: XOR each column with one round-key word
#[inline(always)]
pub fn add_round_key(state: &mut State, round_key: &[u32]) {
    for (c, &word) in round_key.iter().enumerate().take(4) {
        let mixed = column(state, c) ^ word;
        set_column(state, c, mixed);
    }
}
