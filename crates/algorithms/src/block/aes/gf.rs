//! GF(2⁸) arithmetic on packed byte lanes
//!
//! Every function works on a 32-bit word holding four independent field
//! elements, one per byte lane. Only the fixed MixColumns multipliers are
//! provided; they are built from `xtime` and XOR.

/// Reduction constant for x⁸ + x⁴ + x³ + x + 1
pub const REDUCTION: u32 = 0x1b;

/// Multiply each byte lane by {02}
///
/// The top bit of each lane is masked off before the shift so nothing
/// carries into the neighbouring lane.
#[inline(always)]
pub fn xtime(x: u32) -> u32 {
    ((x & 0x7f7f_7f7f) << 1) ^ (((x & 0x8080_8080) >> 7) * REDUCTION)
}

/// Multiply each byte lane by {03}
#[inline(always)]
pub fn mul3(x: u32) -> u32 {
    xtime(x) ^ x
}

/// Multiples {02}, {04}, {08} of each lane, used by InvMixColumns
#[inline(always)]
fn powers(x: u32) -> (u32, u32, u32) {
    let x2 = xtime(x);
    let x4 = xtime(x2);
    let x8 = xtime(x4);
    (x2, x4, x8)
}

/// Multiply each byte lane by {09}
#[inline(always)]
pub fn mul9(x: u32) -> u32 {
    let (_, _, x8) = powers(x);
    x8 ^ x
}

/// Multiply each byte lane by {0b}
#[inline(always)]
pub fn mul11(x: u32) -> u32 {
    let (x2, _, x8) = powers(x);
    x8 ^ x2 ^ x
}

/// Multiply each byte lane by {0d}
#[inline(always)]
pub fn mul13(x: u32) -> u32 {
    let (_, x4, x8) = powers(x);
    x8 ^ x4 ^ x
}

/// Multiply each byte lane by {0e}
#[inline(always)]
pub fn mul14(x: u32) -> u32 {
    let (x2, x4, x8) = powers(x);
    x8 ^ x4 ^ x2
}
