//! Bit-scan fallbacks for targets without count-zeros instructions.
//!
//! Every function takes the word widened to `u128`; the narrower widths are
//! zero-extended, so only `leading_zeros` needs the original width.

// Repeating byte patterns for the SWAR population count.
const M1: u128 = u128::MAX / 3;
const M2: u128 = u128::MAX / 5;
const M4: u128 = u128::MAX / 17;
const H01: u128 = u128::MAX / 255;

/// Count of trailing zeros by binary search on bit halves. Returns `width`
/// for zero.
pub(crate) const fn trailing_zeros(mut x: u128, width: u32) -> u32 {
    if x == 0 {
        return width;
    }
    let mut n = 0;
    let mut shift = 64;
    while shift > 0 {
        let low = (1u128 << shift) - 1;
        if x & low == 0 {
            n += shift;
            x >>= shift;
        }
        shift >>= 1;
    }
    n
}

/// Index of the most significant set bit, `-1` for zero.
pub(crate) const fn floor_log2(mut x: u128) -> i32 {
    if x == 0 {
        return -1;
    }
    let mut n = 0;
    let mut shift = 64;
    while shift > 0 {
        if x >> shift != 0 {
            n += shift;
            x >>= shift;
        }
        shift >>= 1;
    }
    n
}

/// Count of leading zeros within the low `width` bits. Returns `width` for
/// zero.
pub(crate) const fn leading_zeros(x: u128, width: u32) -> u32 {
    debug_assert!(width == 128 || x >> width == 0);
    (width as i32 - 1 - floor_log2(x)) as u32
}

pub(crate) const fn count_ones(mut x: u128) -> u32 {
    x -= (x >> 1) & M1;
    x = (x & M2) + ((x >> 2) & M2);
    x = (x + (x >> 4)) & M4;
    (x.wrapping_mul(H01) >> 120) as u32
}
