//! 32-bit word primitives
//!
//! Every operation here is fixed-width: additions wrap modulo 2^32 and
//! rotations never leak bits past bit 31.

/// Add two words modulo 2^32
#[inline(always)]
#[must_use]
pub const fn add(x: u32, y: u32) -> u32 {
    x.wrapping_add(y)
}

/// Rotate a word right by `n` bits
#[inline(always)]
#[must_use]
pub const fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Message-schedule sigma 0: `rotr7 ^ rotr18 ^ shr3`
#[inline(always)]
#[must_use]
pub const fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// Message-schedule sigma 1: `rotr17 ^ rotr19 ^ shr10`
#[inline(always)]
#[must_use]
pub const fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

/// Compression Sigma 0, applied to register `a`
#[inline(always)]
#[must_use]
pub const fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Compression Sigma 1, applied to register `e`
#[inline(always)]
#[must_use]
pub const fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// Choose: bits of `f` where `e` is set, bits of `g` elsewhere
#[inline(always)]
#[must_use]
pub const fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// Majority vote of each bit position across `a`, `b`, `c`
#[inline(always)]
#[must_use]
pub const fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}
