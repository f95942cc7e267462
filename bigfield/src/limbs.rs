//! Fixed-capacity little-endian limb vectors and the word-level helpers the
//! Montgomery engine is built from.
//!
//! A [`Limbs`] value always has room for [`MAX_LIMBS`] words; a given field
//! only ever touches its first `n` words and keeps the rest zero.

use num_bigint::BigUint;

/// Number of 64-bit words available to a residue.
pub const MAX_LIMBS: usize = 9;

/// Widest supported modulus, in bits.
pub const MAX_BITS: u32 = 64 * MAX_LIMBS as u32;

/// Little-endian limb storage for one residue.
pub(crate) type Limbs = [u64; MAX_LIMBS];

pub(crate) const ZERO: Limbs = [0; MAX_LIMBS];

/// Helper: Carrying addition
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Multiply-accumulate: `acc + a * b + carry`, returned as `(low, high)`.
///
/// The sum never exceeds `2^128 - 1`, so the high word cannot overflow.
#[inline]
pub(crate) const fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let wide = (acc as u128) + (a as u128) * (b as u128) + (carry as u128);
    (wide as u64, (wide >> 64) as u64)
}

/// `a + b` over the low `n` words, with the outgoing carry.
#[inline]
pub(crate) fn add_n(a: &Limbs, b: &Limbs, n: usize) -> (Limbs, bool) {
    let mut out = ZERO;
    let mut carry = false;
    for i in 0..n {
        let (sum, c) = carrying_add(a[i], b[i], carry);
        out[i] = sum;
        carry = c;
    }
    (out, carry)
}

/// `a - b` over the low `n` words, with the outgoing borrow.
#[inline]
pub(crate) fn sub_n(a: &Limbs, b: &Limbs, n: usize) -> (Limbs, bool) {
    let mut out = ZERO;
    let mut borrow = false;
    for i in 0..n {
        let (diff, b) = borrowing_sub(a[i], b[i], borrow);
        out[i] = diff;
        borrow = b;
    }
    (out, borrow)
}

/// `-m^{-1} mod 2^64` for an odd low word `m0`.
///
/// Newton iteration doubles the number of correct low bits each round,
/// starting from the single bit that `1` gets right for any odd `m0`.
pub(crate) const fn montgomery_mu(m0: u64) -> u64 {
    let mut inv: u64 = 1;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

/// Copy a big integer into limb storage. The caller guarantees it fits.
pub(crate) fn from_biguint(value: &BigUint) -> Limbs {
    let mut out = ZERO;
    for (slot, digit) in out.iter_mut().zip(value.to_u64_digits()) {
        *slot = digit;
    }
    out
}

/// Read the low `n` words back into a big integer.
pub(crate) fn to_biguint(limbs: &Limbs, n: usize) -> BigUint {
    let mut bytes = Vec::with_capacity(8 * n);
    for limb in &limbs[..n] {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// Bit `index` of a little-endian digit slice, as `0` or `1`.
#[inline]
pub(crate) fn bit(digits: &[u64], index: u64) -> u8 {
    let word = (index / 64) as usize;
    digits
        .get(word)
        .map_or(0, |limb| ((limb >> (index % 64)) & 1) as u8)
}
