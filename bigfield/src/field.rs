//! Prime field description for a modulus chosen at runtime.
//!
//! Residues are kept in Montgomery form: a value `x` is stored as
//! `x * R mod p` with `R = 2^(64n)`, where `n` is the number of 64-bit
//! words the modulus occupies.

use core::fmt::{self, Debug, Formatter};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use subtle::{Choice, ConditionallySelectable};

use crate::limbs::{self, add_n, mac, sub_n, Limbs, MAX_BITS, MAX_LIMBS, ZERO};
use crate::{Error, FieldElement, Residue};

/// Arithmetic context for integers modulo an odd `p`.
///
/// Built once per modulus and then shared read-only; every
/// [`FieldElement`] borrows the field it belongs to.
#[derive(Clone)]
pub struct PrimeField {
    modulus: BigUint,
    /// Modulus limbs
    p: Limbs,
    /// Active limb count
    n: usize,
    /// -p^{-1} mod 2^64 (Montgomery parameter mu)
    mu: u64,
    /// R mod p, i.e. one in Montgomery form
    r: Limbs,
    /// R^2 mod p (for Montgomery conversion)
    r2: Limbs,
    /// p - 2, the Fermat inversion exponent
    p_minus_2: Limbs,
}

impl PrimeField {
    /// Prepare Montgomery arithmetic modulo `modulus`.
    ///
    /// The modulus must be odd, greater than 3 and at most
    /// [`MAX_BITS`](crate::MAX_BITS) wide. Primality is not checked; with a
    /// composite modulus ring operations stay correct but
    /// [`FieldElement::invert`] may report [`Error::NotInvertible`].
    pub fn new(modulus: &BigUint) -> Result<Self, Error> {
        if modulus <= &BigUint::from(3u8) || modulus.is_even() {
            return Err(Error::InvalidModulus);
        }
        let bits = modulus.bits();
        if bits > u64::from(MAX_BITS) {
            return Err(Error::ModulusTooLarge { max_bits: MAX_BITS });
        }

        let n = ((bits + 63) / 64) as usize;
        let r = (BigUint::one() << (64 * n)) % modulus;
        let r2 = (&r * &r) % modulus;
        let p = limbs::from_biguint(modulus);

        Ok(PrimeField {
            modulus: modulus.clone(),
            p,
            n,
            mu: limbs::montgomery_mu(p[0]),
            r: limbs::from_biguint(&r),
            r2: limbs::from_biguint(&r2),
            p_minus_2: limbs::from_biguint(&(modulus - 2u32)),
        })
    }

    /// The modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Number of 64-bit words a residue occupies.
    pub fn limbs(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn zero(&self) -> FieldElement<'_> {
        FieldElement::from_montgomery(ZERO, self)
    }

    #[inline]
    pub fn one(&self) -> FieldElement<'_> {
        FieldElement::from_montgomery(self.r, self)
    }

    /// Map a non-negative integer into the field, reducing it first.
    pub fn element(&self, value: &BigUint) -> FieldElement<'_> {
        let canonical = limbs::from_biguint(&(value % &self.modulus));
        FieldElement::from_montgomery(self.mont_mul(&canonical, &self.r2), self)
    }

    /// Reattach a residue taken from an element of this field.
    #[inline]
    pub fn from_residue(&self, residue: Residue) -> FieldElement<'_> {
        FieldElement::from_montgomery(residue.0, self)
    }

    /// Map a possibly negative integer into the field.
    pub fn element_signed(&self, value: &BigInt) -> FieldElement<'_> {
        self.element(&self.reduce(value))
    }

    pub fn element_u64(&self, value: u64) -> FieldElement<'_> {
        self.element(&BigUint::from(value))
    }

    /// Canonical representative of `value` in `[0, p)`.
    pub fn reduce(&self, value: &BigInt) -> BigUint {
        reduce_signed(value, &self.modulus)
    }

    /// `(x + y) mod p`
    pub fn add(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (self.element(x) + self.element(y)).to_biguint()
    }

    /// `(x - y) mod p`
    pub fn sub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (self.element(x) - self.element(y)).to_biguint()
    }

    /// `(x * y) mod p`
    pub fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (self.element(x) * self.element(y)).to_biguint()
    }

    /// `x^{-1} mod p`
    pub fn inverse(&self, x: &BigUint) -> Result<BigUint, Error> {
        Ok(self.element(x).invert()?.to_biguint())
    }

    /// Fermat exponent `p - 2` and its bit length.
    #[inline]
    pub(crate) fn inversion_exponent(&self) -> (&[u64], u64) {
        (&self.p_minus_2[..self.n], self.bits())
    }

    /// Modular addition of two Montgomery residues.
    #[inline]
    pub(crate) fn add_limbs(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let (sum, carry) = add_n(a, b, self.n);
        self.reduce_once(&sum, Choice::from(carry as u8))
    }

    /// Modular subtraction of two Montgomery residues.
    #[inline]
    pub(crate) fn sub_limbs(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let (diff, borrow) = sub_n(a, b, self.n);
        let (wrapped, _) = add_n(&diff, &self.p, self.n);
        Limbs::conditional_select(&diff, &wrapped, Choice::from(borrow as u8))
    }

    /// Montgomery multiplication: `a * b * R^{-1} mod p`.
    ///
    /// Coarsely integrated operand scanning: each outer round multiplies in
    /// one word of `b` and immediately reduces one word, so the accumulator
    /// never grows past `n + 2` words and stays below `2p`.
    pub(crate) fn mont_mul(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let n = self.n;
        let mut t = [0u64; MAX_LIMBS + 2];

        for i in 0..n {
            let mut carry = 0u64;
            for j in 0..n {
                let (lo, hi) = mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
            }
            let (lo, overflow) = t[n].overflowing_add(carry);
            t[n] = lo;
            t[n + 1] = overflow as u64;

            let m = t[0].wrapping_mul(self.mu);
            let (_, mut carry) = mac(t[0], m, self.p[0], 0);
            for j in 1..n {
                let (lo, hi) = mac(t[j], m, self.p[j], carry);
                t[j - 1] = lo;
                carry = hi;
            }
            let (lo, overflow) = t[n].overflowing_add(carry);
            t[n - 1] = lo;
            t[n] = t[n + 1] + overflow as u64;
        }

        let mut result = ZERO;
        result[..n].copy_from_slice(&t[..n]);
        self.reduce_once(&result, Choice::from(t[n] as u8))
    }

    /// Leave Montgomery form.
    #[inline]
    pub(crate) fn from_montgomery_limbs(&self, a: &Limbs) -> Limbs {
        let mut one = ZERO;
        one[0] = 1;
        self.mont_mul(a, &one)
    }

    /// Subtract `p` once from a value below `2p`, where `overflow` marks a
    /// carry out of the top word.
    #[inline]
    fn reduce_once(&self, value: &Limbs, overflow: Choice) -> Limbs {
        let (diff, borrow) = sub_n(value, &self.p, self.n);
        let keep_diff = overflow | !Choice::from(borrow as u8);
        Limbs::conditional_select(value, &diff, keep_diff)
    }
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Eq for PrimeField {}

impl Debug for PrimeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeField(0x{:x})", self.modulus)
    }
}

/// `value mod modulus` in `[0, modulus)`, for any positive modulus.
pub(crate) fn reduce_signed(value: &BigInt, modulus: &BigUint) -> BigUint {
    debug_assert!(!modulus.is_zero());
    let modulus = BigInt::from(modulus.clone());
    value.mod_floor(&modulus).magnitude().clone()
}
