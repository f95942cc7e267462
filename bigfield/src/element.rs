//! Residues modulo a [`PrimeField`], held in Montgomery form.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::limbs::{self, Limbs, ZERO};
use crate::{Error, PrimeField};

/// An element of `Z/pZ` tied to the field that produced it.
///
/// Always fully reduced, so two elements of the same field are equal
/// exactly when their limbs are.
#[derive(Copy, Clone)]
pub struct FieldElement<'a> {
    /// Montgomery form: value * R mod p
    limbs: Limbs,
    field: &'a PrimeField,
}

/// A field element detached from its field, still in Montgomery form.
///
/// Lets a value that owns a [`PrimeField`] keep precomputed constants
/// without borrowing from itself. Only meaningful for the field that
/// produced it; see [`PrimeField::from_residue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Residue(pub(crate) Limbs);

impl<'a> FieldElement<'a> {
    #[inline]
    pub(crate) fn from_montgomery(limbs: Limbs, field: &'a PrimeField) -> Self {
        FieldElement { limbs, field }
    }

    /// The field this element lives in.
    #[inline]
    pub fn field(&self) -> &'a PrimeField {
        self.field
    }

    /// The Montgomery limbs, without the field reference.
    #[inline]
    pub fn residue(&self) -> Residue {
        Residue(self.limbs)
    }

    /// Canonical integer value in `[0, p)`.
    pub fn to_biguint(&self) -> BigUint {
        let canonical = self.field.from_montgomery_limbs(&self.limbs);
        limbs::to_biguint(&canonical, self.field.limbs())
    }

    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.limbs[..].ct_eq(&ZERO[..])
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// `self^exp` for a public exponent.
    ///
    /// Every bit of the exponent costs one squaring and one multiplication;
    /// the bit only decides which result is kept.
    pub fn pow(&self, exp: &BigUint) -> Self {
        self.pow_digits(&exp.to_u64_digits(), exp.bits())
    }

    fn pow_digits(&self, exp: &[u64], bits: u64) -> Self {
        let mut acc = self.field.one();
        for i in (0..bits).rev() {
            acc = acc.square();
            let product = acc * *self;
            acc = Self::conditional_select(&acc, &product, Choice::from(limbs::bit(exp, i)));
        }
        acc
    }

    /// Multiplicative inverse via Fermat's little theorem, `self^(p-2)`.
    ///
    /// The candidate is checked against `self * inv == 1`, which rejects
    /// zero and any value a composite modulus cannot invert.
    pub fn invert(&self) -> Result<Self, Error> {
        let (exp, bits) = self.field.inversion_exponent();
        let candidate = self.pow_digits(exp, bits);
        if bool::from((candidate * *self).ct_eq(&self.field.one())) {
            Ok(candidate)
        } else {
            Err(Error::NotInvertible)
        }
    }

    #[inline]
    fn check_field(&self, rhs: &Self) {
        debug_assert!(
            core::ptr::eq(self.field, rhs.field) || self.field == rhs.field,
            "mixing elements of different fields"
        );
    }
}

impl ConstantTimeEq for FieldElement<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.check_field(other);
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl ConditionallySelectable for FieldElement<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement {
            limbs: Limbs::conditional_select(&a.limbs, &b.limbs, choice),
            field: a.field,
        }
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement<'_> {}

impl Hash for FieldElement<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

// Arithmetic operations
impl Add for FieldElement<'_> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.check_field(&rhs);
        FieldElement {
            limbs: self.field.add_limbs(&self.limbs, &rhs.limbs),
            field: self.field,
        }
    }
}

impl AddAssign for FieldElement<'_> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for FieldElement<'_> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.check_field(&rhs);
        FieldElement {
            limbs: self.field.sub_limbs(&self.limbs, &rhs.limbs),
            field: self.field,
        }
    }
}

impl SubAssign for FieldElement<'_> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for FieldElement<'_> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        FieldElement {
            limbs: self.field.sub_limbs(&ZERO, &self.limbs),
            field: self.field,
        }
    }
}

impl Mul for FieldElement<'_> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.check_field(&rhs);
        FieldElement {
            limbs: self.field.mont_mul(&self.limbs, &rhs.limbs),
            field: self.field,
        }
    }
}

impl MulAssign for FieldElement<'_> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Display and Debug
impl Display for FieldElement<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.to_biguint())
    }
}

impl Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self)
    }
}
