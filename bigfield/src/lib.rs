//! Modular arithmetic over large odd prime moduli.
//!
//! The modulus is chosen at runtime (curve moduli range from 192 to 521
//! bits), so residues are fixed-capacity limb arrays in Montgomery form
//! rather than per-modulus types. Integers cross the API boundary as
//! [`num_bigint`] values; every result handed back is the canonical
//! representative in `[0, p)`.
//!
//! Multiplication, selection and exponentiation follow a fixed operation
//! schedule for a given modulus width, and inversion uses Fermat's little
//! theorem rather than the data-dependent extended Euclidean algorithm.

mod element;
mod error;
mod field;
mod limbs;

pub use element::{FieldElement, Residue};
pub use error::Error;
pub use field::PrimeField;
pub use limbs::{MAX_BITS, MAX_LIMBS};
pub use num_bigint::{BigInt, BigUint};

use num_traits::Zero;

/// `(x + y) mod p`
pub fn mod_add(x: &BigUint, y: &BigUint, p: &BigUint) -> Result<BigUint, Error> {
    Ok(PrimeField::new(p)?.add(x, y))
}

/// `(x - y) mod p`
pub fn mod_sub(x: &BigUint, y: &BigUint, p: &BigUint) -> Result<BigUint, Error> {
    Ok(PrimeField::new(p)?.sub(x, y))
}

/// `(x * y) mod p`
pub fn mod_mul(x: &BigUint, y: &BigUint, p: &BigUint) -> Result<BigUint, Error> {
    Ok(PrimeField::new(p)?.mul(x, y))
}

/// `y` such that `x * y ≡ 1 (mod p)`.
pub fn mod_inverse(x: &BigUint, p: &BigUint) -> Result<BigUint, Error> {
    PrimeField::new(p)?.inverse(x)
}

/// Canonical representative of `x` in `[0, p)`, for any positive `p`.
///
/// Unlike the other helpers this needs no Montgomery setup, so the modulus
/// only has to be non-zero.
pub fn mod_reduce(x: &BigInt, p: &BigUint) -> Result<BigUint, Error> {
    if p.is_zero() {
        return Err(Error::InvalidModulus);
    }
    Ok(field::reduce_signed(x, p))
}
