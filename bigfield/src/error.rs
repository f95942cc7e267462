//! Error types for the modular arithmetic engine.

use thiserror::Error;

/// Errors reported by [`PrimeField`](crate::PrimeField) construction and
/// by modular inversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The modulus is even, zero, or not larger than 3.
    ///
    /// Montgomery reduction needs an odd modulus, and every curve modulus
    /// of interest is an odd prime well above 3.
    #[error("modulus must be odd and greater than 3")]
    InvalidModulus,

    /// The modulus does not fit in the fixed limb budget.
    #[error("modulus exceeds {max_bits} bits")]
    ModulusTooLarge {
        /// Largest supported modulus width in bits.
        max_bits: u32,
    },

    /// The value has no multiplicative inverse modulo the field modulus.
    ///
    /// For a prime modulus this only happens for zero. A composite modulus
    /// can also produce it, since inversion goes through Fermat's little
    /// theorem and is checked afterwards.
    #[error("value is not invertible modulo the field modulus")]
    NotInvertible,
}
