use bigfield::{BigUint, FieldElement};
use subtle::{Choice, ConditionallySelectable};

use crate::projective::ProjectivePoint;

/// Bit `index` of a little-endian digit slice, as `0` or `1`.
#[inline]
pub(crate) fn scalar_bit(digits: &[u64], index: u64) -> u8 {
    digits
        .get((index / 64) as usize)
        .map_or(0, |limb| ((limb >> (index % 64)) & 1) as u8)
}

/// Montgomery ladder computing `scalar * base`.
///
/// Keeps `R1 - R0 = base` and spends one addition and one doubling on every
/// bit, swapping the registers in and out with a constant-time conditional
/// swap instead of branching on the bit. At least `min_bits` bits are
/// scanned so that scalars shorter than the group order take as long as
/// full-width ones.
pub(crate) fn ladder<'a>(
    base: ProjectivePoint<'a>,
    a: FieldElement<'a>,
    scalar: &BigUint,
    min_bits: u64,
) -> ProjectivePoint<'a> {
    let digits = scalar.to_u64_digits();
    let bits = min_bits.max(scalar.bits());

    let mut r0 = ProjectivePoint::identity(a.field());
    let mut r1 = base;

    for i in (0..bits).rev() {
        let bit = Choice::from(scalar_bit(&digits, i));
        ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
        r1 = r0.add(&r1, a);
        r0 = r0.double(a);
        ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
    }

    r0
}
