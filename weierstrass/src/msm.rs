use bigfield::{BigUint, FieldElement};

use crate::projective::ProjectivePoint;
use crate::scalar_mul::scalar_bit;

/// Compute d1 * P + d2 * Q with a joint double-and-add over both scalars.
///
/// Variable time: an addition is skipped whenever both scalar bits are zero.
pub(crate) fn double_scalar_mul<'a>(
    d1: &BigUint,
    p: ProjectivePoint<'a>,
    d2: &BigUint,
    q: ProjectivePoint<'a>,
    a: FieldElement<'a>,
) -> ProjectivePoint<'a> {
    let identity = ProjectivePoint::identity(a.field());
    let table = [identity, p, q, p.add(&q, a)];

    let d1_digits = d1.to_u64_digits();
    let d2_digits = d2.to_u64_digits();
    let bits = d1.bits().max(d2.bits());

    let mut result = identity;
    for i in (0..bits).rev() {
        result = result.double(a);

        let window = (scalar_bit(&d1_digits, i) | (scalar_bit(&d2_digits, i) << 1)) as usize;
        if window != 0 {
            result = result.add(&table[window], a);
        }
    }

    result
}
