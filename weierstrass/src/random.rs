use bigfield::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::Curve;

/// Sample a scalar uniformly from `[1, q)`.
///
/// Rejection sampling over byte strings as wide as `q`, with the excess top
/// bits masked off so that on average fewer than two draws are needed.
pub fn random_scalar<R: Rng + ?Sized>(curve: &Curve, rng: &mut R) -> BigUint {
    let order = curve.order();
    let bits = order.bits();
    let len = ((bits + 7) / 8) as usize;
    let top_mask = 0xffu8 >> (8 * len as u64 - bits);

    let mut bytes = vec![0u8; len];
    loop {
        rng.fill(&mut bytes[..]);
        bytes[0] &= top_mask;

        let candidate = BigUint::from_bytes_be(&bytes);
        if !candidate.is_zero() && &candidate < order {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::named;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scalars_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for curve in named::all() {
            for _ in 0..8 {
                let scalar = random_scalar(curve, &mut rng);
                assert!(!scalar.is_zero());
                assert!(&scalar < curve.order());
            }
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let curve = named::p256();
        let a = random_scalar(curve, &mut StdRng::seed_from_u64(7));
        let b = random_scalar(curve, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
