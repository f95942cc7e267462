//! Validated curves and the affine group law.

use bigfield::{BigInt, BigUint, FieldElement, PrimeField, Residue};
use log::debug;
use num_traits::{One, Signed};

use crate::msm::double_scalar_mul;
use crate::projective::ProjectivePoint;
use crate::scalar_mul::ladder;
use crate::{CurveParams, Error, Point};

/// A short Weierstrass curve ready for point arithmetic.
///
/// Built once from a [`CurveParams`] record and immutable afterwards, so a
/// `&Curve` can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Curve {
    params: CurveParams,
    field: PrimeField,
    /// `a mod p`, Montgomery form
    a: Residue,
    /// `b mod p`, Montgomery form
    b: Residue,
}

impl Curve {
    /// Validate domain parameters and prepare the field arithmetic.
    ///
    /// Checks, once, that `p` is an odd modulus above 3, that `q > 1`, that
    /// the curve is non-singular (`4a^3 + 27b^2 != 0 mod p`) and that `G` is
    /// a finite point on the curve. Primality of `p` and `q` is the
    /// caller's responsibility.
    pub fn new(params: CurveParams) -> Result<Self, Error> {
        let field = PrimeField::new(&params.p)?;
        if params.q <= BigUint::one() {
            return Err(Error::InvalidCurve("base point order must exceed 1"));
        }

        let (a, b) = {
            let (a, b) = (field.element_signed(&params.a), field.element_signed(&params.b));
            let discriminant =
                field.element_u64(4) * a.square() * a + field.element_u64(27) * b.square();
            if bool::from(discriminant.is_zero()) {
                return Err(Error::InvalidCurve("curve is singular"));
            }
            (a.residue(), b.residue())
        };

        let curve = Curve {
            params,
            field,
            a,
            b,
        };
        if curve.params.g.is_identity() {
            return Err(Error::InvalidCurve("base point is the identity"));
        }
        if !curve.is_point_on_curve(&curve.params.g) {
            return Err(Error::InvalidCurve("base point is not on the curve"));
        }

        debug!(
            "initialised curve {} ({}-bit modulus, {}-bit order)",
            curve.name(),
            curve.field.bits(),
            curve.params.q.bits()
        );
        Ok(curve)
    }

    pub fn name(&self) -> &str {
        &self.params.name
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.params.p
    }

    /// The order `q` of the base point.
    pub fn order(&self) -> &BigUint {
        &self.params.q
    }

    /// The base point `G`.
    pub fn base_point(&self) -> &Point {
        &self.params.g
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Coefficients `a` and `b` lifted into the field.
    #[inline]
    pub(crate) fn coefficients(&self) -> (FieldElement<'_>, FieldElement<'_>) {
        (self.field.from_residue(self.a), self.field.from_residue(self.b))
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b (mod p).
    ///
    /// The identity is always on the curve. Coordinates are taken modulo
    /// `p`, so `(x + p, y)` is on the curve whenever `(x, y)` is.
    pub fn is_point_on_curve(&self, point: &Point) -> bool {
        let (x, y) = match self.lift(point) {
            None => return true,
            Some(coordinates) => coordinates,
        };

        let (a, b) = self.coefficients();
        let lhs = y.square();
        let rhs = x.square() * x + a * x + b;

        lhs == rhs
    }

    /// `P + Q` under the curve's group law.
    ///
    /// Both inputs are validated first; an off-curve input yields
    /// [`Error::InvalidPoint`]. The result always has coordinates in
    /// `[0, p)`.
    pub fn point_add(&self, p: &Point, q: &Point) -> Result<Point, Error> {
        self.validate(p)?;
        self.validate(q)?;
        Ok(self.add_affine(p, q))
    }

    /// `2P`
    pub fn point_double(&self, p: &Point) -> Result<Point, Error> {
        self.point_add(p, p)
    }

    /// `-P = (x, -y)`
    pub fn point_neg(&self, p: &Point) -> Result<Point, Error> {
        self.validate(p)?;
        Ok(match self.lift(p) {
            None => Point::Identity,
            Some((x, y)) => Point::new(x.to_biguint(), (-y).to_biguint()),
        })
    }

    /// `P - Q`
    pub fn point_sub(&self, p: &Point, q: &Point) -> Result<Point, Error> {
        let neg_q = self.point_neg(q)?;
        self.point_add(p, &neg_q)
    }

    /// `d * P` with a Montgomery ladder.
    ///
    /// The ladder does the same work for every bit and scans
    /// `max(bits(q), bits(d))` bits, so for scalars below the order the
    /// operation count does not depend on the scalar. Scalars are not
    /// reduced: `q * G` and its multiples give the identity through the
    /// group law itself.
    pub fn point_mul(&self, p: &Point, d: &BigUint) -> Result<Point, Error> {
        self.validate(p)?;
        let (a, _) = self.coefficients();
        let base = ProjectivePoint::from_point(&self.field, p);
        Ok(ladder(base, a, d, self.order().bits()).to_affine())
    }

    /// `d * P` for a signed scalar; negative scalars are rejected with
    /// [`Error::InvalidScalar`] rather than normalised.
    pub fn point_mul_signed(&self, p: &Point, d: &BigInt) -> Result<Point, Error> {
        if d.is_negative() {
            debug!("rejected negative scalar on {}", self.name());
            return Err(Error::InvalidScalar);
        }
        self.point_mul(p, d.magnitude())
    }

    /// `d * G`
    pub fn mul_generator(&self, d: &BigUint) -> Result<Point, Error> {
        self.point_mul(self.base_point(), d)
    }

    /// `d1 * P + d2 * Q` with Shamir's trick.
    ///
    /// Runs in time that depends on the scalars; use it for public values
    /// such as signature verification, and [`point_mul`](Self::point_mul)
    /// for secrets.
    pub fn linear_combination(
        &self,
        d1: &BigUint,
        p: &Point,
        d2: &BigUint,
        q: &Point,
    ) -> Result<Point, Error> {
        self.validate(p)?;
        self.validate(q)?;
        let (a, _) = self.coefficients();
        let p = ProjectivePoint::from_point(&self.field, p);
        let q = ProjectivePoint::from_point(&self.field, q);
        Ok(double_scalar_mul(d1, p, d2, q, a).to_affine())
    }

    fn validate(&self, point: &Point) -> Result<(), Error> {
        if self.is_point_on_curve(point) {
            Ok(())
        } else {
            debug!("rejected point not on {}", self.name());
            Err(Error::InvalidPoint)
        }
    }

    /// Affine coordinates in the field; `None` is the identity.
    fn lift(&self, point: &Point) -> Option<(FieldElement<'_>, FieldElement<'_>)> {
        point
            .coordinates()
            .map(|(x, y)| (self.field.element(x), self.field.element(y)))
    }

    fn canonical(&self, point: &Point) -> Point {
        match self.lift(point) {
            None => Point::Identity,
            Some((x, y)) => Point::new(x.to_biguint(), y.to_biguint()),
        }
    }

    /// Incomplete affine addition on validated inputs.
    fn add_affine(&self, p: &Point, q: &Point) -> Point {
        let (x1, y1) = match self.lift(p) {
            None => return self.canonical(q),
            Some(coordinates) => coordinates,
        };
        let (x2, y2) = match self.lift(q) {
            None => return self.canonical(p),
            Some(coordinates) => coordinates,
        };

        // Inverse points, including doubling a point with y = 0
        if x1 == x2 && bool::from((y1 + y2).is_zero()) {
            return Point::Identity;
        }

        let lambda = if x1 == x2 {
            // λ = (3x^2 + a) / (2y)
            let (a, _) = self.coefficients();
            let x_sq = x1.square();
            (x_sq.double() + x_sq + a) * invert_guarded(y1.double())
        } else {
            // λ = (y2 - y1) / (x2 - x1)
            (y2 - y1) * invert_guarded(x2 - x1)
        };

        // x_r = λ^2 - x1 - x2
        let x3 = lambda.square() - x1 - x2;
        // y_r = λ(x1 - x_r) - y1
        let y3 = lambda * (x1 - x3) - y1;

        Point::new(x3.to_biguint(), y3.to_biguint())
    }
}

/// Invert a denominator that the group-law branch guards keep non-zero.
///
/// Failure means the modulus is not prime, which is a defect in the curve
/// parameters rather than a runtime condition.
pub(crate) fn invert_guarded(denominator: FieldElement<'_>) -> FieldElement<'_> {
    match denominator.invert() {
        Ok(inverse) => inverse,
        Err(err) => panic!(
            "guarded denominator {} is not invertible modulo 0x{:x}: {}",
            denominator,
            denominator.field().modulus(),
            err
        ),
    }
}
