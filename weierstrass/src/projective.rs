use bigfield::{FieldElement, PrimeField};
use subtle::{Choice, ConditionallySelectable};

use crate::curve::invert_guarded;
use crate::Point;

/// Jacobian point (X:Y:Z) with (x, y) = (X/Z^2, Y/Z^3).
/// The point at infinity is any point with Z = 0, canonically (1:1:0).
///
/// Only used inside scalar multiplication, where it saves one field
/// inversion per group operation.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ProjectivePoint<'a> {
    x: FieldElement<'a>,
    y: FieldElement<'a>,
    z: FieldElement<'a>,
}

impl<'a> ProjectivePoint<'a> {
    /// The point at infinity (identity element): (1:1:0)
    pub(crate) fn identity(field: &'a PrimeField) -> Self {
        ProjectivePoint {
            x: field.one(),
            y: field.one(),
            z: field.zero(),
        }
    }

    /// Convert from affine coordinates. The caller has validated `point`.
    pub(crate) fn from_point(field: &'a PrimeField, point: &Point) -> Self {
        match point.coordinates() {
            None => Self::identity(field),
            Some((x, y)) => ProjectivePoint {
                x: field.element(x),
                y: field.element(y),
                z: field.one(),
            },
        }
    }

    #[inline]
    pub(crate) fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Convert to affine coordinates with a single inversion.
    pub(crate) fn to_affine(&self) -> Point {
        if bool::from(self.is_identity()) {
            return Point::Identity;
        }

        let z_inv = invert_guarded(self.z);
        let z_inv2 = z_inv.square();
        let x = self.x * z_inv2;
        let y = self.y * z_inv2 * z_inv;

        Point::new(x.to_biguint(), y.to_biguint())
    }

    /// Point doubling for an arbitrary `a` (dbl-2007-bl).
    ///
    /// A point with Y = 0 or Z = 0 comes out with Z3 = 0, so the identity
    /// needs no special case.
    pub(crate) fn double(&self, a: FieldElement<'a>) -> Self {
        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();

        // S = 2*((X1+YY)^2-XX-YYYY)
        let s = ((self.x + yy).square() - xx - yyyy).double();
        // M = 3*XX+a*ZZ^2
        let m = xx.double() + xx + a * zz.square();
        let t = m.square() - s.double();

        let x3 = t;
        let y3 = m * (s - t) - yyyy.double().double().double();
        let z3 = (self.y + self.z).square() - yy - zz;

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Complete addition (add-2007-bl plus case selection).
    ///
    /// The generic sum and the doubling are both computed every time and the
    /// result is picked with constant-time selects, covering P = Q,
    /// P = -Q and either operand being the identity.
    pub(crate) fn add(&self, other: &Self, a: FieldElement<'a>) -> Self {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;

        let h = u2 - u1;
        let r = (s2 - s1).double();
        let i = h.double().square();
        let j = h * i;
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        // H = 0 with r != 0 means P = -Q, and Z3 = 0 gives the identity.
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;

        let sum = ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        };
        let doubled = self.double(a);

        let mut result = Self::conditional_select(&sum, &doubled, h.is_zero() & r.is_zero());
        result = Self::conditional_select(&result, other, self.is_identity());
        Self::conditional_select(&result, self, other.is_identity())
    }
}

impl ConditionallySelectable for ProjectivePoint<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
