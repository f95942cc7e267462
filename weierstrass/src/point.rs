use core::fmt::{self, Display, Formatter};

use bigfield::BigUint;
use serde::{Deserialize, Serialize};

/// A point on a short Weierstrass curve, in affine coordinates.
///
/// Points carry no reference to a curve: the same coordinate pair can be
/// checked against any [`Curve`](crate::Curve), and every kernel operation
/// validates its inputs against the curve it is called on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// The point at infinity (identity element)
    Identity,
    /// A finite point `(x, y)`
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    /// Create a new affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The `(x, y)` pair, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl From<(BigUint, BigUint)> for Point {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        Point::new(x, y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("Identity"),
            Point::Affine { x, y } => write!(f, "(0x{:x}, 0x{:x})", x, y),
        }
    }
}
