use bigfield::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::Point;

/// Domain parameters of a curve `y^2 = x^3 + a*x + b (mod p)`.
///
/// A plain record: nothing is checked until it is turned into a
/// [`Curve`](crate::Curve). It derives `serde` traits so custom curves can
/// be loaded from whatever configuration format the host application uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Identifier, unique per curve.
    pub name: String,
    /// Prime modulus of the base field.
    pub p: BigUint,
    /// Coefficient `a`; may be given as a negative literal such as `-3`.
    pub a: BigInt,
    /// Coefficient `b`.
    pub b: BigInt,
    /// Order of the base point.
    pub q: BigUint,
    /// Base point.
    pub g: Point,
}

impl CurveParams {
    /// Assemble a parameter record from its components, in the
    /// conventional `(p, a, b, q, Gx, Gy)` order.
    pub fn new(
        name: impl Into<String>,
        p: BigUint,
        a: BigInt,
        b: BigInt,
        q: BigUint,
        gx: BigUint,
        gy: BigUint,
    ) -> Self {
        CurveParams {
            name: name.into(),
            p,
            a,
            b,
            q,
            g: Point::new(gx, gy),
        }
    }
}
