//! Point arithmetic on short Weierstrass curves `y^2 = x^3 + ax + b (mod p)`.
//!
//! This crate provides curve validation, point addition and scalar
//! multiplication over runtime-selected domain parameters, built on the
//! Montgomery arithmetic of [`bigfield`]. The standard curves P192, P224,
//! P256, P384, P521 and secp256k1 are available from [`named`].
//!
//! Every operation validates its input points against the curve equation
//! and reports an off-curve input as [`Error::InvalidPoint`]; results are
//! always canonical affine points or [`Point::Identity`].
//!
//! # Example
//!
//! ```
//! use weierstrass::{named, point_add, point_mul, BigUint, Point};
//!
//! let curve = named::p256();
//! let g = curve.base_point();
//!
//! let two_g = point_mul(curve, g, &BigUint::from(2u32)).unwrap();
//! assert_eq!(point_add(curve, g, g).unwrap(), two_g);
//!
//! let q = curve.order().clone();
//! assert_eq!(point_mul(curve, g, &q).unwrap(), Point::Identity);
//! ```

mod curve;
mod error;
mod msm;
pub mod named;
mod params;
mod point;
mod projective;
mod random;
mod scalar_mul;

#[cfg(test)]
mod tests;

pub use bigfield::{BigInt, BigUint};
pub use curve::Curve;
pub use error::Error;
pub use params::CurveParams;
pub use point::Point;
pub use random::random_scalar;

/// Whether `point` satisfies the curve equation of `curve`.
pub fn is_point_on_curve(curve: &Curve, point: &Point) -> bool {
    curve.is_point_on_curve(point)
}

/// `p + q` on `curve`.
pub fn point_add(curve: &Curve, p: &Point, q: &Point) -> Result<Point, Error> {
    curve.point_add(p, q)
}

/// `d * p` on `curve`.
pub fn point_mul(curve: &Curve, p: &Point, d: &BigUint) -> Result<Point, Error> {
    curve.point_mul(p, d)
}
