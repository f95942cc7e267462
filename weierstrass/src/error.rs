//! Error types for the curve kernel.

use thiserror::Error;

/// Errors that can occur while building a curve or operating on points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An input coordinate pair does not satisfy the curve equation
    /// modulo `p`.
    ///
    /// Point operations report this instead of producing a result, so a
    /// caller can never mistake a rejected input for a real point.
    #[error("point is not on the curve")]
    InvalidPoint,

    /// A negative scalar was supplied to scalar multiplication.
    #[error("scalar must be non-negative")]
    InvalidScalar,

    /// The domain parameters violate a construction precondition.
    #[error("invalid curve parameters: {0}")]
    InvalidCurve(&'static str),

    /// No named curve matches the requested identifier.
    #[error("unknown curve `{0}`")]
    UnknownCurve(String),

    /// The modulus was rejected by the field engine.
    #[error(transparent)]
    Field(#[from] bigfield::Error),
}
