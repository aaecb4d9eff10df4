//! Tolerance-aware scalar comparisons and vector length/normalization.
//!
//! Everything here is generic over [`Scalar`], which is implemented for `f32` and `f64`.
//! Comparisons take the tolerance explicitly; pass [`Scalar::DEFAULT_TOLERANCE`] (or use
//! a [`Tolerance`] value) for the per-type default.
//!
//! Vectors are plain slices owned by the caller. Lengths are accumulated in `f64`, and
//! [`normalize`] replaces a zero-length vector by the first axis instead of failing.

mod exact;
mod scalar;
mod tolerance;
mod vector;

pub use exact::Exact;
pub use scalar::{Abs, Scalar, abs, default_tolerance, sqrt, swap};
pub use tolerance::{
    Tolerance, ToleranceError, equals, equals_per_byte, greater, greater_or_equal, is_zero, less,
    less_or_equal,
};
pub use vector::{VectorLike, length, length_squared, normalize};
