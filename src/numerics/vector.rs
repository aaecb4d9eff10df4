use tracing::trace;

use crate::numerics::{
    scalar::Scalar,
    tolerance::{is_zero, less},
};

/// Squared euclidean length of `v`:
///
/// ```text
/// |v|^2 = Σ_i v[i] ** 2
/// ```
///
/// Every term is widened to `f64` before squaring and the sum is kept in `f64` whatever
/// `T` is, so long `f32` vectors don't lose precision to the accumulator.
/// An empty slice has length zero.
#[inline]
pub fn length_squared<T: Scalar>(v: &[T]) -> f64 {
    v.iter()
        .map(|&x| {
            let x = x.widen();
            x * x
        })
        .sum()
}

/// Euclidean length of `v`, rounded to `T`.
#[inline]
pub fn length<T: Scalar>(v: &[T]) -> T {
    T::narrow(length_squared(v).sqrt())
}

/// Scales `v` in place to unit length and returns its length before scaling.
///
/// A vector whose length is zero within tolerance has no direction; it is replaced by the
/// first axis `[1, 0, ..., 0]` instead of being divided by (almost) zero. The threshold
/// is `10 / T::MAX`, raised to [`Scalar::DEFAULT_TOLERANCE`] when it is the smaller of
/// the two.
///
/// An empty slice is left untouched. A vector containing NaN is not degenerate and comes
/// out all NaN.
pub fn normalize<T: Scalar>(v: &mut [T]) -> T {
    let l = length(v);
    if v.is_empty() {
        return l;
    }

    let mut tol = T::narrow(10.0) / T::max_value();
    if less(tol, T::DEFAULT_TOLERANCE, T::zero()) {
        tol = T::DEFAULT_TOLERANCE;
    }

    if is_zero(l, tol) {
        trace!(dim = v.len(), length = l.widen(), "degenerate vector, using first axis");
        v[0] = T::one();
        v[1..].fill(T::zero());
    } else {
        let inv_l = T::one() / l;
        for x in v.iter_mut() {
            *x = *x * inv_l;
        }
    }
    l
}

/// Length and normalization as methods on scalar slices, so a `[f32; 3]` or a `Vec<f64>`
/// can be used directly:
///
/// ```
/// use cmmath::numerics::VectorLike;
///
/// let mut v = [3.0f64, 4.0];
/// assert_eq!(v.normalize(), 5.0);
/// ```
pub trait VectorLike<T> {
    fn length_squared(&self) -> f64;
    fn length(&self) -> T;
    fn normalize(&mut self) -> T;
}

impl<T: Scalar> VectorLike<T> for [T] {
    #[inline]
    fn length_squared(&self) -> f64 {
        length_squared(self)
    }

    #[inline]
    fn length(&self) -> T {
        length(self)
    }

    #[inline]
    fn normalize(&mut self) -> T {
        normalize(self)
    }
}
