use std::{cmp::Ordering, fmt::Debug};

use num_traits::{Float, ToBytes};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating point scalar the tolerant comparisons and vector routines operate on.
///
/// Only `f32` and `f64` implement it. Every per-type decision of the module (default
/// tolerance, how to widen to `f64` for accumulation, how to view the raw bytes) lives
/// here, so the generic functions never branch on the concrete type.
pub trait Scalar: Float + ToBytes + Abs + Debug + Default + sealed::Sealed {
    /// Threshold under which two values of this type are treated as equal.
    const DEFAULT_TOLERANCE: Self;

    /// Lossless conversion to `f64`.
    fn widen(self) -> f64;

    /// Rounds an `f64` to the nearest representable value of this type.
    fn narrow(x: f64) -> Self;

    /// IEEE-754 total order (`-NaN < -inf < ... < -0.0 < 0.0 < ... < inf < NaN`).
    fn total_order(&self, other: &Self) -> Ordering;
}

impl Scalar for f32 {
    const DEFAULT_TOLERANCE: f32 = 1e-6;

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(x: f64) -> f32 {
        x as f32
    }

    #[inline]
    fn total_order(&self, other: &f32) -> Ordering {
        self.total_cmp(other)
    }
}

impl Scalar for f64 {
    const DEFAULT_TOLERANCE: f64 = 1e-10;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(x: f64) -> f64 {
        x
    }

    #[inline]
    fn total_order(&self, other: &f64) -> Ordering {
        self.total_cmp(other)
    }
}

/// Absolute value, specialized per type.
///
/// Floats go through the hardware `fabs`, which clears the sign bit and therefore
/// maps `-0.0` to `0.0` and keeps NaN a NaN. Signed integers branch on the sign.
pub trait Abs: Copy {
    fn abs_value(self) -> Self;
}

macro_rules! impl_abs_by_sign {
    ($($t:ty),*) => {
        $(
            impl Abs for $t {
                /// `MIN` has no positive counterpart and is returned unchanged.
                #[inline]
                fn abs_value(self) -> $t {
                    if self < 0 { self.wrapping_neg() } else { self }
                }
            }
        )*
    };
}

impl_abs_by_sign!(i8, i16, i32, i64, i128, isize);

impl Abs for f32 {
    #[inline]
    fn abs_value(self) -> f32 {
        self.abs()
    }
}

impl Abs for f64 {
    #[inline]
    fn abs_value(self) -> f64 {
        self.abs()
    }
}

/// Exchanges the values behind `a` and `b` through a temporary copy.
#[inline]
pub fn swap<T: Copy>(a: &mut T, b: &mut T) {
    let t = *a;
    *a = *b;
    *b = t;
}

#[inline]
pub fn abs<T: Abs>(x: T) -> T {
    x.abs_value()
}

/// The per-type default tolerance: `1e-6` for `f32`, `1e-10` for `f64`.
#[inline]
pub fn default_tolerance<T: Scalar>() -> T {
    T::DEFAULT_TOLERANCE
}

/// Square root computed in double precision and rounded back to `T`.
///
/// Negative inputs give NaN, as `f64::sqrt` does. There is no domain check.
#[inline]
pub fn sqrt<T: Scalar>(x: T) -> T {
    T::narrow(x.widen().sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerances_are_exact() {
        assert_eq!(default_tolerance::<f32>(), 1e-6f32);
        assert_eq!(default_tolerance::<f64>(), 1e-10f64);
        assert_eq!(f32::DEFAULT_TOLERANCE, 1e-6f32);
        assert_eq!(f64::DEFAULT_TOLERANCE, 1e-10f64);
    }

    #[test]
    fn test_swap_exchanges_values() {
        let mut a = 1.5f64;
        let mut b = -2.0f64;
        swap(&mut a, &mut b);
        assert_eq!(a, -2.0);
        assert_eq!(b, 1.5);

        let mut x = 3u8;
        let mut y = 7u8;
        swap(&mut x, &mut y);
        assert_eq!((x, y), (7, 3));
    }

    #[test]
    fn test_abs_floats() {
        assert_eq!(abs(-3.5f32), 3.5);
        assert_eq!(abs(2.25f64), 2.25);
        assert_eq!(abs(f64::NEG_INFINITY), f64::INFINITY);
        assert!(abs(f64::NAN).is_nan());
    }

    #[test]
    fn test_abs_clears_sign_of_negative_zero() {
        let z = abs(-0.0f64);
        assert_eq!(z.to_bits(), 0.0f64.to_bits());
        let z = abs(-0.0f32);
        assert_eq!(z.to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn test_abs_integers() {
        assert_eq!(abs(-7i32), 7);
        assert_eq!(abs(7i64), 7);
        assert_eq!(abs(0i8), 0);
        assert_eq!(abs(i16::MIN), i16::MIN);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(25.0f64), 5.0);
        assert_eq!(sqrt(2.25f32), 1.5);
        assert_eq!(sqrt(0.0f64), 0.0);
        assert!(sqrt(-1.0f64).is_nan());
        assert!(sqrt(-4.0f32).is_nan());
    }

    #[test]
    fn test_widen_narrow() {
        assert_eq!(0.1f32.widen(), f64::from(0.1f32));
        assert_eq!(f32::narrow(0.5), 0.5f32);
        assert_eq!(f64::narrow(0.1), 0.1);
        assert_eq!(f32::narrow(1e300), f32::INFINITY);
    }

    #[test]
    fn test_total_order() {
        assert_eq!((-0.0f64).total_order(&0.0), Ordering::Less);
        assert_eq!(f32::NAN.total_order(&f32::INFINITY), Ordering::Greater);
        assert_eq!(1.0f64.total_order(&1.0), Ordering::Equal);
    }
}
