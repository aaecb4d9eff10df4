use num_traits::ToBytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::numerics::scalar::{Scalar, abs};

/// `|x1 - x2| <= tol`.
///
/// Symmetric in its arguments, and reflexive for finite values whenever `tol >= 0`.
#[inline]
pub fn equals<T: Scalar>(x1: T, x2: T, tol: T) -> bool {
    abs(x1 - x2) <= tol
}

/// Whether `x1` and `x2` share the exact same byte representation.
///
/// This is representational identity, not numeric closeness: `0.0` and `-0.0` differ,
/// two identical NaN payloads are equal. `tol` is accepted for signature parity with
/// the other comparisons and does not take part in the result.
#[inline]
pub fn equals_per_byte<T: Scalar>(x1: T, x2: T, _tol: T) -> bool {
    ToBytes::to_ne_bytes(&x1).as_ref() == ToBytes::to_ne_bytes(&x2).as_ref()
}

/// `x1 < x2 - tol`: `x1` is smaller by more than the tolerance.
#[inline]
pub fn less<T: Scalar>(x1: T, x2: T, tol: T) -> bool {
    x1 < x2 - tol
}

/// `x1 <= x2 + tol`
#[inline]
pub fn less_or_equal<T: Scalar>(x1: T, x2: T, tol: T) -> bool {
    x1 <= x2 + tol
}

/// `x1 > x2 + tol`: `x1` is larger by more than the tolerance.
#[inline]
pub fn greater<T: Scalar>(x1: T, x2: T, tol: T) -> bool {
    x1 > x2 + tol
}

/// `x1 >= x2 - tol`
#[inline]
pub fn greater_or_equal<T: Scalar>(x1: T, x2: T, tol: T) -> bool {
    x1 >= x2 - tol
}

/// `-tol <= x <= tol`. Always false for NaN.
#[inline]
pub fn is_zero<T: Scalar>(x: T, tol: T) -> bool {
    x >= -tol && x <= tol
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToleranceError {
    #[error("tolerance must be non-negative, got {0}")]
    Negative(f64),
    #[error("tolerance must be a number, got NaN")]
    NotANumber,
}

/// A validated, non-negative comparison threshold.
///
/// Carries the tolerance alongside the comparisons so call sites don't have to thread
/// it through every call. [`Tolerance::default`] is the per-type
/// [`Scalar::DEFAULT_TOLERANCE`].
///
/// Serializes as a bare number. Deserialization rejects negative and NaN values, so a
/// tolerance read from a config file upholds the same invariant as one built in code.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Tolerance<T>(T);

impl<T: Scalar> Tolerance<T> {
    /// # Panics
    ///
    /// Panics if `tol` is negative or NaN.
    pub fn new(tol: T) -> Self {
        match Self::try_new(tol) {
            Ok(tolerance) => tolerance,
            Err(e) => panic!("invalid tolerance: {e}"),
        }
    }

    pub fn try_new(tol: T) -> Result<Self, ToleranceError> {
        if tol.is_nan() {
            debug!("rejecting NaN tolerance");
            return Err(ToleranceError::NotANumber);
        }
        if tol < T::zero() {
            debug!(tolerance = tol.widen(), "rejecting negative tolerance");
            return Err(ToleranceError::Negative(tol.widen()));
        }
        Ok(Tolerance(tol))
    }

    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn equals(self, x1: T, x2: T) -> bool {
        equals(x1, x2, self.0)
    }

    #[inline]
    pub fn equals_per_byte(self, x1: T, x2: T) -> bool {
        equals_per_byte(x1, x2, self.0)
    }

    #[inline]
    pub fn less(self, x1: T, x2: T) -> bool {
        less(x1, x2, self.0)
    }

    #[inline]
    pub fn less_or_equal(self, x1: T, x2: T) -> bool {
        less_or_equal(x1, x2, self.0)
    }

    #[inline]
    pub fn greater(self, x1: T, x2: T) -> bool {
        greater(x1, x2, self.0)
    }

    #[inline]
    pub fn greater_or_equal(self, x1: T, x2: T) -> bool {
        greater_or_equal(x1, x2, self.0)
    }

    #[inline]
    pub fn is_zero(self, x: T) -> bool {
        is_zero(x, self.0)
    }
}

impl<T: Scalar> Default for Tolerance<T> {
    fn default() -> Self {
        Tolerance(T::DEFAULT_TOLERANCE)
    }
}

impl<T: Scalar + Serialize> Serialize for Tolerance<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Tolerance<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tol = T::deserialize(deserializer)?;
        Tolerance::try_new(tol).map_err(serde::de::Error::custom)
    }
}
