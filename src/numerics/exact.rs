use std::{cmp::Ordering, hash::Hash, hash::Hasher};

use num_traits::ToBytes;
use serde::{Deserialize, Serialize};

use crate::numerics::{scalar::Scalar, tolerance::equals_per_byte};

/// A scalar compared by its exact byte representation rather than numerically.
///
/// Standard floats do not implement `Eq`, `Ord` or `Hash` because of NaN and signed
/// zeros. This wrapper defines equality as [`equals_per_byte`], hashes the same bytes,
/// and orders by the IEEE-754 total order, which agrees with that equality. So
/// `Exact(0.0) != Exact(-0.0)` while two NaNs with the same payload are equal.
///
/// This enables scalars to be used in sorted collections and as hash keys.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Exact<T>(pub T);

impl<T: Scalar> PartialEq for Exact<T> {
    fn eq(&self, other: &Self) -> bool {
        equals_per_byte(self.0, other.0, T::DEFAULT_TOLERANCE)
    }
}

impl<T: Scalar> Eq for Exact<T> {}

impl<T: Scalar> PartialOrd for Exact<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Scalar> Ord for Exact<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_order(&other.0)
    }
}

impl<T> From<T> for Exact<T> {
    fn from(x: T) -> Self {
        Exact(x)
    }
}

impl<T: Scalar> Hash for Exact<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ToBytes::to_ne_bytes(&self.0).as_ref().hash(state);
    }
}
