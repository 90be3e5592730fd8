//! Scalar capability trait for vector components

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Numeric component type usable inside a [`Vec3`](super::vec3::Vec3).
///
/// Covers everything the vector operations need: the four arithmetic
/// operators, ordering against zero, and a square root for magnitudes.
pub trait Scalar:
    Copy
    + PartialOrd
    + Default
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Square root of the value
    ///
    /// Integer implementations take the root in `f64` and truncate toward zero.
    #[must_use]
    fn sqrt(self) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )*
    };
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_lossless)]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i32, i64);
