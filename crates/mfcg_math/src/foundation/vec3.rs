//! Generic 3-component vector

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::scalar::Scalar;
use crate::error::MathError;

/// 3D vector with components of a single numeric type
///
/// A plain value: copying it yields an independent vector. Components are
/// public and can be mutated directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Vec3<T> {
    /// X component
    pub x: T,

    /// Y component
    pub y: T,

    /// Z component
    pub z: T,
}

impl<T> Vec3<T> {
    /// Create a vector from explicit components
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
    /// Create a vector with every component set to `t`
    #[inline]
    pub fn splat(t: T) -> Self {
        Self { x: t, y: t, z: t }
    }

    /// Components as `[x, y, z]`
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Scalar> Vec3<T> {
    /// `(0, 0, 0)`
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

    /// `(1, 1, 1)`
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE);

    /// Unit vector along the X axis
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit vector along the Y axis
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit vector along the Z axis
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// The zero vector
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`
    #[inline]
    pub fn magnitude(&self) -> T {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length, `x² + y² + z²`
    ///
    /// Cheaper than [`magnitude`](Self::magnitude) when only relative
    /// lengths matter, e.g. nearest-neighbour comparisons.
    #[inline]
    pub fn sqr_magnitude(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scale this vector in place to unit length
    ///
    /// Vectors whose magnitude is not strictly positive (zero or NaN) are
    /// left untouched. Returns `self` so calls can be chained.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.magnitude();
        if len > T::ZERO {
            let len_inv = T::ONE / len;
            self.x = self.x * len_inv;
            self.y = self.y * len_inv;
            self.z = self.z * len_inv;
        } else {
            log::trace!("Skipping normalization of degenerate vector {:?}", self);
        }
        self
    }

    /// Unit-length copy of this vector; zero-length vectors come back unchanged
    #[inline]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Unit-length copy, or `None` if the magnitude is not strictly positive
    pub fn try_normalized(self) -> Option<Self> {
        if self.magnitude() > T::ZERO {
            Some(self.normalized())
        } else {
            None
        }
    }

    /// Dot product with `other`
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`
    #[inline]
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiply every component by `s`
    #[inline]
    #[must_use]
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec3<T> {
    type Output = Self;
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vec3<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Copy + Mul<Output = T>> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

impl<T: Scalar> Sum for Vec3<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: Copy> TryFrom<&[T]> for Vec3<T> {
    type Error = MathError;

    fn try_from(components: &[T]) -> Result<Self, Self::Error> {
        let [x, y, z]: [T; 3] = components
            .try_into()
            .map_err(|_| MathError::ComponentCount { expected: 3, found: components.len() })?;
        Ok(Self::new(x, y, z))
    }
}
