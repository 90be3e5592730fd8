//! Math utilities and types
//!
//! Concrete vector aliases plus free-function forms of the [`Vec3`]
//! operations. Each function forwards to the matching method, so both
//! forms always agree.

pub use super::scalar::Scalar;
pub use super::vec3::Vec3;

/// Single-precision 3D vector
pub type Vec3f = Vec3<f32>;

/// Integer 3D vector
pub type Vec3i = Vec3<i32>;

/// Double-precision 3D vector
pub type Vec3d = Vec3<f64>;

/// Componentwise sum `a + b`
#[inline]
pub fn add<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    *a + *b
}

/// Componentwise difference `a - b`
#[inline]
pub fn sub<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    *a - *b
}

/// Multiply every component of `v` by `s`
#[inline]
pub fn scale<T: Scalar>(v: &Vec3<T>, s: T) -> Vec3<T> {
    v.scale(s)
}

/// Euclidean length of `v`
#[inline]
pub fn magnitude<T: Scalar>(v: &Vec3<T>) -> T {
    v.magnitude()
}

/// Squared length of `v`
#[inline]
pub fn sqr_magnitude<T: Scalar>(v: &Vec3<T>) -> T {
    v.sqr_magnitude()
}

/// Normalize `v` in place; zero-length vectors are left unchanged
#[inline]
pub fn normalize<T: Scalar>(v: &mut Vec3<T>) {
    v.normalize();
}

/// Dot product of `a` and `b`
#[inline]
pub fn dot<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> T {
    a.dot(b)
}

/// Cross product `a × b`
#[inline]
pub fn cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    a.cross(b)
}
