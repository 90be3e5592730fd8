//! Trait implementations bridging `Vec3` to other crates
//!
//! `approx` comparisons are always available. `nalgebra` conversions and
//! `bytemuck` casting sit behind the features of the same name.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::vec3::Vec3;

impl<T: AbsDiffEq> AbsDiffEq for Vec3<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: RelativeEq> RelativeEq for Vec3<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T: UlpsEq> UlpsEq for Vec3<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(feature = "nalgebra")]
impl<T: nalgebra::Scalar> From<nalgebra::Vector3<T>> for Vec3<T> {
    fn from(v: nalgebra::Vector3<T>) -> Self {
        Self::new(v.x.clone(), v.y.clone(), v.z.clone())
    }
}

#[cfg(feature = "nalgebra")]
impl<T: nalgebra::Scalar> From<Vec3<T>> for nalgebra::Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// SAFETY: `Vec3` is `#[repr(C)]` over three fields of the same type, so it has
// no padding and every bit pattern valid for `T` is valid for each field.
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}

// SAFETY: see `Zeroable` above; `T: Pod` makes the struct `Copy + 'static`.
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}
