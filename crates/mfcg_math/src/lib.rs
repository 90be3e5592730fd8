//! # mfcg_math
//!
//! A small generic 3-component vector type.
//!
//! ## Features
//!
//! - **Generic components**: `Vec3<T>` over `i32`, `i64`, `f32` and `f64`
//! - **Two API styles**: every operation is both a method and a free function
//! - **Safe normalization**: zero-length vectors are left unchanged
//! - **Interop**: `approx` comparisons, optional `nalgebra` and `bytemuck` support
//!
//! ## Quick Start
//!
//! ```rust
//! use mfcg_math::prelude::*;
//!
//! let a = Vec3f::new(1.0, 2.0, 3.0);
//! let b = Vec3f::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vec3f::new(5.0, 7.0, 9.0));
//! assert_eq!(dot(&a, &b), a.dot(&b));
//! assert_eq!(cross(&a, &b), Vec3f::new(-3.0, 6.0, -3.0));
//!
//! let mut v = Vec3f::new(3.0, 4.0, 0.0);
//! assert_eq!(v.magnitude(), 5.0);
//! let len = v.normalize().magnitude();
//! assert!((len - 1.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;

mod error;

pub use error::MathError;
pub use foundation::math::{Vec3d, Vec3f, Vec3i};
pub use foundation::scalar::Scalar;
pub use foundation::vec3::Vec3;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        MathError,
        foundation::{
            math::{add, cross, dot, magnitude, normalize, scale, sqr_magnitude, sub},
            math::{Vec3d, Vec3f, Vec3i},
            scalar::Scalar,
            vec3::Vec3,
        },
    };
}
