//! Foundation module - vector math and supporting utilities
//!
//! - Scalar capability trait
//! - The `Vec3` value type
//! - Free-function math API
//! - Logging utilities

pub mod scalar;
pub mod vec3;
pub mod math;
pub mod logging;

mod interop;
