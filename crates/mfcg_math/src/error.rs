//! Error types

use thiserror::Error;

/// Errors raised by fallible vector conversions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A slice did not hold exactly as many components as the target vector
    #[error("Expected {expected} components, found {found}")]
    ComponentCount {
        /// Number of components the target type holds
        expected: usize,

        /// Number of components supplied
        found: usize,
    },
}
