//! Error Types
//!
//! Failure modes of the vector and transform algebra.
//!
//! Every operation in this crate is a pure function of its inputs, so none
//! of these errors is transient: retrying with the same values reproduces
//! the same failure. Callers recover by supplying different input.

use thiserror::Error;

/// Errors raised by [`Vector`](crate::Vector) and [`Transform`](crate::Transform).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The matrix failed the configured singularity check and has no inverse.
    #[error("Matrix cannot be inverted: determinant {determinant} is singular")]
    SingularMatrix {
        /// Determinant computed before giving up
        determinant: f64,
    },

    /// A divisor, or the length of a vector being normalized, was exactly zero.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// Name of the operation that attempted the division
        operation: &'static str,
    },

    /// A slice constructor received the wrong number of elements.
    #[error("Expected {expected} elements, found {found}")]
    InvalidLength {
        /// Required element count
        expected: usize,
        /// Element count actually supplied
        found: usize,
    },
}

/// Alias for `Result<T, MathError>`.
pub type Result<T> = std::result::Result<T, MathError>;
