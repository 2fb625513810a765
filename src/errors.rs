//! Error Types
//!
//! This module defines the error type shared by everything built on top of
//! the naming and math crates.
//!
//! # Overview
//!
//! [`RigError`] wraps the failure modes of both member crates:
//! - Malformed node names that cannot be decoded
//! - Singular matrices that cannot be inverted
//! - Divisions by zero in vector arithmetic
//!
//! None of them are retryable. The caller decides whether to fall back to a
//! default name or abort the build step that needed the value.
//!
//! # Usage
//!
//! ```rust
//! use rigpie::errors::Result;
//! use rigpie::{StructuredName, Transform};
//!
//! fn parent_offset(name: &str, world: &Transform) -> Result<(StructuredName, Transform)> {
//!     let name = StructuredName::decode(name)?;
//!     let inverse = world.inverse()?;
//!     Ok((name, inverse))
//! }
//!
//! assert!(parent_offset("LfArmJnt", &Transform::identity()).is_ok());
//! assert!(parent_offset("LfArmJnt", &Transform::zero()).is_err());
//! ```

use thiserror::Error;

pub use rigpie_math::MathError;
pub use rigpie_naming::{MalformedReason, NameError};

/// Unified error type for rig-building code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RigError {
    /// A node name could not be decoded or edited.
    #[error(transparent)]
    Name(#[from] NameError),

    /// A vector or transform operation failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl RigError {
    /// Returns `true` for [`MathError::SingularMatrix`].
    #[must_use]
    pub fn is_singular_matrix(&self) -> bool {
        matches!(self, RigError::Math(MathError::SingularMatrix { .. }))
    }

    /// Returns `true` for [`MathError::DivisionByZero`].
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, RigError::Math(MathError::DivisionByZero { .. }))
    }

    /// Returns `true` for [`NameError::Malformed`].
    #[must_use]
    pub fn is_malformed_name(&self) -> bool {
        matches!(self, RigError::Name(NameError::Malformed { .. }))
    }
}

/// Alias for `Result<T, RigError>`.
pub type Result<T> = std::result::Result<T, RigError>;
