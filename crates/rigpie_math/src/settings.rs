//! Numerical Settings
//!
//! Tunables for the few places where the transform algebra has to decide
//! what counts as "zero".
//!
//! # Quick Start
//!
//! ```rust
//! use rigpie_math::{SingularityCheck, Transform};
//!
//! let mut m = Transform::from_scale(1e-9, 1.0, 1.0);
//!
//! // Default: only an exactly zero determinant is rejected.
//! assert!(m.inverse().is_ok());
//!
//! // Stricter: treat anything below 1e-6 as singular.
//! assert!(m.invert_with(SingularityCheck::Tolerance(1e-6)).is_err());
//! ```

/// Determinant magnitude below which [`SingularityCheck::Exact`] still accepts
/// the matrix but logs a warning.
pub const NEAR_SINGULAR_WARN_THRESHOLD: f64 = 1e-12;

/// Default tolerance on `|sin(y)|` deviating from 1 before Euler extraction
/// treats the rotation as gimbal-locked.
pub const DEFAULT_GIMBAL_TOLERANCE: f64 = 1e-9;

/// How [`Transform::invert_with`](crate::Transform::invert_with) decides a
/// matrix is singular.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SingularityCheck {
    /// Reject only a determinant that is exactly `0.0`.
    ///
    /// Near-degenerate matrices are inverted anyway and may produce very
    /// large, numerically unstable entries.
    #[default]
    Exact,

    /// Reject any determinant whose magnitude is at or below the given value.
    Tolerance(f64),
}

impl SingularityCheck {
    /// Returns `true` when `determinant` must be treated as singular.
    #[inline]
    #[must_use]
    pub fn is_singular(self, determinant: f64) -> bool {
        match self {
            Self::Exact => determinant == 0.0,
            Self::Tolerance(eps) => determinant.abs() <= eps.abs(),
        }
    }
}

/// Bundle of numerical settings for transform operations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MathSettings {
    /// Policy used by inversion.
    pub singularity: SingularityCheck,
    /// See [`DEFAULT_GIMBAL_TOLERANCE`].
    pub gimbal_tolerance: f64,
}

impl Default for MathSettings {
    fn default() -> Self {
        Self {
            singularity: SingularityCheck::default(),
            gimbal_tolerance: DEFAULT_GIMBAL_TOLERANCE,
        }
    }
}
