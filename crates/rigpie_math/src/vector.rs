//! Three-component vector.
//!
//! [`Vector`] is the position/direction type handed to the host when placing
//! controls and joints. Arithmetic goes through `glam::DVec3` so the results
//! match what the rest of the math stack computes.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::DVec3;

use crate::axis::{Axis, AxisTable};
use crate::errors::{MathError, Result};

/// Plane normal used to mirror rig elements from one side to the other.
///
/// Reflecting about this normal negates X, which is the left/right axis of
/// the side-naming convention (`Lf` ↔ `Rt`).
pub const MIRROR_PLANE_NORMAL: Vector = Vector::new(-1.0, 0.0, 0.0);

/// A 3D vector of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);
    pub const ONE: Vector = Vector::new(1.0, 1.0, 1.0);
    pub const X: Vector = Vector::new(1.0, 0.0, 0.0);
    pub const Y: Vector = Vector::new(0.0, 1.0, 0.0);
    pub const Z: Vector = Vector::new(0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    #[must_use]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    #[must_use]
    pub fn as_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    // ========================================================================
    // Products & Magnitude
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Vector) -> f64 {
        self.as_dvec3().dot(rhs.as_dvec3())
    }

    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Vector) -> Vector {
        self.as_dvec3().cross(rhs.as_dvec3()).into()
    }

    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.as_dvec3().length()
    }

    /// Squared length. Use this to compare magnitudes without a square root.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.as_dvec3().length_squared()
    }

    // ========================================================================
    // Fallible Division
    // ========================================================================

    /// Divides every component by `scalar`.
    pub fn checked_div(self, scalar: f64) -> Result<Vector> {
        if scalar == 0.0 {
            return Err(MathError::DivisionByZero { operation: "Vector::checked_div" });
        }
        Ok((self.as_dvec3() / scalar).into())
    }

    /// Componentwise division. Fails if any component of `rhs` is zero.
    pub fn checked_div_elementwise(self, rhs: Vector) -> Result<Vector> {
        if rhs.x == 0.0 || rhs.y == 0.0 || rhs.z == 0.0 {
            return Err(MathError::DivisionByZero {
                operation: "Vector::checked_div_elementwise",
            });
        }
        Ok((self.as_dvec3() / rhs.as_dvec3()).into())
    }

    /// Scales `self` to unit length in place.
    ///
    /// A zero vector has no direction and is left untouched.
    pub fn normalize(&mut self) -> Result<()> {
        let length = self.length();
        if length == 0.0 {
            return Err(MathError::DivisionByZero { operation: "Vector::normalize" });
        }
        *self = (self.as_dvec3() / length).into();
        Ok(())
    }

    /// Unit-length copy of `self`.
    pub fn normalized(self) -> Result<Vector> {
        let mut v = self;
        v.normalize()?;
        Ok(v)
    }

    /// Flips the direction of `self` in place.
    #[inline]
    pub fn negate(&mut self) {
        *self = -*self;
    }

    // ========================================================================
    // Reflection
    // ========================================================================

    /// Reflects `self` about the plane through the origin with normal `normal`.
    ///
    /// Computes `v - 2 (v·n) n`; `normal` is expected to be unit length.
    #[must_use]
    pub fn reflect(self, normal: Vector) -> Vector {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Reflects `self` across the left/right mirror plane.
    #[inline]
    #[must_use]
    pub fn mirrored(self) -> Vector {
        self.reflect(MIRROR_PLANE_NORMAL)
    }

    // ========================================================================
    // Axis Helpers
    // ========================================================================

    #[inline]
    #[must_use]
    pub const fn from_axis(axis: Axis) -> Vector {
        axis.unit()
    }

    /// First axis with a non-zero component, checked in X, Y, Z order.
    #[must_use]
    pub fn axis(self) -> Option<Axis> {
        if self.x != 0.0 {
            Some(Axis::X)
        } else if self.y != 0.0 {
            Some(Axis::Y)
        } else if self.z != 0.0 {
            Some(Axis::Z)
        } else {
            None
        }
    }

    /// Maps an exact signed unit axis to the host's integer enumeration.
    ///
    /// Returns `None` for anything that is not exactly `±X`, `±Y` or `±Z`.
    #[must_use]
    pub fn host_axis_index(self, table: AxisTable) -> Option<u8> {
        Axis::ALL.into_iter().find_map(|axis| {
            if self == axis.unit() {
                Some(table.index(axis, true))
            } else if self == -axis.unit() {
                Some(table.index(axis, false))
            } else {
                None
            }
        })
    }

    /// Returns `true` if every component differs by at most `max_abs_diff`.
    #[inline]
    #[must_use]
    pub fn abs_diff_eq(self, rhs: Vector, max_abs_diff: f64) -> bool {
        self.as_dvec3().abs_diff_eq(rhs.as_dvec3(), max_abs_diff)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<DVec3> for Vector {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for DVec3 {
    #[inline]
    fn from(v: Vector) -> Self {
        v.as_dvec3()
    }
}

impl From<[f64; 3]> for Vector {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector> for [f64; 3] {
    #[inline]
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl From<Axis> for Vector {
    #[inline]
    fn from(axis: Axis) -> Self {
        axis.unit()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3},{:.3},{:.3}]", self.x, self.y, self.z)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        (self.as_dvec3() + rhs.as_dvec3()).into()
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        (self.as_dvec3() - rhs.as_dvec3()).into()
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

/// Uniform scale.
impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        (self.as_dvec3() * rhs).into()
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

/// Componentwise (Hadamard) product. This is not the dot product.
impl Mul<Vector> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        (self.as_dvec3() * rhs.as_dvec3()).into()
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}
