//! Row-major 4x4 affine transform.
//!
//! # Layout
//!
//! A [`Transform`] stores sixteen values in row-major order and follows the
//! **row-vector** convention: a point is transformed as `p' = p * M`.
//!
//! ```text
//!  [ 0  1  2  3]   <- X axis   (3 = 0)
//!  [ 4  5  6  7]   <- Y axis   (7 = 0)
//!  [ 8  9 10 11]   <- Z axis  (11 = 0)
//!  [12 13 14 15]   <- translation (15 = 1)
//! ```
//!
//! This is the same memory layout the host application uses for world
//! matrices, so values can be copied in and out without reordering.
//!
//! # Composition Order
//!
//! `a * b` means "apply `a`, then `b`". A child's world matrix is
//! `child_local * parent_world`. Getting the order backwards silently
//! double-applies or undoes a parent transform.
//!
//! # glam Interop
//!
//! Reading the sixteen values column-major gives the equivalent
//! column-vector matrix, so `DMat4::from(t)` transforms points exactly
//! like `t` does.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use glam::DMat4;

use crate::errors::{MathError, Result};
use crate::settings::{MathSettings, NEAR_SINGULAR_WARN_THRESHOLD, SingularityCheck};
use crate::vector::{MIRROR_PLANE_NORMAL, Vector};

/// A 4x4 affine transform, row-major, row-vector convention.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    m: [f64; 16],
}

impl Transform {
    #[rustfmt::skip]
    pub const IDENTITY: Transform = Transform::from_array([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub const ZERO: Transform = Transform::from_array([0.0; 16]);

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Builds a transform from sixteen row-major values.
    #[inline]
    #[must_use]
    pub const fn from_array(m: [f64; 16]) -> Self {
        Self { m }
    }

    /// Builds a transform from a slice that must hold exactly sixteen values.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let m: [f64; 16] = values.try_into().map_err(|_| MathError::InvalidLength {
            expected: 16,
            found: values.len(),
        })?;
        Ok(Self { m })
    }

    #[must_use]
    pub fn from_translation(translation: Vector) -> Self {
        let mut t = Self::IDENTITY;
        t.set_translation(translation);
        t
    }

    #[rustfmt::skip]
    #[must_use]
    pub const fn from_scale(x: f64, y: f64, z: f64) -> Self {
        Self::from_array([
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a transform from basis axes and a translation.
    #[rustfmt::skip]
    #[must_use]
    pub const fn from_axes(x_axis: Vector, y_axis: Vector, z_axis: Vector, translation: Vector) -> Self {
        Self::from_array([
            x_axis.x,      x_axis.y,      x_axis.z,      0.0,
            y_axis.x,      y_axis.y,      y_axis.z,      0.0,
            z_axis.x,      z_axis.y,      z_axis.z,      0.0,
            translation.x, translation.y, translation.z, 1.0,
        ])
    }

    /// Rotation from XYZ Euler angles in degrees (X applied first, then Y, then Z).
    #[rustfmt::skip]
    #[must_use]
    pub fn from_euler_degrees(x: f64, y: f64, z: f64) -> Self {
        let (sa, ca) = x.to_radians().sin_cos();
        let (sb, cb) = y.to_radians().sin_cos();
        let (sc, cc) = z.to_radians().sin_cos();

        let rx = Self::from_array([
            1.0, 0.0, 0.0, 0.0,
            0.0, ca,  sa,  0.0,
            0.0, -sa, ca,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let ry = Self::from_array([
            cb,  0.0, -sb, 0.0,
            0.0, 1.0, 0.0, 0.0,
            sb,  0.0, cb,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let rz = Self::from_array([
            cc,  sc,  0.0, 0.0,
            -sc, cc,  0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);

        rx * ry * rz
    }

    // ========================================================================
    // Raw Access
    // ========================================================================

    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[f64; 16] {
        &self.m
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 16] {
        self.m
    }

    /// Element at `row`, `col`, or `None` when either is outside `0..4`.
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < 4 && col < 4 { Some(self.m[row * 4 + col]) } else { None }
    }

    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> [f64; 4] {
        let i = row * 4;
        [self.m[i], self.m[i + 1], self.m[i + 2], self.m[i + 3]]
    }

    // ========================================================================
    // Composition & Application
    // ========================================================================

    /// `self * rhs`: apply `self`, then `rhs`.
    #[must_use]
    pub fn compose(&self, rhs: &Transform) -> Transform {
        // Column-vector glam matrices compose in the opposite order.
        Transform::from(DMat4::from(*rhs) * DMat4::from(*self))
    }

    /// `point * self`, including translation.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, point: Vector) -> Vector {
        DMat4::from(*self).transform_point3(point.as_dvec3()).into()
    }

    /// `direction * self`, ignoring translation.
    #[inline]
    #[must_use]
    pub fn transform_direction(&self, direction: Vector) -> Vector {
        DMat4::from(*self).transform_vector3(direction.as_dvec3()).into()
    }

    // ========================================================================
    // Translation
    // ========================================================================

    #[inline]
    #[must_use]
    pub const fn translation(&self) -> Vector {
        Vector::new(self.m[12], self.m[13], self.m[14])
    }

    #[inline]
    pub fn set_translation(&mut self, translation: Vector) -> &mut Self {
        self.m[12] = translation.x;
        self.m[13] = translation.y;
        self.m[14] = translation.z;
        self
    }

    /// Adds `delta` to the translation, leaving rotation/scale untouched.
    ///
    /// `delta` must already be expressed in the space this matrix maps into.
    #[inline]
    pub fn translate(&mut self, delta: Vector) -> &mut Self {
        let t = self.translation() + delta;
        self.set_translation(t)
    }

    // ========================================================================
    // Basis
    // ========================================================================

    #[inline]
    #[must_use]
    pub const fn x_axis(&self) -> Vector {
        Vector::new(self.m[0], self.m[1], self.m[2])
    }

    #[inline]
    #[must_use]
    pub const fn y_axis(&self) -> Vector {
        Vector::new(self.m[4], self.m[5], self.m[6])
    }

    #[inline]
    #[must_use]
    pub const fn z_axis(&self) -> Vector {
        Vector::new(self.m[8], self.m[9], self.m[10])
    }

    /// Per-axis scale, measured as the length of each basis axis.
    #[must_use]
    pub fn scale(&self) -> Vector {
        Vector::new(
            self.x_axis().length(),
            self.y_axis().length(),
            self.z_axis().length(),
        )
    }

    /// XYZ Euler rotation in degrees. See [`Transform::rotation_degrees_with`].
    #[must_use]
    pub fn rotation_degrees(&self) -> [f64; 3] {
        self.rotation_degrees_with(MathSettings::default())
    }

    /// XYZ Euler rotation in degrees, inverse of [`Transform::from_euler_degrees`].
    ///
    /// Scale is removed by normalizing the basis axes first. Shear is not
    /// removed and skews the result.
    ///
    /// When the Y rotation is within `settings.gimbal_tolerance` of ±90° the
    /// decomposition is not unique; Z is reported as `0` and the remaining
    /// rotation is attributed to X.
    #[must_use]
    pub fn rotation_degrees_with(&self, settings: MathSettings) -> [f64; 3] {
        let x = self.x_axis().normalized().unwrap_or(Vector::ZERO);
        let y = self.y_axis().normalized().unwrap_or(Vector::ZERO);
        let z = self.z_axis().normalized().unwrap_or(Vector::ZERO);

        let sin_y = (-x.z).clamp(-1.0, 1.0);
        let ry = sin_y.asin();

        let (rx, rz) = if 1.0 - sin_y.abs() > settings.gimbal_tolerance {
            (y.z.atan2(z.z), x.y.atan2(x.x))
        } else {
            ((sin_y * y.x).atan2(y.y), 0.0)
        };

        [rx.to_degrees(), ry.to_degrees(), rz.to_degrees()]
    }

    // ========================================================================
    // Determinant & Inversion
    // ========================================================================

    /// Full 4x4 determinant by expansion over the 2x2 minors of the top and
    /// bottom row pairs.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// 2x2 minors of rows 0-1 (`s`) and rows 2-3 (`c`).
    fn minors(&self) -> ([f64; 6], [f64; 6]) {
        let m = &self.m;
        let s = [
            m[0] * m[5] - m[1] * m[4],
            m[0] * m[6] - m[2] * m[4],
            m[0] * m[7] - m[3] * m[4],
            m[1] * m[6] - m[2] * m[5],
            m[1] * m[7] - m[3] * m[5],
            m[2] * m[7] - m[3] * m[6],
        ];
        let c = [
            m[8] * m[13] - m[9] * m[12],
            m[8] * m[14] - m[10] * m[12],
            m[8] * m[15] - m[11] * m[12],
            m[9] * m[14] - m[10] * m[13],
            m[9] * m[15] - m[11] * m[13],
            m[10] * m[15] - m[11] * m[14],
        ];
        (s, c)
    }

    /// Inverts `self` in place using the default [`SingularityCheck`].
    pub fn invert(&mut self) -> Result<()> {
        self.invert_with(SingularityCheck::default())
    }

    /// Inverts `self` in place as adjugate / determinant.
    ///
    /// On failure `self` is left unchanged.
    #[rustfmt::skip]
    pub fn invert_with(&mut self, check: SingularityCheck) -> Result<()> {
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];

        if check.is_singular(det) {
            log::debug!("Refusing to invert singular matrix (det = {det:e})");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        if det.abs() < NEAR_SINGULAR_WARN_THRESHOLD {
            log::warn!("Inverting near-singular matrix (det = {det:e}); result may be unstable");
        }

        let m = &self.m;
        let adjugate = [
             m[5] * c[5] - m[6] * c[4] + m[7] * c[3],
            -m[1] * c[5] + m[2] * c[4] - m[3] * c[3],
             m[13] * s[5] - m[14] * s[4] + m[15] * s[3],
            -m[9] * s[5] + m[10] * s[4] - m[11] * s[3],

            -m[4] * c[5] + m[6] * c[2] - m[7] * c[1],
             m[0] * c[5] - m[2] * c[2] + m[3] * c[1],
            -m[12] * s[5] + m[14] * s[2] - m[15] * s[1],
             m[8] * s[5] - m[10] * s[2] + m[11] * s[1],

             m[4] * c[4] - m[5] * c[2] + m[7] * c[0],
            -m[0] * c[4] + m[1] * c[2] - m[3] * c[0],
             m[12] * s[4] - m[13] * s[2] + m[15] * s[0],
            -m[8] * s[4] + m[9] * s[2] - m[11] * s[0],

            -m[4] * c[3] + m[5] * c[1] - m[6] * c[0],
             m[0] * c[3] - m[1] * c[1] + m[2] * c[0],
            -m[12] * s[3] + m[13] * s[1] - m[14] * s[0],
             m[8] * s[3] - m[9] * s[1] + m[10] * s[0],
        ];

        let inv_det = 1.0 / det;
        self.m = adjugate.map(|v| v * inv_det);
        Ok(())
    }

    /// Inverts `self` in place using `settings.singularity`.
    #[inline]
    pub fn invert_with_settings(&mut self, settings: MathSettings) -> Result<()> {
        self.invert_with(settings.singularity)
    }

    /// Inverted copy of `self`.
    pub fn inverse(&self) -> Result<Transform> {
        self.inverse_with(MathSettings::default())
    }

    /// Inverted copy of `self` under the given settings.
    pub fn inverse_with(&self, settings: MathSettings) -> Result<Transform> {
        let mut t = *self;
        t.invert_with_settings(settings)?;
        Ok(t)
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    #[must_use]
    pub fn transposed(&self) -> Transform {
        Transform::from(DMat4::from(*self).transpose())
    }

    // ========================================================================
    // Mirroring
    // ========================================================================

    /// Reflects every basis axis and the translation about the plane with
    /// normal `normal`, in place.
    ///
    /// The resulting basis has the opposite handedness (negative determinant).
    pub fn reflect(&mut self, normal: Vector) {
        *self = Transform::from_axes(
            self.x_axis().reflect(normal),
            self.y_axis().reflect(normal),
            self.z_axis().reflect(normal),
            self.translation().reflect(normal),
        );
    }

    /// Copy of `self` reflected across the left/right mirror plane.
    #[must_use]
    pub fn mirrored(&self) -> Transform {
        let mut t = *self;
        t.reflect(MIRROR_PLANE_NORMAL);
        t
    }

    /// Returns `true` if every element differs by at most `max_abs_diff`.
    #[must_use]
    pub fn abs_diff_eq(&self, rhs: &Transform, max_abs_diff: f64) -> bool {
        self.m
            .iter()
            .zip(rhs.m.iter())
            .all(|(a, b)| (a - b).abs() <= max_abs_diff)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Transform> for DMat4 {
    #[inline]
    fn from(t: Transform) -> Self {
        DMat4::from_cols_array(&t.m)
    }
}

impl From<DMat4> for Transform {
    #[inline]
    fn from(mat: DMat4) -> Self {
        Transform::from_array(mat.to_cols_array())
    }
}

impl From<[f64; 16]> for Transform {
    #[inline]
    fn from(m: [f64; 16]) -> Self {
        Transform::from_array(m)
    }
}

impl TryFrom<&[f64]> for Transform {
    type Error = MathError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Transform::from_slice(values)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let [a, b, c, d] = self.row(row);
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{a} {b} {c} {d}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Operators
// ============================================================================

/// Composition: apply `self`, then `rhs`.
impl Mul for Transform {
    type Output = Transform;
    #[inline]
    fn mul(self, rhs: Transform) -> Transform {
        self.compose(&rhs)
    }
}

/// Row-vector point transform: `p * M`.
impl Mul<Transform> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Transform) -> Vector {
        rhs.transform_point(self)
    }
}

/// Translated copy: `translation + delta`.
impl Add<Vector> for Transform {
    type Output = Transform;
    #[inline]
    fn add(mut self, delta: Vector) -> Transform {
        self.translate(delta);
        self
    }
}

/// Translated copy: `translation - delta`.
impl Sub<Vector> for Transform {
    type Output = Transform;
    #[inline]
    fn sub(mut self, delta: Vector) -> Transform {
        self.translate(-delta);
        self
    }
}

impl AddAssign<Vector> for Transform {
    #[inline]
    fn add_assign(&mut self, delta: Vector) {
        self.translate(delta);
    }
}

impl SubAssign<Vector> for Transform {
    #[inline]
    fn sub_assign(&mut self, delta: Vector) {
        self.translate(-delta);
    }
}

/// Elementwise sum.
impl Add for Transform {
    type Output = Transform;
    fn add(self, rhs: Transform) -> Transform {
        let mut m = self.m;
        for (a, b) in m.iter_mut().zip(rhs.m) {
            *a += b;
        }
        Transform::from_array(m)
    }
}

/// Elementwise difference.
impl Sub for Transform {
    type Output = Transform;
    fn sub(self, rhs: Transform) -> Transform {
        let mut m = self.m;
        for (a, b) in m.iter_mut().zip(rhs.m) {
            *a -= b;
        }
        Transform::from_array(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn from_slice_checks_length() {
        assert!(Transform::from_slice(&[0.0; 16]).is_ok());
        assert_eq!(
            Transform::from_slice(&[0.0; 12]),
            Err(MathError::InvalidLength { expected: 16, found: 12 })
        );
    }

    #[test]
    fn determinant_of_scale_is_product() {
        let t = Transform::from_scale(2.0, 3.0, 4.0);
        assert!((t.determinant() - 24.0).abs() < EPSILON);
    }

    #[test]
    fn failed_inversion_leaves_matrix_untouched() {
        let mut t = Transform::from_scale(1.0, 0.0, 1.0);
        let before = t;
        assert!(matches!(t.invert(), Err(MathError::SingularMatrix { .. })));
        assert_eq!(t, before);
    }

    #[test]
    fn transpose_twice_is_identity_op() {
        let t = Transform::from_euler_degrees(10.0, 20.0, 30.0) * Transform::from_translation(Vector::new(1.0, 2.0, 3.0));
        assert_eq!(t.transposed().transposed(), t);
    }

    #[test]
    fn get_is_bounds_checked() {
        let t = Transform::from_translation(Vector::new(1.0, 2.0, 3.0));
        assert_eq!(t.get(3, 1), Some(2.0));
        assert_eq!(t.get(0, 0), Some(1.0));
        assert_eq!(t.get(4, 0), None);
        assert_eq!(t.get(0, 4), None);
    }

    #[test]
    fn settings_policy_reaches_inversion() {
        let m = Transform::from_scale(1e-6, 1.0, 1.0);
        let strict = MathSettings { singularity: SingularityCheck::Tolerance(1e-3), ..MathSettings::default() };

        assert!(m.inverse().is_ok());
        assert!(matches!(m.inverse_with(strict), Err(MathError::SingularMatrix { .. })));

        let mut in_place = m;
        assert!(in_place.invert_with_settings(strict).is_err());
        assert_eq!(in_place, m);
    }

    #[test]
    fn display_four_rows() {
        let s = Transform::IDENTITY.to_string();
        assert_eq!(s.lines().count(), 4);
        assert_eq!(s.lines().next(), Some("1 0 0 0"));
    }
}
