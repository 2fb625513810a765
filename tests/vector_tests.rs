//! Vector tests
//!
//! Tests for:
//! - Componentwise and scalar arithmetic
//! - Dot/cross products and lengths
//! - Fallible division and normalization
//! - Reflection and the left/right mirror plane
//! - Axis helpers and glam interop

use glam::DVec3;
use rigpie::math::MathError;
use rigpie::{Axis, AxisTable, MIRROR_PLANE_NORMAL, RigError, Vector};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f64 = 1e-9;

fn vec_approx(a: Vector, b: Vector) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn add_and_sub() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(-4.0, 0.5, 10.0);
    assert_eq!(a + b, Vector::new(-3.0, 2.5, 13.0));
    assert_eq!(a - b, Vector::new(5.0, 1.5, -7.0));

    let mut c = a;
    c += b;
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn scalar_and_componentwise_multiply() {
    let v = Vector::new(1.0, -2.0, 3.0);
    assert_eq!(v * 2.0, Vector::new(2.0, -4.0, 6.0));
    assert_eq!(2.0 * v, v * 2.0);
    assert_eq!(v * Vector::new(2.0, 3.0, 4.0), Vector::new(2.0, -6.0, 12.0));
}

#[test]
fn cross_of_x_and_y_is_z() {
    assert_eq!(Vector::new(1.0, 0.0, 0.0).cross(Vector::new(0.0, 1.0, 0.0)), Vector::new(0.0, 0.0, 1.0));
    assert_eq!(Vector::Y.cross(Vector::X), -Vector::Z);
}

#[test]
fn dot_and_lengths() {
    let v = Vector::new(3.0, 4.0, 12.0);
    assert_eq!(v.length_squared(), 169.0);
    assert_eq!(v.length(), 13.0);
    assert_eq!(v.dot(Vector::X), 3.0);
    assert_eq!(Vector::X.dot(Vector::Y), 0.0);
}

// ============================================================================
// Division & Normalization
// ============================================================================

#[test]
fn divide_by_zero_fails() {
    let v = Vector::new(1.0, 2.0, 3.0);
    assert_eq!(
        v.checked_div(0.0),
        Err(MathError::DivisionByZero { operation: "Vector::checked_div" })
    );
    assert_eq!(v.checked_div(4.0), Ok(Vector::new(0.25, 0.5, 0.75)));
}

#[test]
fn normalize_in_place() {
    let mut v = Vector::new(0.0, 3.0, 4.0);
    v.normalize().unwrap();
    assert!(vec_approx(v, Vector::new(0.0, 0.6, 0.8)));
    assert!((v.length() - 1.0).abs() < EPSILON);
}

#[test]
fn normalize_zero_vector_fails() {
    let mut v = Vector::ZERO;
    let err: RigError = v.normalize().unwrap_err().into();
    assert!(err.is_division_by_zero());
    assert!(Vector::ZERO.normalized().is_err());
}

// ============================================================================
// Reflection
// ============================================================================

#[test]
fn mirror_plane_flips_x() {
    let v = Vector::new(12.5, 3.0, -1.0);
    assert!(vec_approx(v.mirrored(), Vector::new(-12.5, 3.0, -1.0)));
    assert!(vec_approx(v.reflect(MIRROR_PLANE_NORMAL), v.mirrored()));
}

#[test]
fn reflect_twice_is_identity() {
    let normals = [
        Vector::X,
        Vector::Y,
        MIRROR_PLANE_NORMAL,
        Vector::new(1.0, 2.0, -2.0).normalized().unwrap(),
        Vector::new(-0.3, 0.1, 0.9).normalized().unwrap(),
    ];
    let v = Vector::new(4.0, -7.0, 0.25);

    for n in normals {
        assert!(vec_approx(v.reflect(n).reflect(n), v), "normal {n}");
    }
}

#[test]
fn reflect_preserves_in_plane_component() {
    let n = Vector::Y;
    let v = Vector::new(2.0, 5.0, -3.0);
    let r = v.reflect(n);
    assert!(vec_approx(r, Vector::new(2.0, -5.0, -3.0)));
    assert!((r.length() - v.length()).abs() < EPSILON);
}

// ============================================================================
// Axis helpers & interop
// ============================================================================

#[test]
fn axis_round_trip() {
    for axis in Axis::ALL {
        let v = Vector::from_axis(axis);
        assert_eq!(v.axis(), Some(axis));
        assert_eq!(v.length(), 1.0);
    }
    assert_eq!(Vector::from("z".parse::<Axis>().unwrap()), Vector::Z);
}

#[test]
fn host_axis_enumerations() {
    let aim: Vec<_> = [Vector::X, -Vector::X, Vector::Y, -Vector::Y, Vector::Z, -Vector::Z]
        .into_iter()
        .map(|v| v.host_axis_index(AxisTable::Aim))
        .collect();
    assert_eq!(aim, [Some(0), Some(1), Some(2), Some(3), Some(4), Some(5)]);

    let up: Vec<_> = [Vector::Y, -Vector::Y, Vector::Z, -Vector::Z, Vector::X, -Vector::X]
        .into_iter()
        .map(|v| v.host_axis_index(AxisTable::UpClosest))
        .collect();
    assert_eq!(up, [Some(0), Some(1), Some(3), Some(4), Some(6), Some(7)]);

    assert_eq!(Vector::new(2.0, 0.0, 0.0).host_axis_index(AxisTable::Aim), None);
}

#[test]
fn glam_round_trip() {
    let v = Vector::new(1.5, -2.5, 3.5);
    let d: DVec3 = v.into();
    assert_eq!(d, DVec3::new(1.5, -2.5, 3.5));
    assert_eq!(Vector::from(d), v);
    assert_eq!(<[f64; 3]>::from(v), [1.5, -2.5, 3.5]);
}
