//! Category tokens used by the rig builders.
//!
//! Categories are free-form, but generated nodes stick to this set so that
//! tools can find them again by suffix.

/// Animator-facing control curve.
pub const CTRL: &str = "Ctrl";
/// Skinning or rig joint.
pub const JNT: &str = "Jnt";
/// Empty transform used for grouping or offsets.
pub const NULL: &str = "Null";
/// Top-level DAG group of a component.
pub const DAG: &str = "Dag";
/// Offset group that zeroes a control's channels.
pub const ZERO: &str = "Zero";
/// Secondary offset driven by automation.
pub const AUTO: &str = "Auto";
/// Root transform of a rig component.
pub const COMPONENT: &str = "Component";
pub const IK_HANDLE: &str = "Ikhandle";
pub const EFFECTOR: &str = "Effector";
pub const CURVE: &str = "Curve";
pub const CONDITION: &str = "Condition";
pub const MULTIPLY_DIVIDE: &str = "Multiplydivide";
pub const PLUS_MINUS_AVERAGE: &str = "Plusminusaverage";
pub const REMAP_VALUE: &str = "Remapvalue";
pub const MOTION_PATH: &str = "Motionpath";
pub const BLEND_MATRIX: &str = "Blendmatrix";
pub const MULT_MATRIX: &str = "Multmatrix";
pub const CURVE_INFO: &str = "Curveinfo";
pub const PROXIMITY_PIN: &str = "Proximitypin";

pub const ALL: [&str; 19] = [
    CTRL,
    JNT,
    NULL,
    DAG,
    ZERO,
    AUTO,
    COMPONENT,
    IK_HANDLE,
    EFFECTOR,
    CURVE,
    CONDITION,
    MULTIPLY_DIVIDE,
    PLUS_MINUS_AVERAGE,
    REMAP_VALUE,
    MOTION_PATH,
    BLEND_MATRIX,
    MULT_MATRIX,
    CURVE_INFO,
    PROXIMITY_PIN,
];

/// Whether `category` survives an encode/decode cycle as a single token.
///
/// The decoder takes the *last* uppercase letter as the category start and
/// hands trailing digits to the instance, so a valid category starts with
/// its only uppercase letter and does not end in a digit.
#[must_use]
pub fn is_valid(category: &str) -> bool {
    let mut chars = category.chars();
    let starts_upper = chars.next().is_some_and(char::is_uppercase);
    starts_upper
        && !chars.any(char::is_uppercase)
        && !category.ends_with(|c: char| c.is_ascii_digit())
}
