//! # rigpie
//!
//! Host-independent utilities for character-rig building:
//!
//! - [`naming`]: the structured node-name codec (`LfElbowFk2Ctrl3`).
//! - [`math`]: 3D vectors and row-major 4x4 affine transforms.
//! - [`errors`]: [`RigError`], the union of both crates' failures.
//!
//! Rig-construction code derives node names with [`StructuredName`] and
//! computes world placements with [`Transform`] / [`Vector`] before issuing
//! host commands. Nothing in this crate calls the host.
//!
//! ```rust
//! use rigpie::prelude::*;
//!
//! let joint = StructuredName::decode("LfWristJnt")?;
//! let wrist = Transform::from_translation(Vector::new(42.0, 130.0, -3.0));
//!
//! let mirror_name = joint.mirrored().with_category(category::CTRL);
//! let mirror_xform = wrist.mirrored();
//!
//! assert_eq!(mirror_name.to_string(), "RtWristCtrl");
//! assert_eq!(mirror_xform.translation(), Vector::new(-42.0, 130.0, -3.0));
//! # Ok::<(), RigError>(())
//! ```

pub mod errors;

pub use rigpie_math as math;
pub use rigpie_naming as naming;

pub use errors::{Result, RigError};
pub use rigpie_math::{Axis, AxisTable, MIRROR_PLANE_NORMAL, MathSettings, SingularityCheck, Transform, Vector};
pub use rigpie_naming::{Side, StructuredName, category};

/// Glob-importable set of the commonly used types.
pub mod prelude {
    pub use crate::errors::{Result, RigError};
    pub use rigpie_math::{Axis, AxisTable, MIRROR_PLANE_NORMAL, SingularityCheck, Transform, Vector};
    pub use rigpie_naming::{Side, StructuredName, category};
}
