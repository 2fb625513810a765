//! Vector & Affine Transform Algebra
//!
//! Host-independent math used while building rigs: positions and
//! directions ([`Vector`]) and row-major 4x4 world matrices ([`Transform`]).
//!
//! Both types are plain `Copy` values. Nothing here touches the host
//! application, allocates, or holds shared state, so they can be used from
//! any thread.
//!
//! ```rust
//! use rigpie_math::{Transform, Vector};
//!
//! let mut t = Transform::identity();
//! t.translate(Vector::new(5.0, 0.0, 0.0));
//! assert_eq!(t.translation(), Vector::new(5.0, 0.0, 0.0));
//!
//! // Row-vector convention: the point goes on the left.
//! let p = Vector::new(1.0, 2.0, 3.0) * t;
//! assert_eq!(p, Vector::new(6.0, 2.0, 3.0));
//! ```

pub mod axis;
pub mod errors;
pub mod settings;
pub mod transform;
pub mod vector;

pub use axis::{Axis, AxisTable, UnknownAxis};
pub use errors::{MathError, Result};
pub use settings::{MathSettings, SingularityCheck};
pub use transform::Transform;
pub use vector::{MIRROR_PLANE_NORMAL, Vector};
