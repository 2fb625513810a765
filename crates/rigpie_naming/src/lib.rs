//! Structured Name Codec
//!
//! Parses and formats the compact node-naming convention used for every
//! generated rig node: a two-character side, a descriptor, an optional
//! numeric iterator, a capitalized category and an optional numeric
//! instance (`LfElbowFk2Ctrl3`).
//!
//! See [`StructuredName`] for the value type and [`scan`] for how field
//! boundaries are recovered from a string.

pub mod category;
pub mod errors;
pub mod name;
pub mod scan;
pub mod side;

pub use errors::{MalformedReason, NameError, Result};
pub use name::StructuredName;
pub use side::Side;
