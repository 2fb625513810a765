//! Coordinate axes and the host's integer axis enumerations.

use std::fmt;
use std::str::FromStr;

use crate::vector::Vector;

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Positive unit vector along this axis.
    #[must_use]
    pub const fn unit(self) -> Vector {
        match self {
            Axis::X => Vector::X,
            Axis::Y => Vector::Y,
            Axis::Z => Vector::Z,
        }
    }

    /// Lowercase axis letter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = UnknownAxis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(UnknownAxis(other.to_string())),
        }
    }
}

/// Returned when an axis letter is not one of `x`, `y`, `z`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown axis: {0:?}")]
pub struct UnknownAxis(pub String);

/// Which of the host's axis enumerations to map a unit vector into.
///
/// The host exposes two orderings: aim/forward attributes list the signed
/// axes in `+X -X +Y -Y +Z -Z` order, while up-vector attributes start with
/// `+Y` and reserve slots for "closest" variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisTable {
    /// `+X=0, -X=1, +Y=2, -Y=3, +Z=4, -Z=5`
    #[default]
    Aim,
    /// `+Y=0, -Y=1, +Z=3, -Z=4, +X=6, -X=7`
    UpClosest,
}

impl AxisTable {
    /// Index of a signed axis in this table.
    #[must_use]
    pub const fn index(self, axis: Axis, positive: bool) -> u8 {
        match (self, axis, positive) {
            (AxisTable::Aim, Axis::X, true) => 0,
            (AxisTable::Aim, Axis::X, false) => 1,
            (AxisTable::Aim, Axis::Y, true) => 2,
            (AxisTable::Aim, Axis::Y, false) => 3,
            (AxisTable::Aim, Axis::Z, true) => 4,
            (AxisTable::Aim, Axis::Z, false) => 5,
            (AxisTable::UpClosest, Axis::X, true) => 6,
            (AxisTable::UpClosest, Axis::X, false) => 7,
            (AxisTable::UpClosest, Axis::Y, true) => 0,
            (AxisTable::UpClosest, Axis::Y, false) => 1,
            (AxisTable::UpClosest, Axis::Z, true) => 3,
            (AxisTable::UpClosest, Axis::Z, false) => 4,
        }
    }
}
