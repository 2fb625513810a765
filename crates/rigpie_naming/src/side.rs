//! Side tokens of the bilateral naming convention.

use std::fmt;

/// Number of characters every side token occupies at the front of a name.
pub const SIDE_LEN: usize = 2;

/// Placement of a rig element relative to the character's mirror plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// `Lf`
    Left,
    /// `Rt`
    Right,
    /// `Cn`
    Center,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Left, Side::Right, Side::Center];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Left => "Lf",
            Side::Right => "Rt",
            Side::Center => "Cn",
        }
    }

    /// Parses a two-character side token. Unknown tokens yield `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Side> {
        Side::ALL.into_iter().find(|side| side.as_str() == token)
    }

    /// The opposite side. `Center` mirrors onto itself.
    #[must_use]
    pub const fn mirror(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Center => Side::Center,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
