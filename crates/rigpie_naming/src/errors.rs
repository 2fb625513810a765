//! Error Types
//!
//! Decoding is a best-effort segmentation of an opaque string. When the
//! string cannot follow the naming convention the decoder stops with a
//! [`NameError`] instead of guessing field boundaries.

use thiserror::Error;

/// Errors raised while decoding or editing a [`StructuredName`](crate::StructuredName).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The string does not follow the `side + descriptor + iterator + Category + instance` layout.
    #[error("Malformed name {name:?}: {reason}")]
    Malformed {
        /// The rejected input
        name: String,
        /// Which part of the layout could not be found
        reason: MalformedReason,
    },

    /// Fields assembled by the builders encode to a string that decodes
    /// into different fields.
    #[error("Name {name:?} does not decode back into the fields it was built from")]
    NonCanonical {
        /// The encoded name
        name: String,
    },

    /// A side token was not exactly two characters long.
    #[error("Invalid side token {0:?}: expected exactly two characters")]
    InvalidSide(String),
}

/// Why a string was rejected by the decoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("name is empty")]
    EmptyName,

    #[error("name needs at least a two-character side, one descriptor character and a category")]
    TooShort,

    #[error("no capitalized category found after the side prefix")]
    MissingCategory,

    #[error("nothing left for the descriptor between the side and the category")]
    EmptyDescriptor,
}

/// Alias for `Result<T, NameError>`.
pub type Result<T> = std::result::Result<T, NameError>;
