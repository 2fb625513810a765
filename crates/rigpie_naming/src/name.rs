//! Structured scene-node names.
//!
//! Every node the rig builders create is named with five concatenated
//! fields:
//!
//! ```text
//!   Lf   ElbowFk   2      Ctrl      3
//!   side descriptor iterator category instance
//! ```
//!
//! - **side**: always the first two characters (`Lf`, `Rt`, `Cn`, ...).
//! - **descriptor**: free-form label.
//! - **iterator**: optional digits indexing repeated descriptors.
//! - **category**: capitalized role suffix (`Ctrl`, `Jnt`, `Null`, ...).
//! - **instance**: optional trailing digits disambiguating duplicates.
//!
//! A [`StructuredName`] is a value: derive a new name from an existing one
//! with the `with_*` methods, which leave the source untouched.
//!
//! The builders do not check their input, so a name assembled from parts
//! may encode to a string that decodes differently (an empty descriptor, a
//! lowercase category). Use [`StructuredName::try_new`] or
//! [`StructuredName::validated`] where that matters.
//!
//! ```rust
//! use rigpie_naming::{category, StructuredName};
//!
//! let joint: StructuredName = "LfElbowJnt".parse()?;
//! let control = joint.append_descriptor("Fk").with_category(category::CTRL);
//!
//! assert_eq!(control.to_string(), "LfElbowFkCtrl");
//! assert_eq!(joint.to_string(), "LfElbowJnt");
//! # Ok::<(), rigpie_naming::NameError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::category;
use crate::errors::{NameError, Result};
use crate::scan::scan;
use crate::side::{SIDE_LEN, Side};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct StructuredName {
    side: String,
    descriptor: String,
    iterator: String,
    category: String,
    instance: String,
}

impl StructuredName {
    /// A name with no iterator or instance. The fields are not checked; see
    /// [`try_new`](Self::try_new).
    #[must_use]
    pub fn new(side: Side, descriptor: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            side: side.as_str().to_string(),
            descriptor: descriptor.into(),
            iterator: String::new(),
            category: category.into(),
            instance: String::new(),
        }
    }

    /// Like [`new`](Self::new), but fails unless the name round-trips.
    pub fn try_new(side: Side, descriptor: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        Self::new(side, descriptor, category).validated()
    }

    /// Returns `self` if decoding its encoding gives back the same fields.
    ///
    /// Fails with the decoder's [`NameError::Malformed`] when the encoding is
    /// rejected outright, or [`NameError::NonCanonical`] when it decodes into
    /// different fields.
    pub fn validated(self) -> Result<Self> {
        let encoded = self.encode();
        if Self::decode(&encoded)? == self {
            Ok(self)
        } else {
            Err(NameError::NonCanonical { name: encoded })
        }
    }

    /// Splits `raw` into its five fields.
    pub fn decode(raw: &str) -> Result<Self> {
        let chars: Vec<char> = raw.chars().collect();
        let segments = scan(&chars).map_err(|reason| {
            log::debug!("Rejected name {raw:?}: {reason}");
            NameError::Malformed { name: raw.to_string(), reason }
        })?;

        let field = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
        Ok(Self {
            side: field(segments.side),
            descriptor: field(segments.descriptor),
            iterator: field(segments.iterator),
            category: field(segments.category),
            instance: field(segments.instance),
        })
    }

    /// Joins the fields back into a single node name.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Whether decoding [`encode`](Self::encode) gives back exactly these fields.
    ///
    /// Names built piecemeal can drift from the convention, for example an
    /// iterator containing letters or a descriptor ending in digits.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        Self::decode(&self.encode()).is_ok_and(|decoded| decoded == *self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn side(&self) -> &str {
        &self.side
    }

    /// The side as a known [`Side`], if it is one.
    #[must_use]
    pub fn side_kind(&self) -> Option<Side> {
        Side::from_token(&self.side)
    }

    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Iterator digits, or `""` when absent.
    #[inline]
    #[must_use]
    pub fn iterator(&self) -> &str {
        &self.iterator
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Instance digits, or `""` when absent.
    #[inline]
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    // ========================================================================
    // Derived Names
    // ========================================================================

    #[must_use]
    pub fn with_side(&self, side: Side) -> Self {
        Self { side: side.as_str().to_string(), ..self.clone() }
    }

    /// Like [`with_side`](Self::with_side) for tokens outside [`Side`].
    pub fn with_side_token(&self, token: &str) -> Result<Self> {
        if token.chars().count() != SIDE_LEN {
            return Err(NameError::InvalidSide(token.to_string()));
        }
        Ok(Self { side: token.to_string(), ..self.clone() })
    }

    #[must_use]
    pub fn with_descriptor(&self, descriptor: impl Into<String>) -> Self {
        Self { descriptor: descriptor.into(), ..self.clone() }
    }

    /// Same name with `suffix` added to the descriptor, e.g. `Elbow` → `ElbowFk`.
    #[must_use]
    pub fn append_descriptor(&self, suffix: &str) -> Self {
        let mut name = self.clone();
        name.descriptor.push_str(suffix);
        name
    }

    /// Sets the iterator. Numbers are written in decimal without padding;
    /// pass a string such as `"02"` to keep explicit zero padding.
    #[must_use]
    pub fn with_iterator(&self, iterator: impl fmt::Display) -> Self {
        Self { iterator: iterator.to_string(), ..self.clone() }
    }

    #[must_use]
    pub fn without_iterator(&self) -> Self {
        Self { iterator: String::new(), ..self.clone() }
    }

    #[must_use]
    pub fn with_category(&self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category::is_valid(&category) {
            log::warn!("Category {category:?} will not decode back as a single token");
        }
        Self { category, ..self.clone() }
    }

    /// Sets the instance; same formatting rules as [`with_iterator`](Self::with_iterator).
    #[must_use]
    pub fn with_instance(&self, instance: impl fmt::Display) -> Self {
        Self { instance: instance.to_string(), ..self.clone() }
    }

    #[must_use]
    pub fn without_instance(&self) -> Self {
        Self { instance: String::new(), ..self.clone() }
    }

    /// Same name on the opposite side. Unknown sides and `Cn` are kept.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        match self.side_kind() {
            Some(side) => self.with_side(side.mirror()),
            None => self.clone(),
        }
    }
}

impl Default for StructuredName {
    /// `CnDefaultCtrl`
    fn default() -> Self {
        Self::new(Side::Center, "Default", category::CTRL)
    }
}

impl fmt::Display for StructuredName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.side, self.descriptor, self.iterator, self.category, self.instance
        )
    }
}

impl FromStr for StructuredName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for StructuredName {
    type Error = NameError;

    fn try_from(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl TryFrom<String> for StructuredName {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self> {
        Self::decode(&s)
    }
}

impl From<StructuredName> for String {
    fn from(name: StructuredName) -> Self {
        name.encode()
    }
}
