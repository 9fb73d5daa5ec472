//! Field paths for addressing within a document
//!
//! Provides [`FieldPath`] for locating a single field inside the document
//! tree, including positions inside ordered collections.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One step of a [`FieldPath`]
///
/// Paths mix named fields and collection indices, e.g.
/// `outcomes[0].indicators[1].metric.target`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Named field (`metric`, `statement`, ...)
    Field(String),
    /// Position within an ordered collection (`[3]`)
    Index(usize),
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, "{}", name),
            Segment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Path to a field within a document
///
/// Collection order in the document is preserved, so indices are stable
/// and reproducible across evaluations of the same snapshot.
///
/// # Examples
/// - `["problemContext", "problem", "statement"]` → `problemContext.problem.statement`
/// - `["outcomes", 2, "indicators", 0]` → `outcomes[2].indicators[0]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    /// Empty path (document root)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from a single named field
    #[inline]
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self(vec![Segment::Field(name.into())])
    }

    /// Create a path from pre-built segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Append a named field, returning the new path
    #[inline]
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(Segment::Field(name.into()));
        new
    }

    /// Append a collection index, returning the new path
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Self {
        let mut new = self.clone();
        new.0.push(Segment::Index(index));
        new
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path is empty (root)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get parent path (if not root)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Get last segment (if not root)
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    /// Check if this path is a prefix of another
    ///
    /// # Examples
    /// - `outcomes[0]` is prefix of `outcomes[0].statement`
    /// - `outcomes[0]` is NOT prefix of `outcomes[1]`
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        if self.0.len() > other.0.len() {
            return false;
        }
        self.0 == other.0[..self.0.len()]
    }

    /// Check if this path is an ancestor of another (strict prefix)
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && self.is_prefix_of(other)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            // Indices attach to the preceding field without a separator
            if i > 0 && matches!(segment, Segment::Field(_)) {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                return Err(PathError::EmptySegment);
            }

            // A part is a field name optionally followed by `[n]` suffixes
            let name_end = part.find('[').unwrap_or(part.len());
            let name = &part[..name_end];
            if name.is_empty() {
                return Err(PathError::InvalidSegment(part.to_string()));
            }
            if name.contains(|c: char| !c.is_alphanumeric() && c != '_') {
                return Err(PathError::InvalidSegment(name.to_string()));
            }
            segments.push(Segment::Field(name.to_string()));

            let mut rest = &part[name_end..];
            while !rest.is_empty() {
                let close = rest
                    .find(']')
                    .ok_or_else(|| PathError::InvalidSegment(part.to_string()))?;
                if !rest.starts_with('[') {
                    return Err(PathError::InvalidSegment(part.to_string()));
                }
                let index: usize = rest[1..close]
                    .parse()
                    .map_err(|_| PathError::InvalidIndex(rest[1..close].to_string()))?;
                segments.push(Segment::Index(index));
                rest = &rest[close + 1..];
            }
        }

        Ok(Self(segments))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Errors related to field paths
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Empty segment in path
    #[error("path contains empty segment")]
    EmptySegment,

    /// Invalid segment characters
    #[error("invalid segment: {0} (must be alphanumeric or underscore)")]
    InvalidSegment(String),

    /// Malformed collection index
    #[error("invalid collection index: {0}")]
    InvalidIndex(String),
}
