//! The record type every rule produces

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use lfa_model::FieldPath;
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One reported issue or confirmation
///
/// Immutable once constructed. `created_at` is stamped at evaluation
/// time for audit and display only — identity (equality, hashing) is the
/// `(path, severity, message, suggestion)` tuple, so two evaluations of
/// the same snapshot produce equal findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Where in the document the issue sits
    pub path: FieldPath,

    /// How serious it is
    pub severity: Severity,

    /// Human-readable, field-specific message
    pub message: String,

    /// Optional actionable remediation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// When the finding was produced
    pub created_at: DateTime<Utc>,
}

impl Finding {
    /// Create a finding with the given severity
    #[inline]
    #[must_use]
    pub fn new(path: FieldPath, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            path,
            severity,
            message: message.into(),
            suggestion: None,
            created_at: Utc::now(),
        }
    }

    /// ERROR finding: must be fixed to proceed
    #[inline]
    #[must_use]
    pub fn error(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, Severity::Error, message)
    }

    /// WARNING finding: usable but logically weak
    #[inline]
    #[must_use]
    pub fn warning(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, Severity::Warning, message)
    }

    /// INFO finding: advisory nudge
    #[inline]
    #[must_use]
    pub fn info(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, Severity::Info, message)
    }

    /// SUCCESS finding: positive confirmation
    #[inline]
    #[must_use]
    pub fn success(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, Severity::Success, message)
    }

    /// With remediation text
    #[inline]
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Whether this finding blocks progression
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> bool {
        self.severity.blocks()
    }
}

// Identity excludes created_at: timestamps may differ between otherwise
// identical evaluations of the same snapshot.
impl PartialEq for Finding {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.severity == other.severity
            && self.message == other.message
            && self.suggestion == other.suggestion
    }
}

impl Eq for Finding {}

impl Hash for Finding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.severity.hash(state);
        self.message.hash(state);
        self.suggestion.hash(state);
    }
}
