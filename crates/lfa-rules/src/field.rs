//! Field-level rules
//!
//! Stateless, schema-agnostic predicates over a single value. Each
//! returns zero-or-one finding and never sees the whole document; the
//! section rules reuse them wherever a check is a plain
//! presence/length/range/format test.

use once_cell::sync::Lazy;
use regex::Regex;

use lfa_model::FieldPath;

use crate::finding::Finding;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// ERROR when the value is absent, empty, or whitespace-only
#[must_use]
pub fn required(value: Option<&str>, label: &str, path: FieldPath) -> Option<Finding> {
    match value {
        Some(text) if !text.trim().is_empty() => None,
        _ => Some(
            Finding::error(path, format!("{} is required", label))
                .with_suggestion(format!("Please fill in {}.", label.to_lowercase())),
        ),
    }
}

/// WARNING when the value is present but shorter than `minimum`
///
/// Absent values are not flagged here; pair with [`required`] when the
/// field must also exist.
#[must_use]
pub fn min_length(
    value: Option<&str>,
    minimum: usize,
    label: &str,
    path: FieldPath,
) -> Option<Finding> {
    let text = value?.trim();
    if text.is_empty() || text.chars().count() >= minimum {
        return None;
    }
    Some(
        Finding::warning(
            path,
            format!(
                "{} seems too short ({} characters)",
                label,
                text.chars().count()
            ),
        )
        .with_suggestion(format!(
            "Consider providing more detail (at least {} characters).",
            minimum
        )),
    )
}

/// ERROR when the value is present and non-finite or outside `[min, max]`
#[must_use]
pub fn numeric_range(
    value: Option<f64>,
    label: &str,
    path: FieldPath,
    min: f64,
    max: f64,
) -> Option<Finding> {
    let number = value?;
    if number.is_finite() && number >= min && number <= max {
        return None;
    }
    Some(
        Finding::error(
            path,
            format!("{} must be a number between {} and {}", label, min, max),
        )
        .with_suggestion(format!(
            "Enter a valid number (e.g., {}).",
            ((min + max) / 2.0).round()
        )),
    )
}

/// ERROR when the value is present and not a valid email address
#[must_use]
pub fn email_format(value: Option<&str>, path: FieldPath) -> Option<Finding> {
    let text = value?;
    if text.is_empty() || EMAIL_PATTERN.is_match(text) {
        return None;
    }
    Some(
        Finding::error(path, "Invalid email format")
            .with_suggestion("Enter a valid email address."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    fn path() -> FieldPath {
        FieldPath::field("program").child("name")
    }

    #[test]
    fn required_flags_absent_empty_and_whitespace() {
        assert!(required(None, "Program name", path()).is_some());
        assert!(required(Some(""), "Program name", path()).is_some());
        assert!(required(Some("   "), "Program name", path()).is_some());

        let finding = required(None, "Program name", path()).unwrap();
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.message, "Program name is required");
    }

    #[test]
    fn required_accepts_present_value() {
        assert!(required(Some("Rural Health"), "Program name", path()).is_none());
    }

    #[test]
    fn min_length_warns_on_short_values_only() {
        let finding = min_length(Some("Too short"), 20, "Problem statement", path());
        let finding = finding.unwrap();
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.message.contains("9 characters"));

        assert!(min_length(None, 20, "Problem statement", path()).is_none());
        assert!(min_length(
            Some("A sufficiently long problem statement."),
            20,
            "Problem statement",
            path()
        )
        .is_none());
    }

    #[test]
    fn min_length_trims_before_counting() {
        assert!(min_length(Some("  abc  "), 3, "Field", path()).is_none());
        assert!(min_length(Some("  ab  "), 3, "Field", path()).is_some());
    }

    #[test]
    fn numeric_range_checks_bounds() {
        assert!(numeric_range(Some(50.0), "Target", path(), 0.0, 100.0).is_none());
        assert!(numeric_range(Some(0.0), "Target", path(), 0.0, 100.0).is_none());
        assert!(numeric_range(Some(100.0), "Target", path(), 0.0, 100.0).is_none());

        let finding = numeric_range(Some(120.0), "Target", path(), 0.0, 100.0).unwrap();
        assert_eq!(finding.severity, Severity::Error);
        assert!(finding.message.contains("between 0 and 100"));
    }

    #[test]
    fn numeric_range_rejects_non_finite() {
        assert!(numeric_range(Some(f64::NAN), "Target", path(), 0.0, 100.0).is_some());
        assert!(numeric_range(Some(f64::INFINITY), "Target", path(), 0.0, 100.0).is_some());
    }

    #[test]
    fn numeric_range_ignores_absent() {
        assert!(numeric_range(None, "Target", path(), 0.0, 100.0).is_none());
    }

    #[test]
    fn email_format_accepts_valid_and_absent() {
        assert!(email_format(Some("dho@district.gov"), path()).is_none());
        assert!(email_format(None, path()).is_none());
    }

    #[test]
    fn email_format_rejects_malformed() {
        for bad in ["not-an-email", "missing@domain", "@nouser.org", "two words@x.y"] {
            assert!(email_format(Some(bad), path()).is_some(), "accepted {bad:?}");
        }
    }
}
