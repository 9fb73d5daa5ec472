//! Pure re-indexing of finding lists for presentation
//!
//! Reducers building immutable maps from a finding slice. No rule ever
//! mutates a shared accumulator; hosts call these (or read the
//! pre-grouped maps on the evaluation result) to render findings by
//! field or by severity.

use indexmap::IndexMap;
use lfa_model::FieldPath;
use lfa_rules::{Finding, Severity};

/// Group findings by field path, insertion order preserved per key
#[must_use]
pub fn group_by_field(findings: &[Finding]) -> IndexMap<FieldPath, Vec<Finding>> {
    let mut grouped: IndexMap<FieldPath, Vec<Finding>> = IndexMap::new();
    for finding in findings {
        grouped
            .entry(finding.path.clone())
            .or_default()
            .push(finding.clone());
    }
    grouped
}

/// Group findings by severity
///
/// All four severities are always present (possibly empty) so downstream
/// rendering never branches on key existence.
#[must_use]
pub fn group_by_severity(findings: &[Finding]) -> IndexMap<Severity, Vec<Finding>> {
    let mut grouped: IndexMap<Severity, Vec<Finding>> = Severity::ALL
        .iter()
        .map(|severity| (*severity, Vec::new()))
        .collect();
    for finding in findings {
        grouped
            .entry(finding.severity)
            .or_default()
            .push(finding.clone());
    }
    grouped
}
