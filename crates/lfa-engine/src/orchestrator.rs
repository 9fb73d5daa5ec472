//! Global validation orchestrator
//!
//! Runs every rule group in a fixed order over one immutable document
//! snapshot and aggregates the findings into an [`EvaluationResult`].
//! A total pure function: no document shape can make it fail, and
//! identical input yields identical output (timestamps aside).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use lfa_model::{Document, FieldPath};
use lfa_rules::{cross, sections, Finding, Severity};

use crate::grouping::{group_by_field, group_by_severity};

/// Everything a host needs to render findings and gate progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// All findings in rule-group execution order
    pub findings: Vec<Finding>,

    /// Counts per severity
    pub summary: Summary,

    /// True iff no ERROR-severity finding exists
    pub can_proceed: bool,

    /// Findings grouped by field path (insertion order preserved)
    pub by_field: IndexMap<FieldPath, Vec<Finding>>,

    /// Findings grouped by severity (all four severities always present)
    pub by_severity: IndexMap<Severity, Vec<Finding>>,
}

impl EvaluationResult {
    /// Findings at or under the given path prefix
    ///
    /// Lets a host render only the findings belonging to one wizard step
    /// (e.g. everything under `outcomes[2]`).
    #[must_use]
    pub fn findings_under(&self, prefix: &FieldPath) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| prefix.is_prefix_of(&f.path))
            .collect()
    }
}

/// Counts per severity over one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total findings
    pub total: usize,
    /// ERROR findings
    pub errors: usize,
    /// WARNING findings
    pub warnings: usize,
    /// INFO findings
    pub info: usize,
    /// SUCCESS findings
    pub success: usize,
    /// True iff `errors == 0`
    pub is_valid: bool,
}

impl Summary {
    fn from_findings(findings: &[Finding]) -> Self {
        let count = |severity: Severity| {
            findings
                .iter()
                .filter(|f| f.severity == severity)
                .count()
        };
        let errors = count(Severity::Error);
        Self {
            total: findings.len(),
            errors,
            warnings: count(Severity::Warning),
            info: count(Severity::Info),
            success: count(Severity::Success),
            is_valid: errors == 0,
        }
    }
}

/// Run all rule groups over a document snapshot
///
/// Fixed order: problem context → change theory → outcomes → outputs →
/// activities → partners → the three cross-section rules. WARNING, INFO,
/// and SUCCESS findings never block; `can_proceed` is false iff any
/// ERROR finding exists.
#[must_use]
pub fn evaluate(document: &Document) -> EvaluationResult {
    let mut findings = Vec::new();

    run_group(&mut findings, "problem_context", || {
        sections::problem_context(document.problem_context.as_ref())
    });
    run_group(&mut findings, "change_theory", || {
        sections::change_theory(document.change_theory.as_ref())
    });
    run_group(&mut findings, "outcomes", || {
        sections::outcomes(&document.outcomes)
    });
    run_group(&mut findings, "outputs", || {
        sections::outputs(&document.outputs, &document.outcomes)
    });
    run_group(&mut findings, "activities", || {
        sections::activities(&document.activities, &document.outputs)
    });
    run_group(&mut findings, "partners", || {
        sections::partners(&document.partners)
    });

    run_group(&mut findings, "stakeholder_activity_alignment", || {
        cross::stakeholder_activity_alignment(
            document.change_theory.as_ref(),
            &document.activities,
        )
    });
    run_group(&mut findings, "outcome_problem_alignment", || {
        cross::outcome_problem_alignment(document.problem_context.as_ref(), &document.outcomes)
    });
    run_group(&mut findings, "logic_chain", || {
        cross::logic_chain(&document.outcomes, &document.outputs)
    });

    let summary = Summary::from_findings(&findings);
    let can_proceed = summary.errors == 0;
    let by_field = group_by_field(&findings);
    let by_severity = group_by_severity(&findings);

    tracing::debug!(
        "evaluation complete: {} findings ({} errors), can_proceed={}",
        summary.total,
        summary.errors,
        can_proceed
    );

    EvaluationResult {
        findings,
        summary,
        can_proceed,
        by_field,
        by_severity,
    }
}

fn run_group(findings: &mut Vec<Finding>, group: &str, rule: impl FnOnce() -> Vec<Finding>) {
    let produced = rule();
    tracing::debug!("rule group {}: {} findings", group, produced.len());
    findings.extend(produced);
}
