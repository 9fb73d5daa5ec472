//! Problem context checks
//!
//! A design with no clear problem has nothing to chain the rest of the
//! logic to, so the statement itself is the only hard requirement here.

use lfa_model::{FieldPath, ProblemContext};

use crate::field;
use crate::finding::Finding;

/// Minimum length before a problem statement stops counting as "brief"
const MIN_STATEMENT_LEN: usize = 20;

/// Validate the problem context section
#[must_use]
pub fn problem_context(section: Option<&ProblemContext>) -> Vec<Finding> {
    let base = FieldPath::field("problemContext");

    let Some(section) = section else {
        return vec![Finding::error(base, "Problem context is missing")
            .with_suggestion("Define what problem your program addresses.")];
    };

    let mut findings = Vec::new();

    let statement = section
        .problem
        .as_ref()
        .and_then(|p| p.statement.as_deref());
    let statement_path = base.child("problem").child("statement");

    if let Some(finding) = field::required(statement, "Problem statement", statement_path.clone()) {
        findings
            .push(finding.with_suggestion("Clearly describe the problem you are addressing."));
    } else if let Some(finding) =
        field::min_length(statement, MIN_STATEMENT_LEN, "Problem statement", statement_path)
    {
        findings.push(finding.with_suggestion("Provide more detail about the specific problem."));
    }

    let root_causes = section
        .problem
        .as_ref()
        .map(|p| p.root_causes.as_slice())
        .unwrap_or_default();
    let causes_path = base.child("problem").child("rootCauses");
    if root_causes.is_empty() {
        findings.push(
            Finding::warning(causes_path, "No root causes identified")
                .with_suggestion("Understanding root causes helps design better solutions."),
        );
    } else if root_causes.len() == 1 {
        // Multiplicity nudges toward deeper causal analysis
        findings.push(
            Finding::info(causes_path, "Only one root cause identified")
                .with_suggestion("Consider if there are multiple contributing factors."),
        );
    }

    let opportunity = section
        .opportunity
        .as_ref()
        .and_then(|o| o.statement.as_deref());
    if opportunity.map_or(true, |s| s.trim().is_empty()) {
        findings.push(
            Finding::warning(
                base.child("opportunity").child("statement"),
                "No opportunity statement provided",
            )
            .with_suggestion("Describe what could be possible if the problem is addressed."),
        );
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use lfa_model::{Opportunity, Problem};

    fn section_with_statement(statement: &str) -> ProblemContext {
        ProblemContext {
            problem: Some(Problem {
                statement: Some(statement.to_string()),
                ..Problem::default()
            }),
            opportunity: None,
        }
    }

    #[test]
    fn absent_section_is_a_single_error() {
        let findings = problem_context(None);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].path.to_string(), "problemContext");
    }

    #[test]
    fn missing_statement_is_an_error() {
        let section = ProblemContext::default();
        let findings = problem_context(Some(&section));

        let statement = findings
            .iter()
            .find(|f| f.path.to_string() == "problemContext.problem.statement")
            .unwrap();
        assert_eq!(statement.severity, Severity::Error);
        assert_eq!(statement.message, "Problem statement is required");
    }

    #[test]
    fn brief_statement_is_a_warning_not_error() {
        let section = section_with_statement("Too brief");
        let findings = problem_context(Some(&section));

        let statement = findings
            .iter()
            .find(|f| f.path.to_string() == "problemContext.problem.statement")
            .unwrap();
        assert_eq!(statement.severity, Severity::Warning);
    }

    #[test]
    fn substantial_statement_passes() {
        let section =
            section_with_statement("Rural communities lack access to primary healthcare.");
        let findings = problem_context(Some(&section));
        assert!(findings
            .iter()
            .all(|f| f.path.to_string() != "problemContext.problem.statement"));
    }

    #[test]
    fn root_cause_multiplicity_nudges() {
        let mut section = section_with_statement("A long enough problem statement here.");

        let findings = problem_context(Some(&section));
        let causes = findings
            .iter()
            .find(|f| f.path.to_string() == "problemContext.problem.rootCauses")
            .unwrap();
        assert_eq!(causes.severity, Severity::Warning);

        section.problem.as_mut().unwrap().root_causes = vec!["Only one".to_string()];
        let findings = problem_context(Some(&section));
        let causes = findings
            .iter()
            .find(|f| f.path.to_string() == "problemContext.problem.rootCauses")
            .unwrap();
        assert_eq!(causes.severity, Severity::Info);

        section.problem.as_mut().unwrap().root_causes =
            vec!["First".to_string(), "Second".to_string()];
        let findings = problem_context(Some(&section));
        assert!(findings
            .iter()
            .all(|f| f.path.to_string() != "problemContext.problem.rootCauses"));
    }

    #[test]
    fn missing_opportunity_is_a_warning() {
        let mut section = section_with_statement("A long enough problem statement here.");
        let findings = problem_context(Some(&section));
        assert!(findings
            .iter()
            .any(|f| f.path.to_string() == "problemContext.opportunity.statement"
                && f.severity == Severity::Warning));

        section.opportunity = Some(Opportunity {
            statement: Some("Training can fill the gap.".to_string()),
            assumptions: Vec::new(),
        });
        let findings = problem_context(Some(&section));
        assert!(findings
            .iter()
            .all(|f| f.path.to_string() != "problemContext.opportunity.statement"));
    }
}
