//! End-to-end scenarios over complete documents

use pretty_assertions::assert_eq;

use lfa_engine::evaluate;
use lfa_model::{
    Activity, ChangePathway, ChangeTheory, Document, FieldPath, Indicator, Opportunity, Outcome,
    Output, Problem, ProblemContext, Stakeholder,
};
use lfa_rules::Severity;

fn problem_context() -> ProblemContext {
    ProblemContext {
        problem: Some(Problem {
            statement: Some(
                "Farmers rely on flood irrigation, wasting water in a drought-prone region."
                    .to_string(),
            ),
            root_causes: vec![
                "No exposure to drip systems".to_string(),
                "High upfront equipment cost".to_string(),
            ],
            ..Problem::default()
        }),
        opportunity: Some(Opportunity {
            statement: Some("Subsidized drip kits can halve water use.".to_string()),
            assumptions: Vec::new(),
        }),
    }
}

/// One stakeholder, one measured outcome, one linked output, one
/// producing activity: the smallest document with a complete logic chain.
fn minimal_complete_document() -> Document {
    Document {
        problem_context: Some(problem_context()),
        change_theory: Some(ChangeTheory {
            stakeholders: vec![Stakeholder::new("farmers")
                .with_name("Farmers")
                .with_current_practices("flood irrigation")
                .with_target_practices("drip irrigation")
                .with_pathway(ChangePathway::mechanism("training").enabled_by("act-001"))],
        }),
        outcomes: vec![Outcome::new("out-001")
            .with_statement("Farmers adopt drip irrigation across the district")
            .affecting("farmers")
            .with_indicator(
                Indicator::new("ind-001")
                    .with_target(80.0)
                    .with_data_source("Field surveys"),
            )],
        outputs: vec![Output::new("output-001")
            .with_statement("200 farmers trained on drip irrigation")
            .linked_to("out-001")],
        activities: vec![Activity::new("act-001")
            .with_description("Run hands-on drip irrigation demonstrations")
            .producing("output-001")],
        ..Document::new()
    }
}

#[test]
fn empty_document_blocks_with_the_three_core_errors() {
    let result = evaluate(&Document::new());

    assert!(!result.can_proceed);
    assert!(!result.summary.is_valid);

    let error_paths: Vec<String> = result
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .map(|f| f.path.to_string())
        .collect();
    assert_eq!(
        error_paths,
        vec!["problemContext", "changeTheory", "outcomes"]
    );
}

#[test]
fn minimal_complete_document_proceeds() {
    let result = evaluate(&minimal_complete_document());

    let errors: Vec<&str> = result
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .map(|f| f.message.as_str())
        .collect();
    assert_eq!(errors, Vec::<&str>::new());
    assert!(result.can_proceed);
    assert!(result.summary.is_valid);
}

#[test]
fn warnings_never_block() {
    let result = evaluate(&minimal_complete_document());

    // The minimal document is still logically weak in places...
    assert!(result.summary.warnings > 0);
    // ...but only errors gate progression.
    assert!(result.can_proceed);
}

#[test]
fn outcome_with_no_indicators_is_exactly_one_error_at_indicators() {
    let mut doc = minimal_complete_document();
    doc.outcomes[0].indicators.clear();

    let result = evaluate(&doc);
    let indicator_errors: Vec<_> = result
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    assert_eq!(indicator_errors.len(), 1);
    assert_eq!(
        indicator_errors[0].path.to_string(),
        "outcomes[0].indicators"
    );
    assert!(!result.can_proceed);
}

#[test]
fn dangling_outcome_link_is_distinct_from_missing_link() {
    let mut dangling = minimal_complete_document();
    dangling.outputs[0].links_to_outcome.as_mut().unwrap().outcome_id =
        Some("nonexistent-id".into());

    let mut missing = minimal_complete_document();
    missing.outputs[0].links_to_outcome = None;

    let dangling_finding = evaluate(&dangling)
        .findings
        .iter()
        .find(|f| {
            f.severity == Severity::Error && f.path.to_string() == "outputs[0].linksToOutcome"
        })
        .cloned()
        .unwrap();
    let missing_finding = evaluate(&missing)
        .findings
        .iter()
        .find(|f| {
            f.severity == Severity::Error && f.path.to_string() == "outputs[0].linksToOutcome"
        })
        .cloned()
        .unwrap();

    assert_ne!(dangling_finding.message, missing_finding.message);
}

#[test]
fn repairing_a_dangling_reference_removes_that_finding() {
    let mut doc = minimal_complete_document();
    doc.outputs[0].links_to_outcome.as_mut().unwrap().outcome_id =
        Some("nonexistent-id".into());

    let broken = evaluate(&doc);
    assert!(!broken.can_proceed);

    doc.outputs[0].links_to_outcome.as_mut().unwrap().outcome_id = Some("out-001".into());
    let repaired = evaluate(&doc);
    assert!(repaired.can_proceed);
    assert!(repaired
        .findings
        .iter()
        .all(|f| f.path.to_string() != "outputs[0].linksToOutcome"
            || f.severity != Severity::Error));
}

#[test]
fn filling_a_required_field_only_removes_findings_at_that_path() {
    let mut doc = minimal_complete_document();
    doc.problem_context.as_mut().unwrap().problem.as_mut().unwrap().statement = None;

    let statement_path: FieldPath = "problemContext.problem.statement".parse().unwrap();
    let before = evaluate(&doc);
    let errors_before = before
        .findings_under(&statement_path)
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    assert_eq!(errors_before, 1);

    doc.problem_context.as_mut().unwrap().problem.as_mut().unwrap().statement =
        Some("Farmers rely on flood irrigation in a drought-prone region.".to_string());
    let after = evaluate(&doc);
    let errors_after = after
        .findings_under(&statement_path)
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    assert_eq!(errors_after, 0);
}

#[test]
fn by_field_groups_everything_the_findings_contain() {
    let result = evaluate(&Document::new());

    let grouped_total: usize = result.by_field.values().map(Vec::len).sum();
    assert_eq!(grouped_total, result.findings.len());

    for (path, findings) in &result.by_field {
        assert!(findings.iter().all(|f| &f.path == path));
    }
}

#[test]
fn evaluation_is_idempotent_modulo_timestamps() {
    let doc = minimal_complete_document();
    let first = evaluate(&doc);
    let second = evaluate(&doc);

    // Finding equality deliberately excludes created_at
    assert_eq!(first.findings, second.findings);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn unreferenced_pathway_activity_only_warns() {
    let mut doc = minimal_complete_document();
    doc.change_theory.as_mut().unwrap().stakeholders[0].change_pathways =
        vec![ChangePathway::mechanism("incentive").enabled_by("act-unknown")];

    let result = evaluate(&doc);
    assert!(result.can_proceed);
    assert!(result.findings.iter().any(|f| {
        f.severity == Severity::Warning
            && f.path.to_string() == "changeTheory.stakeholders[0].changePathways[0]"
    }));
}

#[test]
fn uncovered_outcome_warns_through_the_logic_chain() {
    let mut doc = minimal_complete_document();
    doc.outcomes.push(
        Outcome::new("out-002")
            .with_statement("Water table stabilizes in the district")
            .affecting("farmers")
            .with_indicator(
                Indicator::new("ind-002")
                    .with_target(10.0)
                    .with_data_source("Groundwater monitoring"),
            ),
    );

    let result = evaluate(&doc);
    assert!(result.can_proceed);
    assert!(result
        .findings
        .iter()
        .any(|f| f.path.to_string() == "outcomes[1].linkedOutputs"
            && f.severity == Severity::Warning));
}
