//! Cross-section rules
//!
//! Checks that sections already validated independently are mutually
//! consistent: pathway→activity references, outcome→problem linkage, and
//! output→outcome logic-chain coverage.

use std::collections::HashSet;

use lfa_model::{
    Activity, ActivityId, ChangeTheory, FieldPath, Outcome, OutcomeId, Output, ProblemContext,
};

use crate::finding::Finding;

/// WARNING for every change pathway naming an activity that does not exist
#[must_use]
pub fn stakeholder_activity_alignment(
    change_theory: Option<&ChangeTheory>,
    activities: &[Activity],
) -> Vec<Finding> {
    let Some(change_theory) = change_theory else {
        return Vec::new();
    };

    let activity_ids: HashSet<&ActivityId> = activities.iter().map(|a| &a.id).collect();

    let mut findings = Vec::new();

    for (idx, stakeholder) in change_theory.stakeholders.iter().enumerate() {
        for (p_idx, pathway) in stakeholder.change_pathways.iter().enumerate() {
            let Some(target) = pathway.link_to_activity.as_ref() else {
                continue;
            };
            if activity_ids.contains(target) {
                continue;
            }

            let who = stakeholder
                .name
                .as_deref()
                .unwrap_or_else(|| stakeholder.id.as_str());
            findings.push(
                Finding::warning(
                    FieldPath::field("changeTheory")
                        .child("stakeholders")
                        .at(idx)
                        .child("changePathways")
                        .at(p_idx),
                    format!(
                        "Stakeholder \"{}\": change pathway links to non-existent activity",
                        who
                    ),
                )
                .with_suggestion("Create the activity or remove the link."),
            );
        }
    }

    findings
}

/// INFO for every outcome lacking an explicit problem back-reference
///
/// Only fires when a problem statement exists; a soft nudge that never
/// blocks.
#[must_use]
pub fn outcome_problem_alignment(
    problem_context: Option<&ProblemContext>,
    outcomes: &[Outcome],
) -> Vec<Finding> {
    let statement_present = problem_context
        .and_then(|c| c.problem.as_ref())
        .and_then(|p| p.statement.as_deref())
        .is_some_and(|s| !s.trim().is_empty());
    if !statement_present || outcomes.is_empty() {
        return Vec::new();
    }

    let mut findings = Vec::new();

    for (idx, outcome) in outcomes.iter().enumerate() {
        if outcome
            .addresses_problem
            .as_deref()
            .map_or(true, |a| a.trim().is_empty())
        {
            findings.push(
                Finding::info(
                    FieldPath::field("outcomes").at(idx).child("addressesProblem"),
                    format!("Outcome {}: not explicitly linked to problem", idx + 1),
                )
                .with_suggestion("Reference which problem this outcome addresses."),
            );
        }
    }

    findings
}

/// WARNING for every outcome with zero supporting outputs
///
/// Coverage means the causal chain from work to outcome is complete:
/// each outcome needs at least one output feeding it.
#[must_use]
pub fn logic_chain(outcomes: &[Outcome], outputs: &[Output]) -> Vec<Finding> {
    let supported: HashSet<&OutcomeId> = outputs
        .iter()
        .filter_map(|o| o.links_to_outcome.as_ref())
        .filter_map(|l| l.outcome_id.as_ref())
        .collect();

    let mut findings = Vec::new();

    for (idx, outcome) in outcomes.iter().enumerate() {
        if !supported.contains(&outcome.id) {
            findings.push(
                Finding::warning(
                    FieldPath::field("outcomes").at(idx).child("linkedOutputs"),
                    format!("Outcome {}: no outputs are supporting it", idx + 1),
                )
                .with_suggestion("Create or link outputs that will enable this outcome."),
            );
        }
    }

    findings
}
