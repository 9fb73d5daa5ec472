//! Outputs checks
//!
//! Outputs are recommended but optional as a collection. Each individual
//! output must link to an existing outcome; an absent link and a
//! dangling one are distinct conditions. Referential checks are
//! two-pass: collect the outcome ids once, then test membership.

use std::collections::HashSet;

use lfa_model::{FieldPath, Outcome, OutcomeId, Output};

use crate::field;
use crate::finding::Finding;

/// Validate the outputs collection against the outcomes it references
#[must_use]
pub fn outputs(outputs: &[Output], outcomes: &[Outcome]) -> Vec<Finding> {
    let base = FieldPath::field("outputs");

    if outputs.is_empty() {
        return vec![Finding::warning(base, "No outputs defined")
            .with_suggestion("Outputs are the direct results of your activities.")];
    }

    let outcome_ids: HashSet<&OutcomeId> = outcomes.iter().map(|o| &o.id).collect();

    let mut findings = Vec::new();

    for (idx, output) in outputs.iter().enumerate() {
        let prefix = base.at(idx);
        let number = idx + 1;

        if let Some(finding) = field::required(
            output.statement.as_deref(),
            &format!("Output {}: statement", number),
            prefix.child("statement"),
        ) {
            findings.push(finding.with_suggestion("Describe what you will deliver."));
        }

        let link = output.links_to_outcome.as_ref();
        match link.and_then(|l| l.outcome_id.as_ref()) {
            None => {
                findings.push(
                    Finding::error(
                        prefix.child("linksToOutcome"),
                        format!("Output {}: not linked to any outcome", number),
                    )
                    .with_suggestion("Select which outcome this output supports."),
                );
            }
            Some(outcome_id) if !outcome_ids.contains(outcome_id) => {
                findings.push(
                    Finding::error(
                        prefix.child("linksToOutcome"),
                        format!("Output {}: linked outcome does not exist", number),
                    )
                    .with_suggestion("Create the linked outcome first."),
                );
            }
            Some(_) => {}
        }

        if link
            .and_then(|l| l.mechanism.as_deref())
            .map_or(true, |m| m.trim().is_empty())
        {
            findings.push(
                Finding::warning(
                    prefix.child("linksToOutcome").child("mechanism"),
                    format!("Output {}: unclear how it enables outcome", number),
                )
                .with_suggestion(
                    "Explain the logic: \"This output enables that outcome because...\"",
                ),
            );
        }

        if output.scope.as_ref().and_then(|s| s.scale).is_none() {
            findings.push(
                Finding::warning(
                    prefix.child("scope").child("scale"),
                    format!("Output {}: scale not specified", number),
                )
                .with_suggestion("How many people/units will you reach?"),
            );
        }

        if output.indicators.is_empty() {
            findings.push(
                Finding::warning(
                    prefix.child("indicators"),
                    format!("Output {}: no delivery indicators", number),
                )
                .with_suggestion("How will you track that you delivered this output?"),
            );
        }
    }

    findings
}
