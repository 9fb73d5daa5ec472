//! Change theory checks
//!
//! A program must name at least one group expected to change. Per
//! stakeholder, the desired target practices are the load-bearing field:
//! without them the stakeholder carries no design value.

use lfa_model::{ChangeTheory, FieldPath};

use crate::field;
use crate::finding::Finding;

/// Validate the change theory section
#[must_use]
pub fn change_theory(section: Option<&ChangeTheory>) -> Vec<Finding> {
    let base = FieldPath::field("changeTheory");

    let Some(section) = section else {
        return vec![Finding::error(base, "Change theory is not defined")
            .with_suggestion("Identify stakeholders who must change.")];
    };

    if section.stakeholders.is_empty() {
        return vec![Finding::error(
            base.child("stakeholders"),
            "No stakeholders identified",
        )
        .with_suggestion("Add at least one stakeholder group that must change.")];
    }

    let mut findings = Vec::new();

    for (idx, stakeholder) in section.stakeholders.iter().enumerate() {
        let prefix = base.child("stakeholders").at(idx);
        let number = idx + 1;

        if let Some(finding) = field::required(
            stakeholder.name.as_deref(),
            &format!("Stakeholder {}: name", number),
            prefix.child("name"),
        ) {
            findings.push(finding.with_suggestion("Identify who this stakeholder is."));
        }

        let practices = stakeholder
            .current_state
            .as_ref()
            .and_then(|s| s.practices.as_deref());
        if practices.map_or(true, |p| p.trim().is_empty()) {
            findings.push(
                Finding::error(
                    prefix.child("currentState").child("practices"),
                    format!("Stakeholder {}: current practices not described", number),
                )
                .with_suggestion("Describe what they currently do."),
            );
        }

        let target = stakeholder
            .desired_change
            .as_ref()
            .and_then(|c| c.target_practices.as_deref());
        if target.map_or(true, |t| t.trim().is_empty()) {
            findings.push(
                Finding::error(
                    prefix.child("desiredChange").child("targetPractices"),
                    format!("Stakeholder {}: desired practice change not defined", number),
                )
                .with_suggestion("Clearly state what they should do differently."),
            );
        }

        let timeframe = stakeholder
            .desired_change
            .as_ref()
            .and_then(|c| c.timeframe.as_deref());
        if timeframe.map_or(true, |t| t.trim().is_empty()) {
            findings.push(
                Finding::warning(
                    prefix.child("desiredChange").child("timeframe"),
                    format!("Stakeholder {}: no timeframe for change", number),
                )
                .with_suggestion(
                    "When should this change happen? (e.g., \"6 months\", \"by project end\")",
                ),
            );
        }

        if stakeholder.change_pathways.is_empty() {
            findings.push(
                Finding::warning(
                    prefix.child("changePathways"),
                    format!("Stakeholder {}: no change mechanisms identified", number),
                )
                .with_suggestion(
                    "How will this stakeholder change? (through training? incentives? access?)",
                ),
            );
        }
    }

    findings
}
