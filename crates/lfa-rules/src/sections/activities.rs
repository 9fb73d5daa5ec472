//! Activities checks
//!
//! An activity that produces nothing is not a valid unit of work. Output
//! links are checked referentially the same way outputs check outcomes.

use std::collections::HashSet;

use lfa_model::{Activity, FieldPath, Output, OutputId};

use crate::field;
use crate::finding::Finding;

/// Validate the activities collection against the outputs it references
#[must_use]
pub fn activities(activities: &[Activity], outputs: &[Output]) -> Vec<Finding> {
    let base = FieldPath::field("activities");

    if activities.is_empty() {
        return vec![Finding::warning(base, "No activities defined")
            .with_suggestion("Add activities - the work you will do.")];
    }

    let output_ids: HashSet<&OutputId> = outputs.iter().map(|o| &o.id).collect();

    let mut findings = Vec::new();

    for (idx, activity) in activities.iter().enumerate() {
        let prefix = base.at(idx);
        let number = idx + 1;

        if let Some(finding) = field::required(
            activity.description.as_deref(),
            &format!("Activity {}: description", number),
            prefix.child("description"),
        ) {
            findings.push(finding.with_suggestion("Clearly describe what you will do."));
        }

        if activity.produces_outputs.is_empty() {
            findings.push(
                Finding::error(
                    prefix.child("producesOutputs"),
                    format!("Activity {}: not linked to any output", number),
                )
                .with_suggestion("Select which output(s) this activity produces."),
            );
        } else {
            for (link_idx, link) in activity.produces_outputs.iter().enumerate() {
                let link_path = prefix.child("producesOutputs").at(link_idx);

                match link.output_id.as_ref() {
                    None => {
                        findings.push(
                            Finding::error(
                                link_path.clone(),
                                format!("Activity {}: output link is incomplete", number),
                            )
                            .with_suggestion("Select an output."),
                        );
                    }
                    Some(output_id) if !output_ids.contains(output_id) => {
                        findings.push(
                            Finding::error(
                                link_path.clone(),
                                format!("Activity {}: linked output does not exist", number),
                            )
                            .with_suggestion("Create the output first."),
                        );
                    }
                    Some(_) => {}
                }

                if link.mechanism.as_deref().map_or(true, |m| m.trim().is_empty()) {
                    findings.push(
                        Finding::warning(
                            link_path.child("mechanism"),
                            format!("Activity {}: unclear how it produces output", number),
                        )
                        .with_suggestion(
                            "Explain: \"This activity produces that output by...\"",
                        ),
                    );
                }
            }
        }

        let timeline_complete = activity
            .timeline
            .as_ref()
            .is_some_and(|t| t.start_date.is_some() && t.end_date.is_some());
        if !timeline_complete {
            findings.push(
                Finding::warning(
                    prefix.child("timeline"),
                    format!("Activity {}: timeline not defined", number),
                )
                .with_suggestion("When will this activity take place?"),
            );
        }

        if activity
            .implementer
            .as_deref()
            .map_or(true, |i| i.trim().is_empty())
        {
            findings.push(
                Finding::warning(
                    prefix.child("implementer"),
                    format!("Activity {}: implementer not specified", number),
                )
                .with_suggestion("Who will implement this activity?"),
            );
        }

        // Lowest severity on purpose: an unestimated budget never blocks
        if activity.resources.as_ref().and_then(|r| r.budget).is_none() {
            findings.push(
                Finding::info(
                    prefix.child("resources").child("budget"),
                    format!("Activity {}: budget not estimated", number),
                )
                .with_suggestion("What will this activity cost?"),
            );
        }
    }

    findings
}
