//! Outcomes checks
//!
//! An outcome with no indicator is unmeasurable and therefore rejected
//! outright, not merely flagged. Percentage metrics are additionally
//! range-checked to [0, 100].

use lfa_model::{FieldPath, Indicator, Outcome};

use crate::field;
use crate::finding::Finding;

/// Validate the outcomes collection
#[must_use]
pub fn outcomes(outcomes: &[Outcome]) -> Vec<Finding> {
    let base = FieldPath::field("outcomes");

    if outcomes.is_empty() {
        return vec![Finding::error(base, "No outcomes defined")
            .with_suggestion("Define what change you want to see (outcome).")];
    }

    let mut findings = Vec::new();

    for (idx, outcome) in outcomes.iter().enumerate() {
        let prefix = base.at(idx);
        let number = idx + 1;

        if let Some(finding) = field::required(
            outcome.statement.as_deref(),
            &format!("Outcome {}: statement", number),
            prefix.child("statement"),
        ) {
            findings.push(finding.with_suggestion("Write a clear outcome statement."));
        }

        if outcome.indicators.is_empty() {
            findings.push(
                Finding::error(
                    prefix.child("indicators"),
                    format!("Outcome {}: not measurable (no indicators)", number),
                )
                .with_suggestion(
                    "Add at least one measurable indicator showing this outcome happened.",
                ),
            );
        } else {
            for (ind_idx, indicator) in outcome.indicators.iter().enumerate() {
                check_indicator(
                    indicator,
                    number,
                    ind_idx,
                    prefix.child("indicators").at(ind_idx),
                    &mut findings,
                );
            }
        }

        let scope_complete = outcome.scope.as_ref().is_some_and(|s| {
            s.population.as_deref().is_some_and(|p| !p.trim().is_empty())
                && s.timeframe.as_deref().is_some_and(|t| !t.trim().is_empty())
        });
        if !scope_complete {
            findings.push(
                Finding::warning(
                    prefix.child("scope"),
                    format!("Outcome {}: scope not fully defined", number),
                )
                .with_suggestion("How many people? By when?"),
            );
        }

        if outcome.affects_stakeholders.is_empty() {
            findings.push(
                Finding::warning(
                    prefix.child("affectsStakeholders"),
                    format!("Outcome {}: not linked to any stakeholders", number),
                )
                .with_suggestion("Which stakeholder groups does this outcome affect?"),
            );
        }
    }

    findings
}

fn check_indicator(
    indicator: &Indicator,
    outcome_number: usize,
    ind_idx: usize,
    prefix: FieldPath,
    findings: &mut Vec<Finding>,
) {
    let ind_number = ind_idx + 1;
    let metric = indicator.metric.as_ref();
    let target = metric.and_then(|m| m.target);

    if target.is_none() {
        findings.push(
            Finding::error(
                prefix.child("metric").child("target"),
                format!(
                    "Outcome {}, Indicator {}: no target value",
                    outcome_number, ind_number
                ),
            )
            .with_suggestion("Specify a target (e.g., \"80%\", \"500 people\")."),
        );
    } else if metric.and_then(|m| m.unit.as_deref()) == Some("percentage") {
        let label = format!("Outcome {}, Indicator {}: target", outcome_number, ind_number);
        findings.extend(field::numeric_range(
            target,
            &label,
            prefix.child("metric").child("target"),
            0.0,
            100.0,
        ));
        let label = format!(
            "Outcome {}, Indicator {}: baseline",
            outcome_number, ind_number
        );
        findings.extend(field::numeric_range(
            metric.and_then(|m| m.baseline),
            &label,
            prefix.child("metric").child("baseline"),
            0.0,
            100.0,
        ));
    }

    if indicator
        .data_source
        .as_deref()
        .map_or(true, |s| s.trim().is_empty())
    {
        findings.push(
            Finding::warning(
                prefix.child("dataSource"),
                format!(
                    "Outcome {}, Indicator {}: no data source",
                    outcome_number, ind_number
                ),
            )
            .with_suggestion("How will you collect this data?"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use lfa_model::{Metric, OutcomeScope};

    fn measured_outcome() -> Outcome {
        Outcome::new("out-001")
            .with_statement("Community members access quality primary healthcare")
            .affecting("chw-001")
            .with_indicator(
                Indicator::new("ind-001")
                    .with_target(80.0)
                    .with_data_source("CHW service registers"),
            )
    }

    #[test]
    fn empty_collection_is_a_single_error() {
        let findings = outcomes(&[]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].path.to_string(), "outcomes");
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn outcome_without_indicators_is_rejected() {
        let outcome = Outcome::new("out-001").with_statement("Something changes");
        let findings = outcomes(&[outcome]);

        let errors: Vec<_> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.to_string(), "outcomes[0].indicators");
    }

    #[test]
    fn indicator_without_target_is_an_error() {
        let outcome = Outcome::new("out-001")
            .with_statement("Something changes")
            .with_indicator(Indicator::new("ind-001").with_data_source("Registers"));
        let findings = outcomes(&[outcome]);

        assert!(findings.iter().any(|f| f.severity == Severity::Error
            && f.path.to_string() == "outcomes[0].indicators[0].metric.target"));
    }

    #[test]
    fn indicator_without_data_source_is_a_warning() {
        let outcome = Outcome::new("out-001")
            .with_statement("Something changes")
            .with_indicator(Indicator::new("ind-001").with_target(500.0));
        let findings = outcomes(&[outcome]);

        assert!(findings.iter().any(|f| f.severity == Severity::Warning
            && f.path.to_string() == "outcomes[0].indicators[0].dataSource"));
    }

    #[test]
    fn percentage_metric_out_of_range_is_an_error() {
        let mut indicator = Indicator::new("ind-001").with_target(120.0);
        indicator.metric.as_mut().unwrap().unit = Some("percentage".to_string());

        let outcome = Outcome::new("out-001")
            .with_statement("Something changes")
            .with_indicator(indicator);
        let findings = outcomes(&[outcome]);

        assert!(findings.iter().any(|f| f.severity == Severity::Error
            && f.path.to_string() == "outcomes[0].indicators[0].metric.target"
            && f.message.contains("between 0 and 100")));
    }

    #[test]
    fn percentage_metric_in_range_passes() {
        let mut indicator = Indicator::new("ind-001")
            .with_target(80.0)
            .with_data_source("Registers");
        indicator.metric.as_mut().unwrap().unit = Some("percentage".to_string());
        indicator.metric.as_mut().unwrap().baseline = Some(5.0);

        let outcome = Outcome {
            scope: Some(OutcomeScope {
                population: Some("250,000 people".to_string()),
                timeframe: Some("18 months".to_string()),
                ..OutcomeScope::default()
            }),
            ..measured_outcome()
        }
        .with_indicator(indicator);

        let findings = outcomes(&[outcome]);
        assert!(findings.iter().all(|f| f.severity != Severity::Error));
    }

    #[test]
    fn non_percentage_targets_are_not_range_checked() {
        let outcome = Outcome::new("out-001")
            .with_statement("Something changes")
            .with_indicator(
                Indicator {
                    metric: Some(Metric {
                        target: Some(500.0),
                        unit: Some("people".to_string()),
                        ..Metric::default()
                    }),
                    ..Indicator::new("ind-001")
                }
                .with_data_source("Attendance records"),
            );
        let findings = outcomes(&[outcome]);
        assert!(findings.iter().all(|f| f.severity != Severity::Error));
    }

    #[test]
    fn incomplete_scope_and_missing_stakeholders_are_warnings() {
        let mut outcome = measured_outcome();
        outcome.affects_stakeholders.clear();

        let findings = outcomes(&[outcome]);
        let warnings: Vec<_> = findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .map(|f| f.path.to_string())
            .collect();
        assert!(warnings.contains(&"outcomes[0].scope".to_string()));
        assert!(warnings.contains(&"outcomes[0].affectsStakeholders".to_string()));
    }
}
