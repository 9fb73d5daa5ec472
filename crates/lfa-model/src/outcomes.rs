//! Outcomes section and the shared indicator types
//!
//! Outcomes are stakeholder practice change at scale. Each outcome must
//! be measurable, so indicators (shared with outputs) live here.

use serde::{Deserialize, Serialize};

use crate::ids::{IndicatorId, OutcomeId, StakeholderId};

/// A change the program wants to see
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// Unique id within the document
    pub id: OutcomeId,

    /// Clear outcome statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,

    /// Which problem this outcome addresses (free-text reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses_problem: Option<String>,

    /// Stakeholder groups this outcome affects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affects_stakeholders: Vec<StakeholderId>,

    /// How many people, where, by when
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<OutcomeScope>,

    /// How we know the outcome happened
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<Indicator>,
}

impl Outcome {
    /// Create an outcome with nothing filled in yet
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<OutcomeId>) -> Self {
        Self {
            id: id.into(),
            statement: None,
            addresses_problem: None,
            affects_stakeholders: Vec::new(),
            scope: None,
            indicators: Vec::new(),
        }
    }

    /// With outcome statement
    #[inline]
    #[must_use]
    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = Some(statement.into());
        self
    }

    /// With an indicator
    #[inline]
    #[must_use]
    pub fn with_indicator(mut self, indicator: Indicator) -> Self {
        self.indicators.push(indicator);
        self
    }

    /// With an affected stakeholder
    #[inline]
    #[must_use]
    pub fn affecting(mut self, stakeholder: impl Into<StakeholderId>) -> Self {
        self.affects_stakeholders.push(stakeholder.into());
        self
    }
}

/// Scope of an outcome
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeScope {
    /// How many people
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,

    /// Where
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography: Option<String>,

    /// By when
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// A measurable indicator on an outcome or output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    /// Unique id within the document
    pub id: IndicatorId,

    /// Measurable statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,

    /// Metric definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,

    /// Where the data comes from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    /// How the data is collected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_collection_method: Option<String>,

    /// Collection cadence (baseline, midline, annual, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    /// Who collects the data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,
}

impl Indicator {
    /// Create an indicator with nothing filled in yet
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<IndicatorId>) -> Self {
        Self {
            id: id.into(),
            statement: None,
            metric: None,
            data_source: None,
            data_collection_method: None,
            frequency: None,
            responsibility: None,
        }
    }

    /// With a target value on the metric
    #[inline]
    #[must_use]
    pub fn with_target(mut self, target: f64) -> Self {
        self.metric.get_or_insert_with(Metric::default).target = Some(target);
        self
    }

    /// With a data source
    #[inline]
    #[must_use]
    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = Some(source.into());
        self
    }
}

/// Metric definition for an indicator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Metric name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What is being counted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator: Option<String>,

    /// Out of what
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<String>,

    /// Unit of measure (percentage, number, ratio, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Target value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,

    /// Starting value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_builder() {
        let outcome = Outcome::new("out-001")
            .with_statement("Farmers adopt improved irrigation")
            .affecting("farmers")
            .with_indicator(
                Indicator::new("ind-001")
                    .with_target(80.0)
                    .with_data_source("Service registers"),
            );

        assert_eq!(outcome.indicators.len(), 1);
        assert_eq!(outcome.indicators[0].metric.as_ref().unwrap().target, Some(80.0));
        assert_eq!(outcome.affects_stakeholders[0].as_str(), "farmers");
    }

    #[test]
    fn indicator_metric_keys_are_camel_case() {
        let indicator = Indicator::new("ind-001").with_target(140.0);
        let json = serde_json::to_value(&indicator).unwrap();
        assert_eq!(json["metric"]["target"], 140.0);

        let stored = r#"{
            "id": "ind-002",
            "metric": {"unit": "percentage", "target": 80, "baseline": 5},
            "dataSource": "CHW service registers"
        }"#;
        let back: Indicator = serde_json::from_str(stored).unwrap();
        assert_eq!(back.metric.unwrap().baseline, Some(5.0));
        assert_eq!(back.data_source.as_deref(), Some("CHW service registers"));
    }
}
