//! Outputs section
//!
//! Outputs are the direct results of activities. They enable outcomes
//! but do not guarantee them; the link carries the causal mechanism and
//! its assumptions.

use serde::{Deserialize, Serialize};

use crate::ids::{OutcomeId, OutputId};
use crate::outcomes::Indicator;

/// Something the program delivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Unique id within the document
    pub id: OutputId,

    /// What will be delivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,

    /// Kind of output (training, service, asset, infrastructure, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// How much, how well, by when
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<OutputScope>,

    /// The outcome this output enables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links_to_outcome: Option<OutcomeLink>,

    /// How delivery is tracked
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<Indicator>,
}

impl Output {
    /// Create an output with nothing filled in yet
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<OutputId>) -> Self {
        Self {
            id: id.into(),
            statement: None,
            kind: None,
            scope: None,
            links_to_outcome: None,
            indicators: Vec::new(),
        }
    }

    /// With output statement
    #[inline]
    #[must_use]
    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = Some(statement.into());
        self
    }

    /// Linked to the outcome it enables
    #[inline]
    #[must_use]
    pub fn linked_to(mut self, outcome: impl Into<OutcomeId>) -> Self {
        self.links_to_outcome
            .get_or_insert_with(OutcomeLink::default)
            .outcome_id = Some(outcome.into());
        self
    }

    /// With delivery indicator
    #[inline]
    #[must_use]
    pub fn with_indicator(mut self, indicator: Indicator) -> Self {
        self.indicators.push(indicator);
        self
    }
}

/// Scope of an output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputScope {
    /// How many units (people, events, materials)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,

    /// Quality standard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,

    /// By when
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// Link from an output to the outcome it enables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeLink {
    /// The linked outcome; `None` while the user has not selected one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_id: Option<OutcomeId>,

    /// Why this output enables that outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,

    /// What must be true for the link to hold
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assumptions: Vec<String>,
}
