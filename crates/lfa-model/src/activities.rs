//! Activities section
//!
//! Activities are the work the program does. Each activity produces one
//! or more outputs and carries its own timeline and resourcing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{ActivityId, OutputId};

/// A unit of work the program performs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique id within the document
    pub id: ActivityId,

    /// What will be done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Kind of activity (training, support, provision, research, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Who implements it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementer: Option<String>,

    /// Who takes part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<String>,

    /// When the work happens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,

    /// Where the work happens
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,

    /// Outputs this activity produces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces_outputs: Vec<OutputLink>,

    /// Resources the activity needs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
}

impl Activity {
    /// Create an activity with nothing filled in yet
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ActivityId>) -> Self {
        Self {
            id: id.into(),
            description: None,
            kind: None,
            implementer: None,
            participants: None,
            timeline: None,
            locations: Vec::new(),
            produces_outputs: Vec::new(),
            resources: None,
        }
    }

    /// With activity description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Producing the given output
    #[inline]
    #[must_use]
    pub fn producing(mut self, output: impl Into<OutputId>) -> Self {
        self.produces_outputs.push(OutputLink {
            output_id: Some(output.into()),
            mechanism: None,
        });
        self
    }

    /// With implementer
    #[inline]
    #[must_use]
    pub fn with_implementer(mut self, implementer: impl Into<String>) -> Self {
        self.implementer = Some(implementer.into());
        self
    }
}

/// When an activity takes place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// End date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Duration of one occurrence (e.g. "3 days")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// How often it repeats (e.g. "monthly")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// Link from an activity to an output it produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputLink {
    /// The produced output; `None` while the user has not selected one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_id: Option<OutputId>,

    /// How the activity produces that output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
}

/// Resources an activity needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    /// Estimated cost in local currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Staffing requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<String>,

    /// Materials needed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,

    /// Who helps deliver
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partners: Vec<String>,
}
