//! Document root aggregate
//!
//! The [`Document`] is owned exclusively by the hosting wizard; the
//! validation engine only reads immutable snapshots of it. Every section
//! is optional or empty until the user populates it — absence is a
//! condition rules report on, never a defect.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::activities::Activity;
use crate::context::{Budget, ContextualFactors, Partner};
use crate::outcomes::Outcome;
use crate::outputs::Output;
use crate::problem::ProblemContext;
use crate::stakeholders::ChangeTheory;

/// Root of a Logical Framework Analysis document
///
/// Sections follow the LFA hierarchy:
/// Problem → Stakeholders → Outcomes → Outputs → Activities, with
/// indicators attached to outcomes and outputs. Collection order is
/// preserved for stable field-path indices but carries no semantic
/// meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document bookkeeping (version, timestamps, status)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Program identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Program>,

    /// Why the program exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_context: Option<ProblemContext>,

    /// Who must change and how
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_theory: Option<ChangeTheory>,

    /// The change the program wants to see
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<Outcome>,

    /// What the program delivers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Output>,

    /// The work the program does
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,

    /// External assumptions and risks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual_factors: Option<ContextualFactors>,

    /// Partner organizations and their roles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partners: Vec<Partner>,

    /// Program-level budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
}

impl Document {
    /// Create an empty document (all sections absent, all collections empty)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Document bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Schema version of the stored document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// When the document was first created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the document was last saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Lifecycle status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

/// Lifecycle status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Being drafted in the wizard
    Draft,
    /// Actively used program design
    Active,
    /// No longer in use
    Archived,
}

/// Program identity section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Program name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What the program is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Planned start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Planned end date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Thematic area (health, education, livelihood, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Where the program operates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geographies: Vec<String>,
}
