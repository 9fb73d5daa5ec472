//! Problem context section
//!
//! The root of the LFA: what problem the program addresses and what
//! becomes possible if it is solved.

use serde::{Deserialize, Serialize};

/// Problem context section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemContext {
    /// The core problem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<Problem>,

    /// The opportunity for change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity: Option<Opportunity>,
}

/// The core problem statement and its analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Clear, specific statement of the problem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,

    /// Who is affected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_groups: Option<String>,

    /// Why the problem happens
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub root_causes: Vec<String>,

    /// Relative severity of the problem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<ProblemSeverity>,

    /// Data supporting the problem statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// Relative severity of the stated problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemSeverity {
    /// Urgent, high-impact problem
    High,
    /// Significant but not urgent
    Medium,
    /// Minor problem
    Low,
}

/// What could be possible if the problem is addressed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Statement of the opportunity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,

    /// What must be true for the opportunity to hold
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assumptions: Vec<String>,
}
