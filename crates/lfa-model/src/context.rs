//! Supporting sections: contextual factors, partners, budget
//!
//! External factors that could affect the design, the organizations
//! helping deliver it, and the program-level budget.

use serde::{Deserialize, Serialize};

use crate::ids::{AssumptionId, PartnerId, RiskId};

/// External assumptions and risks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualFactors {
    /// What must hold for the design to work
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assumptions: Vec<Assumption>,

    /// What could go wrong
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risks: Vec<Risk>,
}

/// An assumption the design depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumption {
    /// Unique id within the document
    pub id: AssumptionId,

    /// The assumption itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,

    /// Where in the logic chain it applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<AssumptionLevel>,

    /// How likely it is to hold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<Likelihood>,

    /// What to do if it fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

/// Where in the logic chain an assumption applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssumptionLevel {
    /// Applies to the whole design
    Global,
    /// Applies between outputs and outcomes
    OutcomeLevel,
    /// Applies between activities and outputs
    OutputLevel,
    /// Applies to activity execution
    ActivityLevel,
}

/// A risk to the design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// Unique id within the document
    pub id: RiskId,

    /// The risk itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,

    /// How serious it is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Likelihood>,

    /// How it is managed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

/// Coarse probability / seriousness scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    /// Likely / serious
    High,
    /// Possible / moderate
    Medium,
    /// Unlikely / minor
    Low,
}

/// A partner organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    /// Unique id within the document
    pub id: PartnerId,

    /// Organization name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Role in the program (implementer, funder, advisor, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// What the partner is responsible for
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Partner {
    /// Create a partner with nothing filled in yet
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<PartnerId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            role: None,
            responsibilities: Vec::new(),
            contact: None,
        }
    }

    /// With organization name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With contact email
    #[inline]
    #[must_use]
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }
}

/// Program-level budget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Total budget in local currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<f64>,

    /// Currency code (e.g. "INR")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Budget period (e.g. "2024-2025")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    /// Cost breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BudgetBreakdown>,
}

/// Coarse cost breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    /// Staff costs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personnel_costs: Option<f64>,

    /// Running costs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operational_costs: Option<f64>,

    /// Direct program costs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_costs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assumption_level_serializes_kebab_case() {
        let assumption = Assumption {
            id: AssumptionId::new("ass-001"),
            statement: Some("Government will support deployment".to_string()),
            level: Some(AssumptionLevel::OutcomeLevel),
            probability: Some(Likelihood::High),
            mitigation: None,
        };

        let json = serde_json::to_value(&assumption).unwrap();
        assert_eq!(json["level"], "outcome-level");
        assert_eq!(json["probability"], "high");
    }

    #[test]
    fn partner_builder() {
        let partner = Partner::new("partner-001")
            .with_name("District Health Department")
            .with_contact("dho@district.gov");

        assert_eq!(partner.contact.as_deref(), Some("dho@district.gov"));
    }

    #[test]
    fn budget_round_trips() {
        let budget = Budget {
            total_budget: Some(1_500_000.0),
            currency: Some("INR".to_string()),
            breakdown: Some(BudgetBreakdown {
                personnel_costs: Some(600_000.0),
                ..BudgetBreakdown::default()
            }),
            ..Budget::default()
        };

        let json = serde_json::to_string(&budget).unwrap();
        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, budget);
    }
}
