//! Change theory section: stakeholders and practice change
//!
//! Describes WHO must change and HOW: each stakeholder group's current
//! state, the desired change, and the pathways expected to produce it.

use serde::{Deserialize, Serialize};

use crate::ids::{ActivityId, StakeholderId};

/// Change theory section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTheory {
    /// Stakeholder groups expected to change
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stakeholders: Vec<Stakeholder>,
}

/// A stakeholder group expected to change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    /// Unique id within the document
    pub id: StakeholderId,

    /// Who this group is (e.g. "Smallholder farmers")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Narrower description of the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// What the group does today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<CurrentState>,

    /// What the group should do instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_change: Option<DesiredChange>,

    /// How the change is expected to happen
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub change_pathways: Vec<ChangePathway>,
}

impl Stakeholder {
    /// Create a stakeholder with nothing filled in yet
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<StakeholderId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            current_state: None,
            desired_change: None,
            change_pathways: Vec::new(),
        }
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With current practices
    #[inline]
    #[must_use]
    pub fn with_current_practices(mut self, practices: impl Into<String>) -> Self {
        self.current_state
            .get_or_insert_with(CurrentState::default)
            .practices = Some(practices.into());
        self
    }

    /// With desired target practices
    #[inline]
    #[must_use]
    pub fn with_target_practices(mut self, practices: impl Into<String>) -> Self {
        self.desired_change
            .get_or_insert_with(DesiredChange::default)
            .target_practices = Some(practices.into());
        self
    }

    /// With a change pathway
    #[inline]
    #[must_use]
    pub fn with_pathway(mut self, pathway: ChangePathway) -> Self {
        self.change_pathways.push(pathway);
        self
    }
}

/// Current state of a stakeholder group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentState {
    /// What they do now
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practices: Option<String>,

    /// What they know or don't know
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<String>,

    /// What they believe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attitudes: Option<String>,

    /// What barriers they face
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
}

/// Desired change for a stakeholder group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredChange {
    /// What they should do — the load-bearing field of the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_practices: Option<String>,

    /// What they should know
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_knowledge: Option<String>,

    /// What they should believe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_attitudes: Option<String>,

    /// What barriers should be removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_access: Option<String>,

    /// By when the change should happen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// One mechanism through which a stakeholder is expected to change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePathway {
    /// Mechanism of change (training, incentive, access, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,

    /// Longer description of the pathway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Which activity enables this pathway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_to_activity: Option<ActivityId>,
}

impl ChangePathway {
    /// Create a pathway for a mechanism
    #[inline]
    #[must_use]
    pub fn mechanism(mechanism: impl Into<String>) -> Self {
        Self {
            mechanism: Some(mechanism.into()),
            description: None,
            link_to_activity: None,
        }
    }

    /// With the enabling activity
    #[inline]
    #[must_use]
    pub fn enabled_by(mut self, activity: impl Into<ActivityId>) -> Self {
        self.link_to_activity = Some(activity.into());
        self
    }
}
