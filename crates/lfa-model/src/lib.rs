//! LFA Model - Typed document schema
//!
//! The substrate every validation rule reads:
//! - The [`Document`] root aggregate and its sections
//! - [`FieldPath`] addressing for findings
//! - Entity id newtypes
//! - The [`DocumentStore`] contract for hosting wizards
//!
//! Every user-fillable field is optional; "absent" is an explicit case,
//! never a runtime guard. This crate holds no validation logic.

#![warn(unreachable_pub)]

pub mod activities;
pub mod context;
pub mod document;
pub mod ids;
pub mod outcomes;
pub mod outputs;
pub mod path;
pub mod problem;
pub mod stakeholders;
pub mod store;

// Re-exports for convenience
pub use activities::{Activity, OutputLink, Resources, Timeline};
pub use context::{
    Assumption, AssumptionLevel, Budget, BudgetBreakdown, ContextualFactors, Likelihood, Partner,
    Risk,
};
pub use document::{Document, DocumentStatus, Metadata, Program};
pub use ids::{
    ActivityId, AssumptionId, IndicatorId, OutcomeId, OutputId, PartnerId, RiskId, StakeholderId,
};
pub use outcomes::{Indicator, Metric, Outcome, OutcomeScope};
pub use outputs::{OutcomeLink, Output, OutputScope};
pub use path::{FieldPath, PathError, Segment};
pub use problem::{Opportunity, Problem, ProblemContext, ProblemSeverity};
pub use stakeholders::{ChangePathway, ChangeTheory, CurrentState, DesiredChange, Stakeholder};
pub use store::{DocumentStore, JsonFileStore, MemoryStore, StoreError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
