//! LFA Engine - Validation orchestrator
//!
//! The engine is a pure function of a document snapshot to a list of
//! severity-ranked findings:
//! - Runs field, section, and cross-section rules in a fixed order
//! - Computes summary statistics and the proceed/block decision
//! - Groups findings by field and by severity for presentation
//!
//! There is no internal concurrency, no I/O, and no shared mutable
//! state: each call is independent and safe to run in parallel with
//! others on different snapshots. The caller owns the document,
//! debounces repeated invocations, and decides whether `can_proceed`
//! actually gates navigation.
//!
//! # Example
//!
//! ```rust
//! use lfa_engine::prelude::*;
//!
//! let document = Document::new();
//! let result = evaluate(&document);
//!
//! assert!(!result.can_proceed); // empty documents are incomplete
//! assert_eq!(result.summary.errors > 0, !result.summary.is_valid);
//! ```

#![warn(unreachable_pub)]

pub mod grouping;
pub mod orchestrator;

// Re-exports for convenience
pub use grouping::{group_by_field, group_by_severity};
pub use orchestrator::{evaluate, EvaluationResult, Summary};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the LFA engine
    pub use crate::{evaluate, EvaluationResult, Summary};
    pub use lfa_model::{Document, DocumentStore, FieldPath};
    pub use lfa_rules::{Finding, Severity};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
