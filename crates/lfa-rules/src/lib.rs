//! LFA Rules - Deterministic validation rules
//!
//! Every validation rule for LFA documents lives here, organized by
//! level:
//! - Field rules: generic presence/length/range/format predicates
//! - Section rules: per-section coherence checks
//! - Cross-section rules: referential and logical alignment between
//!   sections
//!
//! Every rule is deterministic and total: malformed or partially-absent
//! sections produce [`Finding`]s, never failures.

#![warn(unreachable_pub)]

pub mod cross;
pub mod field;
pub mod finding;
pub mod sections;
pub mod severity;

pub use finding::Finding;
pub use severity::Severity;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
