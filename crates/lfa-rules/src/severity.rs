//! Finding severities
//!
//! "Errors" here are a severity level in the output, not an execution
//! failure; no rule ever raises.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Severity of a finding, totally ordered by priority
///
/// `Error` ranks first: it is the only severity that blocks progression.
/// `Success` is reserved for positive confirmations; it is part of the
/// taxonomy even though no current rule emits it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Must fix to proceed
    Error,
    /// Should fix; logic is weak
    Warning,
    /// Informational nudge
    Info,
    /// Something is done well
    Success,
}

impl Severity {
    /// All severities in priority order
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Success,
    ];

    /// Priority rank (0 = highest priority)
    #[inline]
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
            Severity::Success => 3,
        }
    }

    /// Whether findings of this severity block progression
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        };
        write!(f, "{}", name)
    }
}
