//! Entity identifiers
//!
//! Every collection entity (stakeholder, outcome, output, activity, ...)
//! is identified solely by its id; names may repeat. Ids are
//! caller-supplied opaque strings, compared verbatim. [`generate`] is
//! available for hosts that need a fresh unique id.
//!
//! [`generate`]: OutcomeId::generate

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id value
            #[inline]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a fresh unique id
            #[inline]
            #[must_use]
            pub fn generate() -> Self {
                Self(Ulid::new().to_string().to_lowercase())
            }

            /// Get the raw id string
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(
    /// Identifies a stakeholder group within the change theory
    StakeholderId
);
define_id!(
    /// Identifies an outcome
    OutcomeId
);
define_id!(
    /// Identifies an output
    OutputId
);
define_id!(
    /// Identifies an activity
    ActivityId
);
define_id!(
    /// Identifies an indicator on an outcome or output
    IndicatorId
);
define_id!(
    /// Identifies a partner organization
    PartnerId
);
define_id!(
    /// Identifies a contextual assumption
    AssumptionId
);
define_id!(
    /// Identifies a contextual risk
    RiskId
);
