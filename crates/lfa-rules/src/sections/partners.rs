//! Partner checks
//!
//! Partners are optional; an empty collection produces nothing, so this
//! group can never block a document that simply has no partners yet.

use lfa_model::{FieldPath, Partner};

use crate::field;
use crate::finding::Finding;

/// Validate the partners collection
#[must_use]
pub fn partners(partners: &[Partner]) -> Vec<Finding> {
    let base = FieldPath::field("partners");

    let mut findings = Vec::new();

    for (idx, partner) in partners.iter().enumerate() {
        let prefix = base.at(idx);
        let number = idx + 1;

        if let Some(finding) = field::required(
            partner.name.as_deref(),
            &format!("Partner {}: name", number),
            prefix.child("name"),
        ) {
            findings.push(finding.with_suggestion("Identify the partner organization."));
        }

        findings.extend(field::email_format(
            partner.contact.as_deref(),
            prefix.child("contact"),
        ));
    }

    findings
}
