//! Email-driven profile classification shared by every identity provider.

use crm_core::{OrganizationId, Profile, Tenant};

/// Result of classifying a user by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailClassification {
    pub profile: Profile,
    pub tenant: Tenant,
    pub organization_id: OrganizationId,
}

impl EmailClassification {
    fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            tenant: profile.tenant(),
            organization_id: profile.default_organization_id(),
        }
    }
}

impl Default for EmailClassification {
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}

/// Markers checked in order; the first rule with a matching marker wins.
const RULES: [(Profile, &[&str]); 3] = [
    (Profile::Salt, &["salt", "credito"]),
    (Profile::Ghf, &["ghf", "hospitalar"]),
    (Profile::Neoin, &["neoin"]),
];

/// Classify a user by case-sensitive substring tests on their email.
///
/// Absent, empty or unmatched emails fall back to SALT / SALT_GHF. This never
/// fails: malformed input degrades to the defaults.
pub fn classify_email(email: Option<&str>) -> EmailClassification {
    let Some(email) = email.filter(|e| !e.is_empty()) else {
        return EmailClassification::default();
    };

    RULES
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| email.contains(m)))
        .map(|(profile, _)| EmailClassification::for_profile(*profile))
        .unwrap_or_default()
}
