//! In-house user directory. Organizations are looked up in a provided list
//! instead of using the per-profile default ids.

use serde::{Deserialize, Serialize};

use crm_core::{Organization, OrganizationId, Profile, User};

use crate::classify::classify_email;
use crate::mapper::{IdentityMapper, display_name_or_fallback, fallback_user, normalize_role};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Mapper bound to the organization list it resolves against.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryMapper<'a> {
    organizations: &'a [Organization],
}

impl<'a> DirectoryMapper<'a> {
    pub fn new(organizations: &'a [Organization]) -> Self {
        Self { organizations }
    }

    /// First organization whose code equals the profile tag, or whose name
    /// contains it (case-insensitive). Falls back to `"default-org"`.
    pub fn organization_for(&self, profile: Profile) -> OrganizationId {
        let tag = profile.as_str();
        let tag_lower = tag.to_lowercase();

        self.organizations
            .iter()
            .find(|org| org.code.as_str() == tag || org.name.to_lowercase().contains(&tag_lower))
            .map(|org| org.id.clone())
            .unwrap_or_else(OrganizationId::fallback)
    }
}

impl IdentityMapper for DirectoryMapper<'_> {
    type Raw = DirectoryUser;

    fn map_to_user(&self, raw: &DirectoryUser) -> User {
        let email = raw.email.as_deref();
        let classification = classify_email(email);
        let organization_id = self.organization_for(classification.profile);

        let user = User::new(
            raw.id.as_str(),
            display_name_or_fallback(raw.name.as_deref(), email),
            email.unwrap_or_default(),
            classification.profile,
            organization_id,
        )
        .with_role(normalize_role(raw.role.as_deref()))
        .with_admin_flag(raw.is_admin);

        match raw.avatar.as_deref() {
            Some(url) => user.with_avatar(url),
            None => user,
        }
    }

    fn create_default_user(&self) -> User {
        fallback_user("default-user", self.organization_for(Profile::Salt))
    }
}
