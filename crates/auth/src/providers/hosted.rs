//! Hosted auth backend: identity plus a free-form `user_metadata` object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crm_core::User;

use crate::classify::classify_email;
use crate::mapper::{IdentityMapper, display_name_or_fallback, fallback_user, normalize_role};

/// Raw user record as returned by the hosted auth backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostedUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
}

impl HostedUser {
    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.user_metadata.get(key).and_then(Value::as_str)
    }

    fn metadata_flag(&self, key: &str) -> bool {
        self.user_metadata
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct HostedMapper;

impl IdentityMapper for HostedMapper {
    type Raw = HostedUser;

    fn map_to_user(&self, raw: &HostedUser) -> User {
        let email = raw.email.as_deref();
        let classification = classify_email(email);
        let name = raw
            .metadata_str("name")
            .or_else(|| raw.metadata_str("full_name"));

        let user = User::new(
            raw.id.as_str(),
            display_name_or_fallback(name, email),
            email.unwrap_or_default(),
            classification.profile,
            classification.organization_id,
        )
        .with_role(normalize_role(raw.metadata_str("role")))
        .with_admin_flag(raw.metadata_flag("is_admin"));

        match raw.metadata_str("avatar_url") {
            Some(url) => user.with_avatar(url),
            None => user,
        }
    }

    fn create_default_user(&self) -> User {
        let classification = classify_email(None);
        fallback_user("default-user", classification.organization_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::{Profile, Role, Tenant};
    use serde_json::json;

    fn raw(value: serde_json::Value) -> HostedUser {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_metadata_fields() {
        let user = HostedMapper.map_to_user(&raw(json!({
            "id": "a1",
            "email": "ana@ghf.com.br",
            "user_metadata": {
                "full_name": "Ana Souza",
                "avatar_url": "https://cdn.example/ana.png",
                "role": "manager"
            }
        })));

        assert_eq!(user.id().as_str(), "a1");
        assert_eq!(user.name(), "Ana Souza");
        assert_eq!(user.profile(), Profile::Ghf);
        assert_eq!(user.tenant(), Tenant::SaltGhf);
        assert_eq!(user.organization_id().as_str(), "ghf-org-1");
        assert_eq!(user.avatar_url(), Some("https://cdn.example/ana.png"));
        assert_eq!(user.role(), &Role::new("MANAGER"));
        assert!(!user.is_admin());
    }

    #[test]
    fn admin_marker_sets_flag() {
        let user = HostedMapper.map_to_user(&raw(json!({
            "id": "a2",
            "email": "root@neoin.com",
            "user_metadata": { "is_admin": true }
        })));
        assert!(user.is_admin());
        assert_eq!(user.tenant(), Tenant::Neoin);
    }

    #[test]
    fn record_without_email_uses_defaults() {
        let user = HostedMapper.map_to_user(&raw(json!({ "id": "a3" })));
        assert_eq!(user.profile(), Profile::Salt);
        assert_eq!(user.tenant(), Tenant::SaltGhf);
        assert_eq!(user.organization_id().as_str(), "salt-org-1");
        assert_eq!(user.email(), "");
        assert_eq!(user.name(), "User");
    }

    #[test]
    fn default_user_is_salt() {
        let user = HostedMapper.create_default_user();
        assert_eq!(user.profile(), Profile::Salt);
        assert_eq!(user.tenant(), Tenant::SaltGhf);
        assert_eq!(user.id().as_str(), "default-user");
    }
}
