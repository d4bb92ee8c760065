//! Canonical identity of the logged-in user.

use serde::{Deserialize, Serialize};

use crate::id::{OrganizationId, UserId};
use crate::profile::{Profile, Tenant};
use crate::role::Role;

/// Normalized user derived from a raw identity-provider record.
///
/// # Invariants
/// - `tenant` is always `profile.tenant()`; there is no way to set it directly,
///   deserialization included.
/// - `is_admin` is the explicit provider marker OR an administrative role.
/// - Values are never mutated in place. `with_*` methods return a new `User`
///   that callers publish wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "UserRecord")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    avatar_url: Option<String>,
    profile: Profile,
    tenant: Tenant,
    role: Role,
    is_admin: bool,
    #[serde(skip)]
    admin_marker: bool,
    organization_id: OrganizationId,
}

/// Wire shape accepted on deserialization. A `tenant` field, if present, is
/// ignored and re-derived from `profile`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    id: UserId,
    name: String,
    email: String,
    #[serde(default)]
    avatar_url: Option<String>,
    profile: Profile,
    #[serde(default)]
    role: Role,
    #[serde(default)]
    is_admin: bool,
    organization_id: OrganizationId,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        let admin_marker = record.is_admin && !record.role.is_administrative();
        Self::new(
            record.id,
            record.name,
            record.email,
            record.profile,
            record.organization_id,
        )
        .with_avatar(record.avatar_url.unwrap_or_default())
        .with_role(record.role)
        .with_admin_flag(admin_marker)
    }
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        profile: Profile,
        organization_id: OrganizationId,
    ) -> Self {
        let role = Role::default();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar_url: None,
            profile,
            tenant: profile.tenant(),
            is_admin: role.is_administrative(),
            admin_marker: false,
            role,
            organization_id,
        }
    }

    /// Replace the role. The admin flag is recomputed from the new role and
    /// the explicit marker.
    pub fn with_role(self, role: Role) -> Self {
        let is_admin = self.admin_marker || role.is_administrative();
        Self { role, is_admin, ..self }
    }

    /// Set the explicit provider admin marker.
    pub fn with_admin_flag(self, admin_marker: bool) -> Self {
        let is_admin = admin_marker || self.role.is_administrative();
        Self {
            admin_marker,
            is_admin,
            ..self
        }
    }

    pub fn with_avatar(self, avatar_url: impl Into<String>) -> Self {
        let avatar_url = avatar_url.into();
        Self {
            avatar_url: (!avatar_url.is_empty()).then_some(avatar_url),
            ..self
        }
    }

    pub fn with_organization(self, organization_id: OrganizationId) -> Self {
        Self {
            organization_id,
            ..self
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn tenant(&self) -> Tenant {
        self.tenant
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neoin_user() -> User {
        User::new(
            "u-1",
            "Ana",
            "ana@neoin.com.br",
            Profile::Neoin,
            Profile::Neoin.default_organization_id(),
        )
    }

    #[test]
    fn tenant_follows_profile() {
        let user = neoin_user();
        assert_eq!(user.tenant(), Tenant::Neoin);
        assert!(!user.is_admin());
        assert_eq!(user.role(), &Role::USER);
    }

    #[test]
    fn with_avatar_returns_new_value() {
        let before = neoin_user();
        let after = before.clone().with_avatar("https://cdn.example/ana.png");
        assert_eq!(before.avatar_url(), None);
        assert_eq!(after.avatar_url(), Some("https://cdn.example/ana.png"));
        assert_eq!(after.profile(), before.profile());
    }

    #[test]
    fn empty_avatar_clears_it() {
        let user = neoin_user().with_avatar("x").with_avatar("");
        assert_eq!(user.avatar_url(), None);
    }

    #[test]
    fn master_role_marks_admin() {
        let user = neoin_user().with_role(Role::new("MASTER"));
        assert!(user.role().is_master());
        assert!(user.is_admin());
    }

    #[test]
    fn explicit_admin_flag_survives_role_change() {
        let user = neoin_user().with_admin_flag(true).with_role(Role::USER);
        assert!(user.is_admin());
    }

    #[test]
    fn demoted_role_drops_admin() {
        let user = neoin_user().with_role(Role::MASTER).with_role(Role::USER);
        assert!(!user.is_admin());

        let flagged = neoin_user()
            .with_admin_flag(true)
            .with_role(Role::MASTER)
            .with_role(Role::USER);
        assert!(flagged.is_admin());
    }

    #[test]
    fn deserialized_tenant_is_derived_from_profile() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u-9",
            "name": "Ana",
            "email": "ana@neoin.com.br",
            "profile": "NEOIN",
            "tenant": "SALT_GHF",
            "role": "USER",
            "isAdmin": false,
            "organizationId": "neoin-org-1"
        }))
        .unwrap();
        assert_eq!(user.profile(), Profile::Neoin);
        assert_eq!(user.tenant(), Tenant::Neoin);
    }

    #[test]
    fn deserialized_admin_flag_is_an_explicit_marker() {
        let json = serde_json::json!({
            "id": "u-9",
            "name": "Ana",
            "email": "ana@salt.com.br",
            "profile": "SALT",
            "role": "MASTER",
            "isAdmin": true,
            "organizationId": "salt-org-1"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert!(user.is_admin());
        assert!(!user.with_role(Role::USER).is_admin());
    }

    #[test]
    fn round_trips_through_json() {
        let user = neoin_user().with_admin_flag(true).with_avatar("a.png");
        let back: User = serde_json::from_value(serde_json::to_value(&user).unwrap()).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(neoin_user()).unwrap();
        assert_eq!(json["organizationId"], "neoin-org-1");
        assert_eq!(json["tenant"], "NEOIN");
        assert_eq!(json["isAdmin"], false);
    }
}
