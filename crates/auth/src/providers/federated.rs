//! Federated identity provider: uid, profile fields and custom claims.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crm_core::User;

use crate::classify::classify_email;
use crate::mapper::{IdentityMapper, display_name_or_fallback, fallback_user, normalize_role};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedUser {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub custom_claims: HashMap<String, Value>,
}

#[derive(Debug, Copy, Clone, Default)]
pub struct FederatedMapper;

impl IdentityMapper for FederatedMapper {
    type Raw = FederatedUser;

    fn map_to_user(&self, raw: &FederatedUser) -> User {
        let email = raw.email.as_deref();
        let classification = classify_email(email);
        let role = raw.custom_claims.get("role").and_then(Value::as_str);
        let admin = raw
            .custom_claims
            .get("admin")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let user = User::new(
            raw.uid.as_str(),
            display_name_or_fallback(raw.display_name.as_deref(), email),
            email.unwrap_or_default(),
            classification.profile,
            classification.organization_id,
        )
        .with_role(normalize_role(role))
        .with_admin_flag(admin);

        match raw.photo_url.as_deref() {
            Some(url) => user.with_avatar(url),
            None => user,
        }
    }

    fn create_default_user(&self) -> User {
        fallback_user("offline-user", classify_email(None).organization_id)
    }
}
