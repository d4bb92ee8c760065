use crm_core::{OrganizationId, Profile, Role, User, UserId};

/// Converts a provider-specific raw user record into the canonical [`User`].
///
/// Implementations must be pure: no IO, no panics, and malformed input
/// degrades to defaults instead of failing.
pub trait IdentityMapper: Send + Sync {
    /// Raw record shape produced by the upstream identity provider.
    type Raw;

    fn map_to_user(&self, raw: &Self::Raw) -> User;

    /// Constant fallback identity for when no raw record is available
    /// (e.g. the provider is unreachable on startup).
    fn create_default_user(&self) -> User;
}

/// Display name used when the provider has none: the email's local part,
/// or a generic label.
pub(crate) fn display_name_or_fallback(name: Option<&str>, email: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .or_else(|| {
            email
                .and_then(|e| e.split('@').next())
                .filter(|local| !local.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "User".to_string())
}

/// Provider roles arrive in mixed case; local checks compare upper-case tags.
pub(crate) fn normalize_role(raw: Option<&str>) -> Role {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(role) => Role::new(role.to_uppercase()),
        None => Role::default(),
    }
}

/// Default identity, always SALT / SALT_GHF.
pub(crate) fn fallback_user(id: &str, organization_id: OrganizationId) -> User {
    User::new(
        UserId::new(id),
        "Default User",
        "default@salt.com.br",
        Profile::Salt,
        organization_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_explicit_name() {
        assert_eq!(display_name_or_fallback(Some(" Ana "), Some("x@y")), "Ana");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        assert_eq!(display_name_or_fallback(None, Some("bia@ghf.com")), "bia");
        assert_eq!(display_name_or_fallback(Some(""), Some("@ghf.com")), "User");
        assert_eq!(display_name_or_fallback(None, None), "User");
    }

    #[test]
    fn roles_are_upper_cased() {
        assert!(normalize_role(Some("master")).is_master());
        assert_eq!(normalize_role(Some("  ")), Role::USER);
        assert_eq!(normalize_role(None), Role::USER);
    }
}
