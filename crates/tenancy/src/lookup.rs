use std::sync::Arc;

use async_trait::async_trait;

use crm_core::{CollaboratorError, OrganizationCode, OrganizationId, Tenant};

use crate::store::OrganizationStore;
use crate::table::StaticTenantTable;

/// Two-tier organization → tenant lookup.
///
/// The resolver always asks `lookup_static` first and only calls
/// `lookup_remote` when the static tier has no entry.
#[async_trait]
pub trait TenantLookup: Send + Sync {
    /// Tier 1: in-memory, never suspends.
    fn lookup_static(&self, organization_id: &OrganizationId) -> Option<Tenant>;

    /// Tier 2: remote-authoritative. `Ok(None)` means the organization is unknown.
    async fn lookup_remote(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Option<Tenant>, CollaboratorError>;
}

/// Tenant for an organization code: only `"NEOIN"` maps to NEOIN.
pub fn tenant_for_code(code: &OrganizationCode) -> Tenant {
    match code.as_str() {
        "NEOIN" => Tenant::Neoin,
        _ => Tenant::SaltGhf,
    }
}

/// Static table backed by an [`OrganizationStore`].
#[derive(Debug, Clone)]
pub struct TwoTierLookup<S> {
    table: Arc<StaticTenantTable>,
    store: S,
}

impl<S: OrganizationStore> TwoTierLookup<S> {
    pub fn new(table: Arc<StaticTenantTable>, store: S) -> Self {
        Self { table, store }
    }

    /// Shares the process-wide built-in table.
    pub fn with_builtin_table(store: S) -> Self {
        Self::new(StaticTenantTable::shared(), store)
    }
}

#[async_trait]
impl<S: OrganizationStore> TenantLookup for TwoTierLookup<S> {
    fn lookup_static(&self, organization_id: &OrganizationId) -> Option<Tenant> {
        self.table.get(organization_id)
    }

    async fn lookup_remote(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Option<Tenant>, CollaboratorError> {
        match self.store.lookup_code(organization_id).await {
            Ok(code) => Ok(Some(tenant_for_code(&code))),
            Err(CollaboratorError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryOrganizationStore;
    use crm_core::Organization;

    #[test]
    fn only_neoin_code_maps_to_neoin() {
        assert_eq!(tenant_for_code(&OrganizationCode::new("NEOIN")), Tenant::Neoin);
        assert_eq!(tenant_for_code(&OrganizationCode::new("neoin")), Tenant::SaltGhf);
        assert_eq!(tenant_for_code(&OrganizationCode::new("GHF")), Tenant::SaltGhf);
        assert_eq!(tenant_for_code(&OrganizationCode::new("")), Tenant::SaltGhf);
    }

    #[tokio::test]
    async fn remote_tier_translates_codes() {
        let store = Arc::new(
            InMemoryOrganizationStore::new()
                .with_organization(Organization::new("org-9", "Neoin Sul", "NEOIN")),
        );
        let lookup = TwoTierLookup::with_builtin_table(store.clone());

        assert_eq!(lookup.lookup_static(&"org-9".into()), None);
        assert_eq!(lookup.lookup_remote(&"org-9".into()).await, Ok(Some(Tenant::Neoin)));
        assert_eq!(lookup.lookup_remote(&"missing".into()).await, Ok(None));
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn transport_failure_is_not_treated_as_missing() {
        let store = Arc::new(InMemoryOrganizationStore::new());
        store.fail_with(CollaboratorError::transport("timeout"));
        let lookup = TwoTierLookup::with_builtin_table(store);

        assert_eq!(
            lookup.lookup_remote(&"org-9".into()).await,
            Err(CollaboratorError::transport("timeout"))
        );
    }

    #[test]
    fn builtin_lookups_share_one_table() {
        let a = TwoTierLookup::with_builtin_table(InMemoryOrganizationStore::new());
        let b = TwoTierLookup::with_builtin_table(InMemoryOrganizationStore::new());
        assert!(Arc::ptr_eq(&a.table, &b.table));
    }
}
