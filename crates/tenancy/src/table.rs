use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use thiserror::Error;

use crm_core::{OrganizationId, Profile, Tenant};

static BUILTIN: LazyLock<Arc<StaticTenantTable>> =
    LazyLock::new(|| Arc::new(StaticTenantTable::builtin()));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("malformed tenant mapping '{0}' (expected org-id=TENANT)")]
    Malformed(String),

    #[error("unknown tenant in mapping '{0}'")]
    UnknownTenant(String),
}

/// Immutable organization → tenant table (tier 1 of tenant resolution).
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticTenantTable {
    entries: HashMap<OrganizationId, Tenant>,
}

impl StaticTenantTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The three hardcoded organizations.
    pub fn builtin() -> Self {
        Profile::ALL
            .iter()
            .fold(Self::empty(), |table, profile| {
                table.with_entry(profile.default_organization_id(), profile.tenant())
            })
    }

    /// Process-wide shared instance of [`StaticTenantTable::builtin`].
    /// Every call hands out the same allocation.
    pub fn shared() -> Arc<StaticTenantTable> {
        Arc::clone(&BUILTIN)
    }

    pub fn with_entry(mut self, organization_id: OrganizationId, tenant: Tenant) -> Self {
        self.entries.insert(organization_id, tenant);
        self
    }

    /// Add entries from `org-id=TENANT` pairs, comma separated.
    pub fn with_mappings(self, mappings: &str) -> Result<Self, TableError> {
        mappings
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .try_fold(self, |table, pair| {
                let (org, tenant) = pair
                    .split_once('=')
                    .map(|(o, t)| (o.trim(), t.trim()))
                    .filter(|(o, t)| !o.is_empty() && !t.is_empty())
                    .ok_or_else(|| TableError::Malformed(pair.to_string()))?;
                let tenant = tenant
                    .parse::<Tenant>()
                    .map_err(|_| TableError::UnknownTenant(pair.to_string()))?;
                Ok(table.with_entry(OrganizationId::new(org), tenant))
            })
    }

    pub fn get(&self, organization_id: &OrganizationId) -> Option<Tenant> {
        self.entries.get(organization_id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_maps_hardcoded_organizations() {
        let table = StaticTenantTable::builtin();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&"salt-org-1".into()), Some(Tenant::SaltGhf));
        assert_eq!(table.get(&"ghf-org-1".into()), Some(Tenant::SaltGhf));
        assert_eq!(table.get(&"neoin-org-1".into()), Some(Tenant::Neoin));
        assert_eq!(table.get(&"other".into()), None);
    }

    #[test]
    fn shared_matches_builtin() {
        assert_eq!(*StaticTenantTable::shared(), StaticTenantTable::builtin());
        assert!(Arc::ptr_eq(
            &StaticTenantTable::shared(),
            &StaticTenantTable::shared()
        ));
    }

    #[test]
    fn mappings_extend_table() {
        let table = StaticTenantTable::builtin()
            .with_mappings("acme-1=NEOIN, beta = SALT_GHF,")
            .unwrap();
        assert_eq!(table.get(&"acme-1".into()), Some(Tenant::Neoin));
        assert_eq!(table.get(&"beta".into()), Some(Tenant::SaltGhf));
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn malformed_mappings_are_rejected() {
        assert_eq!(
            StaticTenantTable::empty().with_mappings("acme").unwrap_err(),
            TableError::Malformed("acme".to_string())
        );
        assert_eq!(
            StaticTenantTable::empty().with_mappings("acme=").unwrap_err(),
            TableError::Malformed("acme=".to_string())
        );
        assert_eq!(
            StaticTenantTable::empty().with_mappings("acme=GHF").unwrap_err(),
            TableError::UnknownTenant("acme=GHF".to_string())
        );
    }
}
