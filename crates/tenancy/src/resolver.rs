use crm_core::{FailOpenDefault, OrganizationId, Tenant};

use crate::lookup::TenantLookup;

/// Resolves the tenant of an organization.
///
/// Never fails: unknown organizations and remote failures resolve to the
/// default tenant (fail-open).
#[derive(Debug, Clone)]
pub struct TenantResolver<L> {
    lookup: L,
    policy: FailOpenDefault<Tenant>,
}

impl<L: TenantLookup> TenantResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            policy: FailOpenDefault::new(Tenant::default()),
        }
    }

    pub async fn resolve_tenant(&self, organization_id: Option<&OrganizationId>) -> Tenant {
        let organization_id = organization_id.filter(|id| !id.as_str().is_empty());
        let Some(organization_id) = organization_id else {
            return *self.policy.fallback();
        };

        if let Some(tenant) = self.lookup.lookup_static(organization_id) {
            tracing::debug!(%organization_id, %tenant, "tenant resolved from static table");
            return tenant;
        }

        let outcome = self.lookup.lookup_remote(organization_id).await.map(|found| {
            found.unwrap_or_else(|| {
                tracing::debug!(%organization_id, "organization not found");
                *self.policy.fallback()
            })
        });
        let tenant = self.policy.recover("lookup_organization", outcome);
        tracing::debug!(%organization_id, %tenant, "tenant resolved from organization store");
        tenant
    }
}
