//! Composition root: wires the collaborators behind each core component.

use std::sync::Arc;

use serde::Serialize;

use crm_auth::{AuthorizationRpc, InMemoryAuthorizationRpc, PermissionCode, PermissionGate};
use crm_core::{Organization, Tenant, User};
use crm_data::{DashboardStats, InMemoryProfileDataSource, ProfileDataSource, ProfileScopedData};
use crm_tenancy::{InMemoryOrganizationStore, OrganizationStore, TenantResolver, TwoTierLookup};

use crate::config::AppConfig;

/// Permission that unlocks lead export on the dashboard.
pub const LEADS_EXPORT: PermissionCode = PermissionCode::new_static("leads.export");

pub type SharedOrganizationStore = Arc<dyn OrganizationStore>;
pub type SharedAuthorizationRpc = Arc<dyn AuthorizationRpc>;
pub type SharedDataSource = Arc<dyn ProfileDataSource>;

pub struct AppState {
    pub resolver: TenantResolver<TwoTierLookup<SharedOrganizationStore>>,
    pub gate: PermissionGate<SharedAuthorizationRpc>,
    pub data: ProfileScopedData<SharedDataSource>,
}

/// Everything the home screen needs for one signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub user: User,
    pub tenant: Tenant,
    pub stats: DashboardStats,
    pub can_export_leads: bool,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        organizations: SharedOrganizationStore,
        authorization: SharedAuthorizationRpc,
        data: SharedDataSource,
    ) -> Self {
        let lookup = TwoTierLookup::new(Arc::new(config.tenant_table.clone()), organizations);
        Self {
            resolver: TenantResolver::new(lookup),
            gate: PermissionGate::new(authorization),
            data: ProfileScopedData::new(data),
        }
    }

    /// Demo wiring with in-memory collaborators. Returns the organization
    /// directory too, since the directory provider maps against it.
    pub fn in_memory(config: &AppConfig) -> (Self, Vec<Organization>) {
        let organizations = demo_organizations();
        let store = organizations
            .iter()
            .cloned()
            .fold(InMemoryOrganizationStore::new(), |store, org| {
                store.with_organization(org)
            });

        let state = Self::new(
            config,
            Arc::new(store),
            Arc::new(InMemoryAuthorizationRpc::granting(&["leads.read", LEADS_EXPORT.as_str()])),
            Arc::new(InMemoryProfileDataSource::seeded()),
        );
        (state, organizations)
    }

    pub async fn dashboard(&self, user: &User) -> Dashboard {
        let tenant = self
            .resolver
            .resolve_tenant(Some(user.organization_id()))
            .await;
        if tenant != user.tenant() {
            tracing::warn!(
                user_id = %user.id(),
                organization_id = %user.organization_id(),
                user_tenant = %user.tenant(),
                resolved_tenant = %tenant,
                "organization tenant differs from profile tenant"
            );
        }

        Dashboard {
            user: user.clone(),
            tenant,
            stats: self.data.get_stats_by_profile(user.profile()),
            can_export_leads: self.gate.has_permission(Some(user), &LEADS_EXPORT).await,
        }
    }
}

fn demo_organizations() -> Vec<Organization> {
    vec![
        Organization::new("org-salt", "Salt Crédito", "SALT"),
        Organization::new("org-ghf", "GHF Hospitalar", "GHF"),
        Organization::new("org-neoin", "Neoin Energia", "NEOIN"),
    ]
}
