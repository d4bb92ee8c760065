//! In-memory organization store for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crm_core::{CollaboratorError, Organization, OrganizationCode, OrganizationId};

use crate::store::OrganizationStore;

#[derive(Debug, Default)]
pub struct InMemoryOrganizationStore {
    organizations: RwLock<HashMap<OrganizationId, Organization>>,
    failure: RwLock<Option<CollaboratorError>>,
    calls: AtomicUsize,
}

impl InMemoryOrganizationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(self, organization: Organization) -> Self {
        self.upsert(organization);
        self
    }

    pub fn upsert(&self, organization: Organization) {
        if let Ok(mut map) = self.organizations.write() {
            map.insert(organization.id.clone(), organization);
        }
    }

    pub fn list(&self) -> Vec<Organization> {
        let map = match self.organizations.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        let mut orgs: Vec<Organization> = map.values().cloned().collect();
        orgs.sort_by(|a, b| a.id.cmp(&b.id));
        orgs
    }

    /// Make every subsequent lookup fail with `err`.
    pub fn fail_with(&self, err: CollaboratorError) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = Some(err);
        }
    }

    /// Number of remote lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrganizationStore for InMemoryOrganizationStore {
    async fn lookup_code(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<OrganizationCode, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.failure.read().ok().and_then(|f| f.clone()) {
            return Err(err);
        }

        let map = self
            .organizations
            .read()
            .map_err(|_| CollaboratorError::transport("organization store poisoned"))?;
        map.get(organization_id)
            .map(|org| org.code.clone())
            .ok_or(CollaboratorError::NotFound)
    }
}
