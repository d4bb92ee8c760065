use async_trait::async_trait;

use crm_core::{CollaboratorError, OrganizationCode, OrganizationId};

/// Remote organization backend.
#[async_trait]
pub trait OrganizationStore: Send + Sync {
    /// The organization's code. Unknown organizations fail with
    /// [`CollaboratorError::NotFound`].
    async fn lookup_code(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<OrganizationCode, CollaboratorError>;
}

#[async_trait]
impl<S> OrganizationStore for std::sync::Arc<S>
where
    S: OrganizationStore + ?Sized,
{
    async fn lookup_code(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<OrganizationCode, CollaboratorError> {
        (**self).lookup_code(organization_id).await
    }
}
