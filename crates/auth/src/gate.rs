//! Permission gate: the single entry point UI code uses to ask "may this user
//! do X?".

use async_trait::async_trait;

use crm_core::{CollaboratorError, FailClosedDeny, User};

use crate::PermissionCode;

/// Remote capability check for the current session.
#[async_trait]
pub trait AuthorizationRpc: Send + Sync {
    async fn check_permission(&self, code: &PermissionCode) -> Result<bool, CollaboratorError>;
}

#[async_trait]
impl<R> AuthorizationRpc for std::sync::Arc<R>
where
    R: AuthorizationRpc + ?Sized,
{
    async fn check_permission(&self, code: &PermissionCode) -> Result<bool, CollaboratorError> {
        (**self).check_permission(code).await
    }
}

/// Decides authorization for a resolved user.
///
/// - No user: denied.
/// - `MASTER` role: granted without contacting the backend.
/// - Anything else: the backend's answer, with failures denied.
#[derive(Debug, Clone)]
pub struct PermissionGate<R> {
    rpc: R,
    policy: FailClosedDeny,
}

impl<R: AuthorizationRpc> PermissionGate<R> {
    pub fn new(rpc: R) -> Self {
        Self {
            rpc,
            policy: FailClosedDeny,
        }
    }

    pub async fn has_permission(&self, user: Option<&User>, code: &PermissionCode) -> bool {
        let Some(user) = user else {
            tracing::debug!(permission = %code, "no user; permission denied");
            return false;
        };

        if user.role().is_master() {
            tracing::debug!(user_id = %user.id(), permission = %code, "master role bypass");
            return true;
        }

        let outcome = self.rpc.check_permission(code).await;
        self.policy.recover("check_permission", outcome)
    }
}
