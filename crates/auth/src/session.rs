//! Session holder: the single owner of "the logged-in identity".
//!
//! The current [`User`] is replaced wholesale on every change and broadcast
//! through a `watch` channel, so readers never observe a half-updated value.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crm_core::{CollaboratorError, User};

use crate::error::AuthError;
use crate::mapper::IdentityMapper;

/// Upstream authentication provider.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    type Raw: Send + Sync;

    async fn login(&self, email: &str, password: &str) -> Result<(), CollaboratorError>;

    async fn logout(&self) -> Result<(), CollaboratorError>;

    async fn current_raw_user(&self) -> Result<Option<Self::Raw>, CollaboratorError>;
}

/// A signed-in identity and when it was last (re)established.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub user: Arc<User>,
    pub since: DateTime<Utc>,
}

pub struct Session<P, M> {
    provider: P,
    mapper: M,
    state: watch::Sender<Option<SignedIn>>,
}

impl<P, M> Session<P, M>
where
    P: AuthProvider,
    M: IdentityMapper<Raw = P::Raw>,
{
    pub fn new(provider: P, mapper: M) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            provider,
            mapper,
            state,
        }
    }

    pub fn current(&self) -> Option<Arc<User>> {
        self.state.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn signed_in(&self) -> Option<SignedIn> {
        self.state.borrow().clone()
    }

    /// Session-change notifications. The receiver sees every replacement of
    /// the current user, including sign-out (`None`).
    pub fn subscribe(&self) -> watch::Receiver<Option<SignedIn>> {
        self.state.subscribe()
    }

    /// Load whatever session the provider already has (startup path).
    ///
    /// When the provider cannot be reached, the mapper's default user is
    /// installed so the app stays usable.
    pub async fn restore(&self) -> Option<Arc<User>> {
        match self.provider.current_raw_user().await {
            Ok(Some(raw)) => Some(self.publish(self.mapper.map_to_user(&raw))),
            Ok(None) => {
                self.clear();
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not restore session; using default user");
                Some(self.publish(self.mapper.create_default_user()))
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Arc<User>, AuthError> {
        self.provider.login(email, password).await?;

        let raw = self
            .provider
            .current_raw_user()
            .await?
            .ok_or(AuthError::NoSession)?;

        let user = self.publish(self.mapper.map_to_user(&raw));
        tracing::info!(
            user_id = %user.id(),
            profile = %user.profile(),
            tenant = %user.tenant(),
            "user signed in"
        );
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        self.provider.logout().await?;
        if let Some(user) = self.current() {
            tracing::info!(user_id = %user.id(), "user signed out");
        }
        self.clear();
        Ok(())
    }

    /// Re-read the raw user and replace the current value. A provider failure
    /// keeps the current user and is reported to the caller.
    pub async fn refresh(&self) -> Result<Option<Arc<User>>, AuthError> {
        match self.provider.current_raw_user().await? {
            Some(raw) => Ok(Some(self.publish(self.mapper.map_to_user(&raw)))),
            None => {
                self.clear();
                Ok(None)
            }
        }
    }

    /// Replace the avatar of whatever user is current at the time of the
    /// write. Read and replace happen under the channel lock, so a concurrent
    /// `refresh` is never overwritten by a stale copy.
    pub fn update_avatar(&self, avatar_url: &str) -> Result<Arc<User>, AuthError> {
        let mut updated = None;
        self.state.send_if_modified(|state| {
            let Some(signed_in) = state.as_mut() else {
                return false;
            };
            let user = Arc::new(User::clone(&signed_in.user).with_avatar(avatar_url));
            signed_in.user = user.clone();
            updated = Some(user);
            true
        });
        updated.ok_or(AuthError::NoSession)
    }

    fn publish(&self, user: User) -> Arc<User> {
        let user = Arc::new(user);
        self.state.send_replace(Some(SignedIn {
            user: user.clone(),
            since: Utc::now(),
        }));
        user
    }

    fn clear(&self) {
        self.state.send_replace(None);
    }
}
