//! In-memory collaborators for tests/dev.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crm_core::CollaboratorError;

use crate::gate::AuthorizationRpc;
use crate::session::AuthProvider;
use crate::PermissionCode;

/// Authorization backend answering from a fixed grant set.
///
/// Counts calls so tests can assert the gate skipped the backend.
#[derive(Debug, Default)]
pub struct InMemoryAuthorizationRpc {
    granted: HashSet<String>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl InMemoryAuthorizationRpc {
    pub fn granting(codes: &[&str]) -> Self {
        Self {
            granted: codes.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Backend whose every call fails with a transport error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorizationRpc for InMemoryAuthorizationRpc {
    async fn check_permission(&self, code: &PermissionCode) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(CollaboratorError::transport(reason.clone())),
            None => Ok(self.granted.contains(code.as_str())),
        }
    }
}

#[derive(Debug, Clone)]
struct Account<R> {
    password: String,
    raw: R,
}

/// Auth provider holding accounts keyed by email.
#[derive(Debug)]
pub struct InMemoryAuthProvider<R> {
    accounts: HashMap<String, Account<R>>,
    current: Mutex<Option<R>>,
    unavailable: AtomicBool,
}

impl<R> Default for InMemoryAuthProvider<R> {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            current: Mutex::new(None),
            unavailable: AtomicBool::new(false),
        }
    }
}

impl<R: Clone> InMemoryAuthProvider<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, email: &str, password: &str, raw: R) -> Self {
        self.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                raw,
            },
        );
        self
    }

    /// Pretend a session already exists (e.g. restored from storage).
    pub fn with_current(self, raw: R) -> Self {
        Self {
            current: Mutex::new(Some(raw)),
            ..self
        }
    }

    /// Toggle simulated network failure for every call.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Replace the raw record of the current session (e.g. profile edited
    /// elsewhere); picked up by the next refresh.
    pub fn replace_current(&self, raw: R) {
        if let Ok(mut current) = self.current.lock() {
            *current = Some(raw);
        }
    }

    fn ensure_available(&self) -> Result<(), CollaboratorError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CollaboratorError::transport("auth provider unavailable"));
        }
        Ok(())
    }

    fn lock_current(&self) -> Result<std::sync::MutexGuard<'_, Option<R>>, CollaboratorError> {
        self.current
            .lock()
            .map_err(|_| CollaboratorError::transport("session state poisoned"))
    }
}

#[async_trait]
impl<R> AuthProvider for InMemoryAuthProvider<R>
where
    R: Clone + Send + Sync + 'static,
{
    type Raw = R;

    async fn login(&self, email: &str, password: &str) -> Result<(), CollaboratorError> {
        self.ensure_available()?;
        let account = self
            .accounts
            .get(email)
            .filter(|a| a.password == password)
            .ok_or_else(|| CollaboratorError::rejected("invalid login credentials"))?;
        *self.lock_current()? = Some(account.raw.clone());
        Ok(())
    }

    async fn logout(&self) -> Result<(), CollaboratorError> {
        self.ensure_available()?;
        *self.lock_current()? = None;
        Ok(())
    }

    async fn current_raw_user(&self) -> Result<Option<R>, CollaboratorError> {
        self.ensure_available()?;
        Ok(self.lock_current()?.clone())
    }
}
