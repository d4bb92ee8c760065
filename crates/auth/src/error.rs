use thiserror::Error;

use crm_core::CollaboratorError;

/// Failures surfaced by session operations (login, logout, refresh).
///
/// These are the only auth failures callers see; mapping and permission
/// checks never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no active session")]
    NoSession,

    #[error("auth provider error: {0}")]
    Provider(CollaboratorError),
}

impl From<CollaboratorError> for AuthError {
    fn from(err: CollaboratorError) -> Self {
        match err {
            CollaboratorError::Rejected(_) => AuthError::InvalidCredentials,
            other => AuthError::Provider(other),
        }
    }
}
