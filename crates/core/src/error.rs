//! Domain and collaborator error model.

use thiserror::Error;

/// Domain-level error.
///
/// Only parsing and validation of domain tags produce these. Identity mapping,
/// tenant resolution and permission checks never fail; they degrade to defaults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an unknown profile tag).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Failure reported by a remote collaborator (organization store,
/// authorization RPC, auth provider).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The call did not complete (network, timeout, unavailable backend).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The collaborator answered but the requested record does not exist.
    #[error("not found")]
    NotFound,

    /// The collaborator refused the request.
    #[error("rejected: {0}")]
    Rejected(String),
}

impl CollaboratorError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}
