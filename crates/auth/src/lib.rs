//! `crm-auth`: turns provider identities into CRM users and gates actions on
//! permissions.
//!
//! This crate is intentionally decoupled from HTTP and storage: every remote
//! collaborator sits behind a trait.

pub mod classify;
pub mod error;
pub mod gate;
pub mod in_memory;
pub mod mapper;
pub mod permissions;
pub mod providers;
pub mod session;

pub use classify::{EmailClassification, classify_email};
pub use error::AuthError;
pub use gate::{AuthorizationRpc, PermissionGate};
pub use in_memory::{InMemoryAuthProvider, InMemoryAuthorizationRpc};
pub use mapper::IdentityMapper;
pub use permissions::PermissionCode;
pub use session::{AuthProvider, Session, SignedIn};
