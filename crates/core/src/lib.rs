//! `crm-core`: identity and tenancy building blocks shared by every CRM crate.
//!
//! This crate contains **pure domain** primitives (no IO, no async).

pub mod error;
pub mod id;
pub mod organization;
pub mod policy;
pub mod profile;
pub mod role;
pub mod user;

pub use error::{CollaboratorError, DomainError};
pub use id::{LeadId, MeetingId, OrganizationId, TaskId, UserId};
pub use organization::{Organization, OrganizationCode};
pub use policy::{FailClosedDeny, FailOpenDefault};
pub use profile::{Profile, Tenant};
pub use role::Role;
pub use user::User;
