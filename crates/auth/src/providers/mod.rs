//! Adapters for the supported identity providers.
//!
//! Every adapter delegates profile/tenant/organization derivation to
//! [`crate::classify::classify_email`] and only differs in how it reads the
//! provider's raw record.

pub mod directory;
pub mod federated;
pub mod hosted;

pub use directory::{DirectoryMapper, DirectoryUser};
pub use federated::{FederatedMapper, FederatedUser};
pub use hosted::{HostedMapper, HostedUser};
