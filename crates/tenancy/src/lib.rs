//! `crm-tenancy`: resolves which tenant an organization belongs to.
//!
//! Resolution is a two-tier lookup: a process-wide static table first, then
//! the remote organization store. Remote failures never reach callers; they
//! fall back to the default tenant.

pub mod in_memory;
pub mod lookup;
pub mod resolver;
pub mod store;
pub mod table;

pub use in_memory::InMemoryOrganizationStore;
pub use lookup::{TenantLookup, TwoTierLookup, tenant_for_code};
pub use resolver::TenantResolver;
pub use store::OrganizationStore;
pub use table::{StaticTenantTable, TableError};
