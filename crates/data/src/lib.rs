//! `crm-data`: profile-partitioned CRM records (leads, tasks, meetings,
//! dashboard stats) and the selector that routes profile-scoped queries.

pub mod in_memory;
pub mod records;
pub mod selector;
pub mod source;

pub use in_memory::InMemoryProfileDataSource;
pub use records::{DashboardStats, Lead, LeadStatus, Meeting, Task, TaskPriority};
pub use selector::{ProfileScopedData, dataset_for};
pub use source::{DatasetProfile, ProfileDataSource};
