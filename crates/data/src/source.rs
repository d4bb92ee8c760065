use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::records::{DashboardStats, Lead, Meeting, Task};

/// Profiles that own a dedicated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatasetProfile {
    Salt,
    Ghf,
}

impl core::fmt::Display for DatasetProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DatasetProfile::Salt => f.write_str("SALT"),
            DatasetProfile::Ghf => f.write_str("GHF"),
        }
    }
}

/// Per-dataset record accessors.
pub trait ProfileDataSource: Send + Sync {
    fn leads(&self, dataset: DatasetProfile) -> Vec<Lead>;
    fn tasks(&self, dataset: DatasetProfile) -> Vec<Task>;
    fn meetings(&self, dataset: DatasetProfile) -> Vec<Meeting>;
    fn stats(&self, dataset: DatasetProfile) -> DashboardStats;
}

impl<S> ProfileDataSource for Arc<S>
where
    S: ProfileDataSource + ?Sized,
{
    fn leads(&self, dataset: DatasetProfile) -> Vec<Lead> {
        (**self).leads(dataset)
    }

    fn tasks(&self, dataset: DatasetProfile) -> Vec<Task> {
        (**self).tasks(dataset)
    }

    fn meetings(&self, dataset: DatasetProfile) -> Vec<Meeting> {
        (**self).meetings(dataset)
    }

    fn stats(&self, dataset: DatasetProfile) -> DashboardStats {
        (**self).stats(dataset)
    }
}
