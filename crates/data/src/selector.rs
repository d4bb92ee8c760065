use crm_core::Profile;

use crate::records::{DashboardStats, Lead, Meeting, Task};
use crate::source::{DatasetProfile, ProfileDataSource};

/// Dataset that serves `profile`.
///
/// NEOIN has no dataset of its own yet and reads SALT's.
pub fn dataset_for(profile: Profile) -> DatasetProfile {
    match profile {
        Profile::Salt | Profile::Neoin => DatasetProfile::Salt,
        Profile::Ghf => DatasetProfile::Ghf,
    }
}

/// Routes profile-scoped queries to the underlying data source.
#[derive(Debug, Clone)]
pub struct ProfileScopedData<S> {
    source: S,
}

impl<S: ProfileDataSource> ProfileScopedData<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn get_leads_by_profile(&self, profile: Profile) -> Vec<Lead> {
        self.source.leads(dataset_for(profile))
    }

    pub fn get_tasks_by_profile(&self, profile: Profile) -> Vec<Task> {
        self.source.tasks(dataset_for(profile))
    }

    pub fn get_meetings_by_profile(&self, profile: Profile) -> Vec<Meeting> {
        self.source.meetings(dataset_for(profile))
    }

    pub fn get_stats_by_profile(&self, profile: Profile) -> DashboardStats {
        self.source.stats(dataset_for(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryProfileDataSource;

    #[test]
    fn neoin_reads_salt_dataset() {
        assert_eq!(dataset_for(Profile::Neoin), DatasetProfile::Salt);
        assert_eq!(dataset_for(Profile::Salt), DatasetProfile::Salt);
        assert_eq!(dataset_for(Profile::Ghf), DatasetProfile::Ghf);
    }

    #[test]
    fn neoin_queries_match_salt_queries() {
        let data = ProfileScopedData::new(InMemoryProfileDataSource::seeded());

        assert_eq!(
            data.get_leads_by_profile(Profile::Neoin),
            data.get_leads_by_profile(Profile::Salt)
        );
        assert_eq!(
            data.get_tasks_by_profile(Profile::Neoin),
            data.get_tasks_by_profile(Profile::Salt)
        );
        assert_eq!(
            data.get_meetings_by_profile(Profile::Neoin),
            data.get_meetings_by_profile(Profile::Salt)
        );
        assert_eq!(
            data.get_stats_by_profile(Profile::Neoin),
            data.get_stats_by_profile(Profile::Salt)
        );
    }

    #[test]
    fn ghf_has_its_own_dataset() {
        let data = ProfileScopedData::new(InMemoryProfileDataSource::seeded());
        let salt = data.get_leads_by_profile(Profile::Salt);
        let ghf = data.get_leads_by_profile(Profile::Ghf);
        assert!(!ghf.is_empty());
        assert_ne!(salt, ghf);
    }
}
