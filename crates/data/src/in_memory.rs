//! In-memory profile datasets for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crm_core::{LeadId, MeetingId, TaskId};

use crate::records::{DashboardStats, Lead, LeadStatus, Meeting, Task, TaskPriority};
use crate::source::{DatasetProfile, ProfileDataSource};

/// 2026-01-05T09:00:00Z; seed records are laid out relative to this.
const SEED_ANCHOR_SECS: i64 = 1_767_603_600;

#[derive(Debug, Clone, Default)]
struct Dataset {
    leads: Vec<Lead>,
    tasks: Vec<Task>,
    meetings: Vec<Meeting>,
}

/// Dataset-isolated record store.
#[derive(Debug, Default)]
pub struct InMemoryProfileDataSource {
    inner: RwLock<HashMap<DatasetProfile, Dataset>>,
}

impl InMemoryProfileDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo records for both datasets.
    pub fn seeded() -> Self {
        let source = Self::new();
        let anchor = DateTime::<Utc>::from_timestamp(SEED_ANCHOR_SECS, 0).unwrap_or_default();

        seed(&source, DatasetProfile::Salt, anchor, &[
            ("Marina Costa", "Costa Agro", LeadStatus::Qualified, 4_500_000),
            ("Paulo Lima", "Lima & Filhos", LeadStatus::New, 1_200_000),
            ("Renata Alves", "Alves Transportes", LeadStatus::Won, 8_000_000),
        ]);
        seed(&source, DatasetProfile::Ghf, anchor, &[
            ("Dr. Henrique Melo", "Clínica Melo", LeadStatus::Proposal, 12_000_000),
            ("Luciana Prado", "Hospital Santa Clara", LeadStatus::Contacted, 30_000_000),
        ]);

        source
    }

    pub fn insert_lead(&self, dataset: DatasetProfile, lead: Lead) {
        if let Ok(mut map) = self.inner.write() {
            map.entry(dataset).or_default().leads.push(lead);
        }
    }

    pub fn insert_task(&self, dataset: DatasetProfile, task: Task) {
        if let Ok(mut map) = self.inner.write() {
            map.entry(dataset).or_default().tasks.push(task);
        }
    }

    pub fn insert_meeting(&self, dataset: DatasetProfile, meeting: Meeting) {
        if let Ok(mut map) = self.inner.write() {
            map.entry(dataset).or_default().meetings.push(meeting);
        }
    }

    fn read<T>(&self, dataset: DatasetProfile, f: impl FnOnce(&Dataset) -> T) -> Option<T> {
        let map = self.inner.read().ok()?;
        map.get(&dataset).map(f)
    }
}

fn seed(
    source: &InMemoryProfileDataSource,
    dataset: DatasetProfile,
    anchor: DateTime<Utc>,
    leads: &[(&str, &str, LeadStatus, i64)],
) {
    for (day, (name, company, status, value_cents)) in (0i64..).zip(leads) {
        let lead_id = LeadId::new();
        let created_at = anchor - Duration::days(30 - day);
        let slug = name.to_lowercase().replace(['.', ' '], "");

        source.insert_lead(dataset, Lead {
            id: lead_id,
            name: name.to_string(),
            company: company.to_string(),
            email: format!("{slug}@example.com"),
            phone: None,
            status: *status,
            value_cents: *value_cents,
            created_at,
        });
        source.insert_task(dataset, Task {
            id: TaskId::new(),
            title: format!("Follow up with {name}"),
            due_at: anchor + Duration::days(day + 1),
            priority: if status.is_open() { TaskPriority::High } else { TaskPriority::Low },
            completed: !status.is_open(),
            lead_id: Some(lead_id),
        });
        source.insert_meeting(dataset, Meeting {
            id: MeetingId::new(),
            title: format!("Meeting with {company}"),
            starts_at: anchor + Duration::days(day) + Duration::hours(5),
            duration_minutes: 45,
            attendees: vec![name.to_string()],
            lead_id: Some(lead_id),
        });
    }
}

impl ProfileDataSource for InMemoryProfileDataSource {
    fn leads(&self, dataset: DatasetProfile) -> Vec<Lead> {
        self.read(dataset, |d| d.leads.clone()).unwrap_or_default()
    }

    fn tasks(&self, dataset: DatasetProfile) -> Vec<Task> {
        self.read(dataset, |d| d.tasks.clone()).unwrap_or_default()
    }

    fn meetings(&self, dataset: DatasetProfile) -> Vec<Meeting> {
        self.read(dataset, |d| d.meetings.clone()).unwrap_or_default()
    }

    fn stats(&self, dataset: DatasetProfile) -> DashboardStats {
        self.read(dataset, |d| {
            DashboardStats::from_records(&d.leads, &d.tasks, &d.meetings)
        })
        .unwrap_or_default()
    }
}
