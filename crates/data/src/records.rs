//! CRM records shown on profile-scoped screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crm_core::{LeadId, MeetingId, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Won,
    Lost,
}

impl LeadStatus {
    /// Still in the pipeline (neither won nor lost).
    pub fn is_open(&self) -> bool {
        !matches!(self, LeadStatus::Won | LeadStatus::Lost)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: LeadStatus,
    /// Estimated deal value in cents.
    pub value_cents: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub due_at: DateTime<Utc>,
    pub priority: TaskPriority,
    pub completed: bool,
    pub lead_id: Option<LeadId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub attendees: Vec<String>,
    pub lead_id: Option<LeadId>,
}

/// Dashboard counters for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: usize,
    pub won_leads: usize,
    pub open_tasks: usize,
    pub scheduled_meetings: usize,
    /// Sum of `value_cents` over open leads.
    pub pipeline_value_cents: i64,
}

impl DashboardStats {
    pub fn from_records(leads: &[Lead], tasks: &[Task], meetings: &[Meeting]) -> Self {
        Self {
            total_leads: leads.len(),
            won_leads: leads.iter().filter(|l| l.status == LeadStatus::Won).count(),
            open_tasks: tasks.iter().filter(|t| !t.completed).count(),
            scheduled_meetings: meetings.len(),
            pipeline_value_cents: leads
                .iter()
                .filter(|l| l.status.is_open())
                .map(|l| l.value_cents)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(status: LeadStatus, value_cents: i64) -> Lead {
        Lead {
            id: LeadId::new(),
            name: "Lead".to_string(),
            company: "Co".to_string(),
            email: "lead@example.com".to_string(),
            phone: None,
            status,
            value_cents,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn stats_count_open_pipeline_only() {
        let leads = vec![
            lead(LeadStatus::New, 1_000),
            lead(LeadStatus::Proposal, 2_500),
            lead(LeadStatus::Won, 9_000),
            lead(LeadStatus::Lost, 7_000),
        ];
        let tasks = vec![
            Task {
                id: TaskId::new(),
                title: "Call".to_string(),
                due_at: Utc::now(),
                priority: TaskPriority::High,
                completed: false,
                lead_id: None,
            },
            Task {
                id: TaskId::new(),
                title: "Email".to_string(),
                due_at: Utc::now(),
                priority: TaskPriority::Low,
                completed: true,
                lead_id: None,
            },
        ];

        let stats = DashboardStats::from_records(&leads, &tasks, &[]);
        assert_eq!(stats.total_leads, 4);
        assert_eq!(stats.won_leads, 1);
        assert_eq!(stats.open_tasks, 1);
        assert_eq!(stats.scheduled_meetings, 0);
        assert_eq!(stats.pipeline_value_cents, 3_500);
    }

    #[test]
    fn stats_serialize_camel_case() {
        let json = serde_json::to_value(DashboardStats::default()).unwrap();
        assert_eq!(json["pipelineValueCents"], 0);
    }
}
