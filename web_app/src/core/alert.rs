//! Alert buckets for health schedule entries.

use crate::models::schedule::HealthScheduleEntry;
use chrono::NaiveDate;
use derive_more::Display;
use serde::Serialize;

/// Days ahead of the due date during which an entry counts as due soon
pub const DUE_SOON_DAYS: i64 = 7;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    #[display("completed")]
    Completed,
    #[display("overdue")]
    Overdue,
    #[display("due_now")]
    DueNow,
    #[display("due_soon")]
    DueSoon,
    #[display("upcoming")]
    Upcoming,
}

pub fn alert_status(due_date: NaiveDate, administered: bool, today: NaiveDate) -> AlertStatus {
    if administered {
        return AlertStatus::Completed;
    }

    match (due_date - today).num_days() {
        days if days < 0 => AlertStatus::Overdue,
        0 => AlertStatus::DueNow,
        days if days <= DUE_SOON_DAYS => AlertStatus::DueSoon,
        _ => AlertStatus::Upcoming,
    }
}

/// Entry counts per alert bucket, for dashboard headers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlertSummary {
    pub completed: usize,
    pub overdue: usize,
    pub due_now: usize,
    pub due_soon: usize,
    pub upcoming: usize,
}

pub fn summarize(entries: &[HealthScheduleEntry], today: NaiveDate) -> AlertSummary {
    entries
        .iter()
        .fold(AlertSummary::default(), |mut summary, entry| {
            match alert_status(entry.due_date, entry.administered, today) {
                AlertStatus::Completed => summary.completed += 1,
                AlertStatus::Overdue => summary.overdue += 1,
                AlertStatus::DueNow => summary.due_now += 1,
                AlertStatus::DueSoon => summary.due_soon += 1,
                AlertStatus::Upcoming => summary.upcoming += 1,
            }
            summary
        })
}
