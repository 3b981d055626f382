//! Adult booster projection.
//!
//! Next-due dates are projected from the latest administered dose of each
//! booster vaccine. Vaccines never administered are left out; the puppy
//! series schedule covers those.

use super::{breed, life_stage, vaccination::VaccineType};
use crate::models::schedule::HealthScheduleEntry;
use chrono::{Months, NaiveDate};
use serde::Serialize;

const OVERDUE_AFTER_DAYS: i64 = -30;
const DUE_SOON_WITHIN_DAYS: i64 = 30;
const FIRST_BOOSTER_WINDOW_YEARS: f64 = 1.5;
const DAYS_PER_YEAR: f64 = 365.25;

const SENIOR_NOTE: &str = "Senior dogs may not need every booster on the standard interval. Ask your veterinarian about titer testing before revaccinating.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoosterVaccine {
    #[serde(rename = "DAPP")]
    Dapp,
    Rabies,
    Lepto,
    Bordetella,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoosterFrequency {
    Annual,
    /// one year after the last puppy dose, every three years after that
    TriennialAfterFirstBooster,
}

impl BoosterVaccine {
    pub const ALL: [BoosterVaccine; 4] = [
        BoosterVaccine::Dapp,
        BoosterVaccine::Rabies,
        BoosterVaccine::Lepto,
        BoosterVaccine::Bordetella,
    ];

    pub fn from_vaccine_type(vaccine_type: VaccineType) -> Option<Self> {
        match vaccine_type {
            VaccineType::Dapp5 | VaccineType::Dapp6 | VaccineType::Dapp8 | VaccineType::Dapp9 => {
                Some(BoosterVaccine::Dapp)
            }
            VaccineType::Rabies => Some(BoosterVaccine::Rabies),
            VaccineType::Lepto => Some(BoosterVaccine::Lepto),
            VaccineType::Bordetella => Some(BoosterVaccine::Bordetella),
            VaccineType::Deworming => None,
        }
    }

    pub fn is_core(&self) -> bool {
        matches!(self, BoosterVaccine::Dapp | BoosterVaccine::Rabies)
    }

    pub fn frequency(&self) -> BoosterFrequency {
        if self.is_core() {
            BoosterFrequency::TriennialAfterFirstBooster
        } else {
            BoosterFrequency::Annual
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoosterStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoosterScheduleEntry {
    pub vaccine: BoosterVaccine,
    pub is_core: bool,
    pub frequency: BoosterFrequency,
    pub last_administered: NaiveDate,
    pub next_due: NaiveDate,
    pub days_until_due: i64,
    pub status: BoosterStatus,
    pub priority: Priority,
    pub note: Option<&'static str>,
}

/// Latest administered date of `vaccine`, pooling the DAPP variants.
fn last_administered(history: &[HealthScheduleEntry], vaccine: BoosterVaccine) -> Option<NaiveDate> {
    history
        .iter()
        .filter(|e| e.administered)
        .filter(|e| BoosterVaccine::from_vaccine_type(e.vaccine_type) == Some(vaccine))
        .map(|e| e.administered_date.unwrap_or(e.due_date))
        .max()
}

fn next_due(vaccine: BoosterVaccine, last: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let years = match vaccine.frequency() {
        BoosterFrequency::Annual => 1,
        BoosterFrequency::TriennialAfterFirstBooster => {
            let elapsed_years = (today - last).num_days() as f64 / DAYS_PER_YEAR;
            if elapsed_years < FIRST_BOOSTER_WINDOW_YEARS {
                1
            } else {
                3
            }
        }
    };

    last.checked_add_months(Months::new(12 * years))
}

pub fn booster_status(days_until_due: i64) -> BoosterStatus {
    if days_until_due < OVERDUE_AFTER_DAYS {
        BoosterStatus::Overdue
    } else if days_until_due < DUE_SOON_WITHIN_DAYS {
        BoosterStatus::DueSoon
    } else {
        BoosterStatus::Upcoming
    }
}

fn priority(status: BoosterStatus, is_core: bool) -> Priority {
    match status {
        BoosterStatus::Overdue if is_core => Priority::High,
        BoosterStatus::Overdue | BoosterStatus::DueSoon => Priority::Medium,
        BoosterStatus::Upcoming => Priority::Low,
    }
}

/// Projects the next booster of every vaccine with at least one administered
/// dose in `history`, sorted by due date.
pub fn booster_schedule(
    history: &[HealthScheduleEntry],
    breed: &str,
    age_months: f64,
    today: NaiveDate,
) -> Vec<BoosterScheduleEntry> {
    let stage = life_stage::classify(breed::lifespan(breed), age_months);
    let note = stage.is_senior_or_older().then_some(SENIOR_NOTE);

    let mut boosters = BoosterVaccine::ALL
        .into_iter()
        .filter_map(|vaccine| {
            let last = last_administered(history, vaccine)?;
            let due = next_due(vaccine, last, today)?;
            let days_until_due = (due - today).num_days();
            let status = booster_status(days_until_due);

            Some(BoosterScheduleEntry {
                vaccine,
                is_core: vaccine.is_core(),
                frequency: vaccine.frequency(),
                last_administered: last,
                next_due: due,
                days_until_due,
                status,
                priority: priority(status, vaccine.is_core()),
                note,
            })
        })
        .collect::<Vec<_>>();

    boosters.sort_by_key(|b| b.next_due);
    boosters
}
