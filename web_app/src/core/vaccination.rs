//! Puppy series schedule.
//!
//! The series is a fixed table of `(week, vaccine, description)` rows; a
//! schedule for a profile is that table anchored to the birth date.

use crate::models::schedule::HealthScheduleEntry;
use chrono::{Days, NaiveDate};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum VaccineType {
    #[default]
    #[display("DAPP_5")]
    #[serde(rename = "DAPP_5")]
    Dapp5,
    #[display("DAPP_6")]
    #[serde(rename = "DAPP_6")]
    Dapp6,
    #[display("DAPP_8")]
    #[serde(rename = "DAPP_8")]
    Dapp8,
    #[display("DAPP_9")]
    #[serde(rename = "DAPP_9")]
    Dapp9,
    #[display("Lepto")]
    Lepto,
    #[display("Bordetella")]
    Bordetella,
    #[display("Rabies")]
    Rabies,
    #[display("Deworming")]
    Deworming,
}

impl VaccineType {
    /// DAPP multi-way variants count as one logical series
    pub fn is_dapp(&self) -> bool {
        matches!(
            self,
            VaccineType::Dapp5 | VaccineType::Dapp6 | VaccineType::Dapp8 | VaccineType::Dapp9
        )
    }
}

pub struct SeriesRow {
    pub week: u32,
    pub vaccine_type: VaccineType,
    pub description: &'static str,
}

const fn row(week: u32, vaccine_type: VaccineType, description: &'static str) -> SeriesRow {
    SeriesRow {
        week,
        vaccine_type,
        description,
    }
}

pub const PUPPY_SERIES: &[SeriesRow] = &[
    row(2, VaccineType::Deworming, "First deworming (pyrantel)"),
    row(4, VaccineType::Deworming, "Second deworming"),
    row(6, VaccineType::Dapp5, "DAPP 5-way, first dose"),
    row(6, VaccineType::Deworming, "Third deworming"),
    row(8, VaccineType::Bordetella, "Bordetella (kennel cough)"),
    row(8, VaccineType::Deworming, "Fourth deworming"),
    row(9, VaccineType::Dapp6, "DAPP 6-way, second dose"),
    row(12, VaccineType::Dapp8, "DAPP 8-way, third dose"),
    row(12, VaccineType::Lepto, "Leptospirosis, first dose"),
    row(12, VaccineType::Deworming, "Fifth deworming"),
    row(16, VaccineType::Dapp9, "DAPP 9-way, final puppy dose"),
    row(16, VaccineType::Lepto, "Leptospirosis, second dose"),
    row(16, VaccineType::Rabies, "Rabies"),
];

/// Anchors the puppy series to `birth_date`. Every entry starts not
/// administered; rows whose due date would overflow the calendar are skipped.
pub fn generate_schedule(profile_id: i64, birth_date: NaiveDate) -> Vec<HealthScheduleEntry> {
    PUPPY_SERIES
        .iter()
        .filter_map(|row| {
            let due_date = birth_date.checked_add_days(Days::new(u64::from(row.week) * 7))?;

            Some(HealthScheduleEntry {
                id: 0,
                profile_id,
                vaccine_type: row.vaccine_type,
                week_number: row.week,
                due_date,
                description: row.description.to_string(),
                administered: false,
                administered_date: None,
                administrator: None,
                lot_number: None,
                notes: None,
            })
        })
        .collect()
}

/// Merges a freshly generated schedule with the stored one.
///
/// Stored entries sharing a `(vaccine_type, week_number)` slot with a
/// generated entry hand over their id and administration fields. Stored
/// administered entries without a slot in the new schedule are kept as they
/// are; stored entries that were never administered and lost their slot are
/// dropped.
pub fn merge_schedule(
    generated: Vec<HealthScheduleEntry>,
    existing: Vec<HealthScheduleEntry>,
) -> Vec<HealthScheduleEntry> {
    let mut existing_by_slot = existing
        .into_iter()
        .map(|entry| (entry.slot(), entry))
        .collect::<HashMap<_, _>>();

    let mut merged = generated
        .into_iter()
        .map(|entry| match existing_by_slot.remove(&entry.slot()) {
            Some(stored) => HealthScheduleEntry {
                id: stored.id,
                administered: stored.administered,
                administered_date: stored.administered_date,
                administrator: stored.administrator,
                lot_number: stored.lot_number,
                notes: stored.notes,
                ..entry
            },
            None => entry,
        })
        .collect::<Vec<_>>();

    merged.extend(
        existing_by_slot
            .into_values()
            .filter(|entry| entry.administered),
    );
    merged.sort_by_key(|e| (e.due_date, e.week_number, e.vaccine_type.to_string()));

    merged
}
