use crate::core::vaccination::VaccineType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the health schedule. Created in bulk from the puppy series
/// table; afterwards only the administration fields change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HealthScheduleEntry {
    pub id: i64,
    pub profile_id: i64,
    pub vaccine_type: VaccineType,
    pub week_number: u32,
    pub due_date: NaiveDate,
    pub description: String,
    pub administered: bool,
    pub administered_date: Option<NaiveDate>,
    pub administrator: Option<String>,
    pub lot_number: Option<String>,
    pub notes: Option<String>,
}

impl HealthScheduleEntry {
    /// Key used to match a regenerated entry with a stored one
    pub fn slot(&self) -> (VaccineType, u32) {
        (self.vaccine_type, self.week_number)
    }
}

/// Administration details recorded against a schedule entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Administration {
    pub administered_date: NaiveDate,
    pub administrator: Option<String>,
    pub lot_number: Option<String>,
    pub notes: Option<String>,
}
