use crate::core::vitals::GumColor;
use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PuppyProfile {
    pub id: i64,
    pub owner_id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub breed: String,
    pub color: Option<String>,
    pub microchip_id: Option<String>,
    pub breeder_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct WeightEntry {
    pub id: i64,
    pub profile_id: i64,
    pub date: NaiveDate,
    pub weight_grams: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct VitalsEntry {
    pub id: i64,
    pub profile_id: i64,
    pub date: NaiveDate,
    pub fecal_score: Option<u8>,
    pub gum_color: Option<GumColor>,
    pub crt_seconds: Option<f64>,
}

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum MealType {
    #[default]
    #[display("regular")]
    #[serde(alias = "regular", rename(serialize = "regular"))]
    Regular,
    #[display("snack")]
    #[serde(alias = "snack", rename(serialize = "snack"))]
    Snack,
    #[display("treat")]
    #[serde(alias = "treat", rename(serialize = "treat"))]
    Treat,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FeedingEntry {
    pub id: i64,
    pub profile_id: i64,
    pub fed_at: DateTime<Utc>,
    pub meal_type: MealType,
    pub amount_grams: Option<f64>,
    pub food_brand_id: Option<i64>,
}

/// Most recent weight by date; later ids win ties on the same day.
pub fn current_weight(entries: &[WeightEntry]) -> Option<&WeightEntry> {
    entries.iter().max_by_key(|e| (e.date, e.id))
}
