use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum FoodType {
    #[default]
    #[display("food")]
    #[serde(alias = "food", rename(serialize = "food"))]
    Food,
    #[display("treat")]
    #[serde(alias = "treat", rename(serialize = "treat"))]
    Treat,
}

/// Guaranteed analysis percentages as printed on the label
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
pub struct GuaranteedAnalysis {
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub moisture: f64,
    pub ash: f64,
}

impl GuaranteedAnalysis {
    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.fiber + self.moisture + self.ash
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FoodAnalysis {
    pub id: i64,
    pub profile_id: i64,
    pub brand_name: String,
    pub analysis: GuaranteedAnalysis,
    pub food_type: FoodType,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}
