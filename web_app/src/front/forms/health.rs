use super::{optional_text, percentage, required_text};
use crate::{consts, front::errors::UserError, models};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct FoodForm {
    pub brand_name: String,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub moisture: f64,
    pub ash: f64,
    #[serde(default)]
    pub food_type: models::food::FoodType,
    #[serde(default)]
    pub is_default: bool,
}

impl FoodForm {
    pub fn into_food(self, profile_id: i64) -> Result<models::food::FoodAnalysis, UserError> {
        let analysis = models::food::GuaranteedAnalysis {
            protein: percentage("protein", self.protein)?,
            fat: percentage("fat", self.fat)?,
            fiber: percentage("fiber", self.fiber)?,
            moisture: percentage("moisture", self.moisture)?,
            ash: percentage("ash", self.ash)?,
        };
        if analysis.total() > 100.0 {
            return Err(UserError::FormInputValueError(
                "guaranteed analysis adds up to more than 100%".into(),
            ));
        }

        Ok(models::food::FoodAnalysis {
            id: 0,
            profile_id,
            brand_name: required_text("brand name", &self.brand_name, consts::MAX_NAME_LEN)?,
            analysis,
            food_type: self.food_type,
            is_default: self.is_default,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct AdministrationForm {
    pub administered_date: NaiveDate,
    #[serde(default)]
    pub administrator: Option<String>,
    #[serde(default)]
    pub lot_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AdministrationForm {
    pub fn into_administration(
        self,
        today: NaiveDate,
    ) -> Result<models::schedule::Administration, UserError> {
        if self.administered_date > today {
            return Err(UserError::FormInputValueError(
                "administered date cannot be in the future".into(),
            ));
        }

        Ok(models::schedule::Administration {
            administered_date: self.administered_date,
            administrator: optional_text("administrator", self.administrator)?,
            lot_number: optional_text("lot number", self.lot_number)?,
            notes: optional_text("notes", self.notes)?,
        })
    }
}
