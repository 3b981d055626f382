use super::positive;
use crate::{
    core::{units::WeightUnit, vitals},
    front::errors::UserError,
    models,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct WeightForm {
    pub date: NaiveDate,
    pub weight: f64,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl WeightForm {
    pub fn into_entry(self, profile_id: i64) -> Result<models::puppy::WeightEntry, UserError> {
        Ok(models::puppy::WeightEntry {
            id: 0,
            profile_id,
            date: self.date,
            weight_grams: self.unit.to_grams(positive("weight", self.weight)?),
        })
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct VitalsForm {
    pub date: NaiveDate,
    #[serde(default)]
    pub fecal_score: Option<u8>,
    #[serde(default)]
    pub gum_color: Option<vitals::GumColor>,
    #[serde(default)]
    pub crt_seconds: Option<f64>,
}

impl VitalsForm {
    pub fn into_entry(self, profile_id: i64) -> Result<models::puppy::VitalsEntry, UserError> {
        if self.fecal_score.is_none() && self.gum_color.is_none() && self.crt_seconds.is_none() {
            return Err(UserError::FormInputValueError(
                "at least one vital sign is required".into(),
            ));
        }

        if self
            .fecal_score
            .is_some_and(|score| !vitals::is_valid_fecal_score(score))
        {
            return Err(UserError::FormInputValueError(format!(
                "fecal score must be between {} and {}",
                vitals::FECAL_SCORE_RANGE.start(),
                vitals::FECAL_SCORE_RANGE.end()
            )));
        }

        if self
            .crt_seconds
            .is_some_and(|crt| !crt.is_finite() || crt < 0.0)
        {
            return Err(UserError::FormInputValueError(
                "capillary refill time cannot be negative".into(),
            ));
        }

        Ok(models::puppy::VitalsEntry {
            id: 0,
            profile_id,
            date: self.date,
            fecal_score: self.fecal_score,
            gum_color: self.gum_color,
            crt_seconds: self.crt_seconds,
        })
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct FeedingForm {
    /// Defaults to the moment the request is handled
    #[serde(default)]
    pub fed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub meal_type: models::puppy::MealType,
    #[serde(default)]
    pub amount_grams: Option<f64>,
    #[serde(default)]
    pub food_brand_id: Option<i64>,
}

impl FeedingForm {
    pub fn into_entry(
        self,
        profile_id: i64,
        now: DateTime<Utc>,
    ) -> Result<models::puppy::FeedingEntry, UserError> {
        let amount_grams = self
            .amount_grams
            .map(|grams| positive("amount", grams))
            .transpose()?;

        Ok(models::puppy::FeedingEntry {
            id: 0,
            profile_id,
            fed_at: self.fed_at.unwrap_or(now),
            meal_type: self.meal_type,
            amount_grams,
            food_brand_id: self.food_brand_id,
        })
    }
}
