use super::{optional_text, required_text};
use crate::{consts, front::errors::UserError, models};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct ProfileForm {
    pub name: String,
    pub birth_date: NaiveDate,
    pub breed: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub microchip_id: Option<String>,
    #[serde(default)]
    pub breeder_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ProfileForm {
    /// Builds the profile to store. `today` is the owner's local date; a
    /// birth date after it is rejected.
    pub fn into_profile(
        self,
        id: i64,
        owner_id: Uuid,
        today: NaiveDate,
    ) -> Result<models::puppy::PuppyProfile, UserError> {
        if self.birth_date > today {
            return Err(UserError::FormInputValueError(
                "birth date cannot be in the future".into(),
            ));
        }

        let now = Utc::now();
        Ok(models::puppy::PuppyProfile {
            id,
            owner_id,
            name: required_text("name", &self.name, consts::MAX_NAME_LEN)?,
            birth_date: self.birth_date,
            breed: required_text("breed", &self.breed, consts::MAX_NAME_LEN)?,
            color: optional_text("color", self.color)?,
            microchip_id: optional_text("microchip id", self.microchip_id)?,
            breeder_name: optional_text("breeder name", self.breeder_name)?,
            notes: optional_text("notes", self.notes)?,
            created_at: now,
            updated_at: now,
        })
    }
}
