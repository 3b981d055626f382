pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Persistence boundary. Every call is scoped by the owner of the profile;
/// rows of a profile owned by someone else behave as missing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepo: Send + Sync {
    async fn get_profiles(&self, owner_id: Uuid)
    -> anyhow::Result<Vec<models::puppy::PuppyProfile>>;

    async fn get_profile(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Option<models::puppy::PuppyProfile>>;

    async fn insert_profile(&self, profile: &models::puppy::PuppyProfile) -> anyhow::Result<i64>;

    /// Returns false when no profile matched
    async fn update_profile(&self, profile: &models::puppy::PuppyProfile) -> anyhow::Result<bool>;

    async fn delete_profile(&self, profile_id: i64, owner_id: Uuid) -> anyhow::Result<bool>;

    async fn get_foods(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::food::FoodAnalysis>>;

    /// Inserts a food setting; a default food clears the previous default of
    /// its type in the same transaction.
    async fn insert_food(
        &self,
        owner_id: Uuid,
        food: &models::food::FoodAnalysis,
    ) -> anyhow::Result<Option<i64>>;

    async fn set_default_food(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        food_id: i64,
    ) -> anyhow::Result<bool>;

    async fn delete_food(&self, profile_id: i64, owner_id: Uuid, food_id: i64)
    -> anyhow::Result<bool>;

    async fn get_schedule(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::schedule::HealthScheduleEntry>>;

    /// Writes `entries` as the whole schedule of the profile in one
    /// transaction. Entries with a non zero id keep it.
    async fn replace_schedule(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        entries: Vec<models::schedule::HealthScheduleEntry>,
    ) -> anyhow::Result<bool>;

    async fn administer_entry(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        entry_id: i64,
        administration: &models::schedule::Administration,
    ) -> anyhow::Result<bool>;

    async fn get_weights(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::puppy::WeightEntry>>;

    async fn insert_weight(
        &self,
        owner_id: Uuid,
        entry: &models::puppy::WeightEntry,
    ) -> anyhow::Result<Option<i64>>;

    async fn delete_weight(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        entry_id: i64,
    ) -> anyhow::Result<bool>;

    async fn get_vitals(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::puppy::VitalsEntry>>;

    async fn insert_vitals(
        &self,
        owner_id: Uuid,
        entry: &models::puppy::VitalsEntry,
    ) -> anyhow::Result<Option<i64>>;

    async fn get_feedings(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::puppy::FeedingEntry>>;

    /// Feedings with `start <= fed_at < end`
    async fn get_feedings_between(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<models::puppy::FeedingEntry>>;

    async fn insert_feeding(
        &self,
        owner_id: Uuid,
        entry: &models::puppy::FeedingEntry,
    ) -> anyhow::Result<Option<i64>>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
