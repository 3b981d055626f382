use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use super::{AppRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

/// Enums are stored as their display text; unknown text is a decode error
fn parse_enum_text<T: DeserializeOwned>(column: &str, text: String) -> sqlx::Result<T> {
    serde_json::from_value::<T>(serde_json::Value::String(text)).map_err(|e| {
        sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        }
    })
}

fn enum_from_column<T: DeserializeOwned>(row: &SqliteRow, column: &str) -> sqlx::Result<T> {
    parse_enum_text(column, row.try_get::<String, &str>(column)?)
}

impl FromRow<'_, SqliteRow> for models::puppy::PuppyProfile {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        let owner_id: uuid::fmt::Hyphenated = row.try_get("owner_id")?;

        Ok(Self {
            id: row.try_get("id")?,
            owner_id: owner_id.into(),
            name: row.try_get("name")?,
            birth_date: row.try_get("birth_date")?,
            breed: row.try_get("breed")?,
            color: row.try_get("color")?,
            microchip_id: row.try_get("microchip_id")?,
            breeder_name: row.try_get("breeder_name")?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::food::FoodAnalysis {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            profile_id: row.try_get("profile_id")?,
            brand_name: row.try_get("brand_name")?,
            analysis: models::food::GuaranteedAnalysis {
                protein: row.try_get("protein")?,
                fat: row.try_get("fat")?,
                fiber: row.try_get("fiber")?,
                moisture: row.try_get("moisture")?,
                ash: row.try_get("ash")?,
            },
            food_type: enum_from_column(row, "food_type")?,
            is_default: row.try_get("is_default")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::schedule::HealthScheduleEntry {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            profile_id: row.try_get("profile_id")?,
            vaccine_type: enum_from_column(row, "vaccine_type")?,
            week_number: row.try_get("week_number")?,
            due_date: row.try_get("due_date")?,
            description: row.try_get("description")?,
            administered: row.try_get("administered")?,
            administered_date: row.try_get("administered_date")?,
            administrator: row.try_get("administrator")?,
            lot_number: row.try_get("lot_number")?,
            notes: row.try_get("notes")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::puppy::WeightEntry {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            profile_id: row.try_get("profile_id")?,
            date: row.try_get("date")?,
            weight_grams: row.try_get("weight_grams")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::puppy::VitalsEntry {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        let gum_color = row
            .try_get::<Option<String>, &str>("gum_color")?
            .map(|color| parse_enum_text("gum_color", color))
            .transpose()?;

        Ok(Self {
            id: row.try_get("id")?,
            profile_id: row.try_get("profile_id")?,
            date: row.try_get("date")?,
            fecal_score: row.try_get("fecal_score")?,
            gum_color,
            crt_seconds: row.try_get("crt_seconds")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::puppy::FeedingEntry {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            profile_id: row.try_get("profile_id")?,
            fed_at: row.try_get("fed_at")?,
            meal_type: enum_from_column(row, "meal_type")?,
            amount_grams: row.try_get("amount_grams")?,
            food_brand_id: row.try_get("food_brand_id")?,
        })
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn get_profiles(
        &self,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::puppy::PuppyProfile>> {
        Ok(
            sqlx::query_as::<_, models::puppy::PuppyProfile>(sqlite_queries::QUERY_GET_PROFILES)
                .bind(owner_id.to_string())
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_profile(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Option<models::puppy::PuppyProfile>> {
        Ok(
            sqlx::query_as::<_, models::puppy::PuppyProfile>(sqlite_queries::QUERY_GET_PROFILE)
                .bind(profile_id)
                .bind(owner_id.to_string())
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_profile(&self, profile: &models::puppy::PuppyProfile) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PROFILE)
            .bind(profile.owner_id.to_string())
            .bind(&profile.name)
            .bind(profile.birth_date)
            .bind(&profile.breed)
            .bind(&profile.color)
            .bind(&profile.microchip_id)
            .bind(&profile.breeder_name)
            .bind(&profile.notes)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_profile(&self, profile: &models::puppy::PuppyProfile) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_PROFILE)
            .bind(profile.id)
            .bind(profile.owner_id.to_string())
            .bind(&profile.name)
            .bind(profile.birth_date)
            .bind(&profile.breed)
            .bind(&profile.color)
            .bind(&profile.microchip_id)
            .bind(&profile.breeder_name)
            .bind(&profile.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_profile(&self, profile_id: i64, owner_id: Uuid) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_PROFILE)
            .bind(profile_id)
            .bind(owner_id.to_string())
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_foods(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::food::FoodAnalysis>> {
        Ok(
            sqlx::query_as::<_, models::food::FoodAnalysis>(sqlite_queries::QUERY_GET_FOODS)
                .bind(profile_id)
                .bind(owner_id.to_string())
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn insert_food(
        &self,
        owner_id: Uuid,
        food: &models::food::FoodAnalysis,
    ) -> anyhow::Result<Option<i64>> {
        let mut transaction = self.db_pool.begin().await?;

        let is_owned = sqlx::query(sqlite_queries::QUERY_PROFILE_BELONGS_TO_OWNER)
            .bind(food.profile_id)
            .bind(owner_id.to_string())
            .fetch_optional(&mut *transaction)
            .await?
            .is_some();
        if !is_owned {
            return Ok(None);
        }

        if food.is_default {
            sqlx::query(sqlite_queries::QUERY_CLEAR_DEFAULT_FOOD)
                .bind(food.profile_id)
                .bind(food.food_type.to_string())
                .execute(&mut *transaction)
                .await?;
        }

        let food_id = sqlx::query_scalar::<_, i64>(sqlite_queries::QUERY_INSERT_FOOD)
            .bind(food.profile_id)
            .bind(&food.brand_name)
            .bind(food.analysis.protein)
            .bind(food.analysis.fat)
            .bind(food.analysis.fiber)
            .bind(food.analysis.moisture)
            .bind(food.analysis.ash)
            .bind(food.food_type.to_string())
            .bind(food.is_default)
            .bind(food.created_at)
            .fetch_one(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(Some(food_id))
    }

    async fn set_default_food(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        food_id: i64,
    ) -> anyhow::Result<bool> {
        let mut transaction = self.db_pool.begin().await?;

        let Some(food_type) =
            sqlx::query_scalar::<_, String>(sqlite_queries::QUERY_GET_OWNED_FOOD_TYPE)
                .bind(food_id)
                .bind(profile_id)
                .bind(owner_id.to_string())
                .fetch_optional(&mut *transaction)
                .await?
        else {
            return Ok(false);
        };

        sqlx::query(sqlite_queries::QUERY_CLEAR_DEFAULT_FOOD)
            .bind(profile_id)
            .bind(&food_type)
            .execute(&mut *transaction)
            .await?;

        sqlx::query(sqlite_queries::QUERY_SET_DEFAULT_FOOD)
            .bind(food_id)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(true)
    }

    async fn delete_food(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        food_id: i64,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_FOOD)
            .bind(profile_id)
            .bind(owner_id.to_string())
            .bind(food_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_schedule(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::schedule::HealthScheduleEntry>> {
        Ok(sqlx::query_as::<_, models::schedule::HealthScheduleEntry>(
            sqlite_queries::QUERY_GET_SCHEDULE,
        )
        .bind(profile_id)
        .bind(owner_id.to_string())
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn replace_schedule(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        entries: Vec<models::schedule::HealthScheduleEntry>,
    ) -> anyhow::Result<bool> {
        let mut transaction = self.db_pool.begin().await?;

        let is_owned = sqlx::query(sqlite_queries::QUERY_PROFILE_BELONGS_TO_OWNER)
            .bind(profile_id)
            .bind(owner_id.to_string())
            .fetch_optional(&mut *transaction)
            .await?
            .is_some();
        if !is_owned {
            return Ok(false);
        }

        sqlx::query(sqlite_queries::QUERY_DELETE_SCHEDULE)
            .bind(profile_id)
            .execute(&mut *transaction)
            .await?;

        for entry in &entries {
            sqlx::query(sqlite_queries::QUERY_INSERT_SCHEDULE_ENTRY)
                .bind((entry.id != 0).then_some(entry.id))
                .bind(profile_id)
                .bind(entry.vaccine_type.to_string())
                .bind(entry.week_number)
                .bind(entry.due_date)
                .bind(&entry.description)
                .bind(entry.administered)
                .bind(entry.administered_date)
                .bind(&entry.administrator)
                .bind(&entry.lot_number)
                .bind(&entry.notes)
                .execute(&mut *transaction)
                .await?;
        }

        transaction.commit().await?;

        Ok(true)
    }

    async fn administer_entry(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        entry_id: i64,
        administration: &models::schedule::Administration,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_ADMINISTER_ENTRY)
            .bind(profile_id)
            .bind(owner_id.to_string())
            .bind(entry_id)
            .bind(administration.administered_date)
            .bind(&administration.administrator)
            .bind(&administration.lot_number)
            .bind(&administration.notes)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_weights(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::puppy::WeightEntry>> {
        Ok(
            sqlx::query_as::<_, models::puppy::WeightEntry>(sqlite_queries::QUERY_GET_WEIGHTS)
                .bind(profile_id)
                .bind(owner_id.to_string())
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn insert_weight(
        &self,
        owner_id: Uuid,
        entry: &models::puppy::WeightEntry,
    ) -> anyhow::Result<Option<i64>> {
        Ok(
            sqlx::query_scalar::<_, i64>(sqlite_queries::QUERY_INSERT_WEIGHT)
                .bind(entry.profile_id)
                .bind(owner_id.to_string())
                .bind(entry.date)
                .bind(entry.weight_grams)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn delete_weight(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        entry_id: i64,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_WEIGHT)
            .bind(profile_id)
            .bind(owner_id.to_string())
            .bind(entry_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_vitals(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::puppy::VitalsEntry>> {
        Ok(
            sqlx::query_as::<_, models::puppy::VitalsEntry>(sqlite_queries::QUERY_GET_VITALS)
                .bind(profile_id)
                .bind(owner_id.to_string())
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn insert_vitals(
        &self,
        owner_id: Uuid,
        entry: &models::puppy::VitalsEntry,
    ) -> anyhow::Result<Option<i64>> {
        Ok(
            sqlx::query_scalar::<_, i64>(sqlite_queries::QUERY_INSERT_VITALS)
                .bind(entry.profile_id)
                .bind(owner_id.to_string())
                .bind(entry.date)
                .bind(entry.fecal_score)
                .bind(entry.gum_color.map(|color| color.to_string()))
                .bind(entry.crt_seconds)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_feedings(
        &self,
        profile_id: i64,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<models::puppy::FeedingEntry>> {
        Ok(
            sqlx::query_as::<_, models::puppy::FeedingEntry>(sqlite_queries::QUERY_GET_FEEDINGS)
                .bind(profile_id)
                .bind(owner_id.to_string())
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_feedings_between(
        &self,
        profile_id: i64,
        owner_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<models::puppy::FeedingEntry>> {
        Ok(sqlx::query_as::<_, models::puppy::FeedingEntry>(
            sqlite_queries::QUERY_GET_FEEDINGS_BETWEEN,
        )
        .bind(profile_id)
        .bind(owner_id.to_string())
        .bind(start)
        .bind(end)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn insert_feeding(
        &self,
        owner_id: Uuid,
        entry: &models::puppy::FeedingEntry,
    ) -> anyhow::Result<Option<i64>> {
        Ok(
            sqlx::query_scalar::<_, i64>(sqlite_queries::QUERY_INSERT_FEEDING)
                .bind(entry.profile_id)
                .bind(owner_id.to_string())
                .bind(entry.fed_at)
                .bind(entry.meal_type.to_string())
                .bind(entry.amount_grams)
                .bind(entry.food_brand_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::vaccination, models::food::FoodType};
    use chrono::{NaiveDate, TimeZone};
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    async fn test_repo() -> SqlxSqliteRepo {
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(
                SqliteConnectOptions::from_str("sqlite::memory:")
                    .unwrap()
                    .foreign_keys(true),
            )
            .await
            .unwrap();
        sqlx::raw_sql(include_str!("../../../migrations/0001_init.sql"))
            .execute(&db_pool)
            .await
            .unwrap();

        SqlxSqliteRepo { db_pool }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    async fn insert_profile(repo: &SqlxSqliteRepo, owner_id: Uuid) -> i64 {
        let now = Utc::now();
        repo.insert_profile(&models::puppy::PuppyProfile {
            owner_id,
            name: "Toby".into(),
            birth_date: date("2024-01-01"),
            breed: "Chihuahua".into(),
            created_at: now,
            updated_at: now,
            ..Default::default()
        })
        .await
        .unwrap()
    }

    fn food(
        profile_id: i64,
        brand_name: &str,
        food_type: FoodType,
        is_default: bool,
    ) -> models::food::FoodAnalysis {
        models::food::FoodAnalysis {
            profile_id,
            brand_name: brand_name.into(),
            analysis: models::food::GuaranteedAnalysis {
                protein: 28.0,
                fat: 15.0,
                fiber: 4.0,
                moisture: 10.0,
                ash: 7.0,
            },
            food_type,
            is_default,
            created_at: Utc::now(),
            ..Default::default()
        }
    }

    #[ntex::test]
    async fn test_profiles_are_scoped_by_owner() {
        let repo = test_repo().await;
        let (owner, stranger) = (Uuid::new_v4(), Uuid::new_v4());
        let profile_id = insert_profile(&repo, owner).await;

        let profile = repo.get_profile(profile_id, owner).await.unwrap().unwrap();
        assert_eq!(profile.name, "Toby");
        assert_eq!(profile.owner_id, owner);

        assert!(repo.get_profile(profile_id, stranger).await.unwrap().is_none());
        assert!(repo.get_profiles(stranger).await.unwrap().is_empty());
        assert!(!repo.delete_profile(profile_id, stranger).await.unwrap());
        assert!(
            repo.insert_weight(
                stranger,
                &models::puppy::WeightEntry {
                    profile_id,
                    date: date("2024-02-01"),
                    weight_grams: 450.0,
                    ..Default::default()
                }
            )
            .await
            .unwrap()
            .is_none()
        );
    }

    #[ntex::test]
    async fn test_single_default_food_per_type() {
        let repo = test_repo().await;
        let owner = Uuid::new_v4();
        let profile_id = insert_profile(&repo, owner).await;

        let first = repo
            .insert_food(owner, &food(profile_id, "Kibble A", FoodType::Food, true))
            .await
            .unwrap()
            .unwrap();
        let second = repo
            .insert_food(owner, &food(profile_id, "Kibble B", FoodType::Food, true))
            .await
            .unwrap()
            .unwrap();
        repo.insert_food(owner, &food(profile_id, "Chews", FoodType::Treat, true))
            .await
            .unwrap();

        let defaults = |foods: Vec<models::food::FoodAnalysis>| {
            foods
                .into_iter()
                .filter(|f| f.is_default)
                .map(|f| (f.food_type, f.id))
                .collect::<Vec<_>>()
        };

        let foods = repo.get_foods(profile_id, owner).await.unwrap();
        assert_eq!(foods.len(), 3);
        let current = defaults(foods);
        assert!(current.contains(&(FoodType::Food, second)));
        assert_eq!(current.len(), 2);

        assert!(repo.set_default_food(profile_id, owner, first).await.unwrap());
        let current = defaults(repo.get_foods(profile_id, owner).await.unwrap());
        assert!(current.contains(&(FoodType::Food, first)));
        assert!(!current.contains(&(FoodType::Food, second)));
        assert_eq!(current.len(), 2);

        assert!(!repo.set_default_food(profile_id, Uuid::new_v4(), second).await.unwrap());
    }

    #[ntex::test]
    async fn test_schedule_replace_keeps_ids_and_administration() {
        let repo = test_repo().await;
        let owner = Uuid::new_v4();
        let profile_id = insert_profile(&repo, owner).await;
        let birth_date = date("2024-01-01");

        let generated = vaccination::generate_schedule(profile_id, birth_date);
        assert!(repo.replace_schedule(profile_id, owner, generated).await.unwrap());

        let stored = repo.get_schedule(profile_id, owner).await.unwrap();
        assert_eq!(stored.len(), vaccination::PUPPY_SERIES.len());
        let rabies = stored
            .iter()
            .find(|e| e.vaccine_type == vaccination::VaccineType::Rabies)
            .unwrap();

        assert!(
            repo.administer_entry(
                profile_id,
                owner,
                rabies.id,
                &models::schedule::Administration {
                    administered_date: date("2024-04-25"),
                    administrator: Some("Dr. Vega".into()),
                    lot_number: Some("RB-001".into()),
                    notes: None,
                }
            )
            .await
            .unwrap()
        );

        let existing = repo.get_schedule(profile_id, owner).await.unwrap();
        let merged =
            vaccination::merge_schedule(vaccination::generate_schedule(profile_id, birth_date), existing);
        assert!(repo.replace_schedule(profile_id, owner, merged).await.unwrap());

        let stored = repo.get_schedule(profile_id, owner).await.unwrap();
        let kept = stored.iter().find(|e| e.id == rabies.id).unwrap();
        assert!(kept.administered);
        assert_eq!(kept.administered_date, Some(date("2024-04-25")));
        assert_eq!(kept.lot_number.as_deref(), Some("RB-001"));
        assert_eq!(stored.iter().filter(|e| e.administered).count(), 1);
    }

    #[ntex::test]
    async fn test_feedings_between_bounds_and_cascade() {
        let repo = test_repo().await;
        let owner = Uuid::new_v4();
        let profile_id = insert_profile(&repo, owner).await;
        let at = |h: u32, m: u32| Utc.with_ymd_and_hms(2024, 3, 10, h, m, 0).unwrap();

        for fed_at in [at(0, 0), at(12, 30), at(23, 59)] {
            repo.insert_feeding(
                owner,
                &models::puppy::FeedingEntry {
                    profile_id,
                    fed_at,
                    amount_grams: Some(30.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        }

        let feedings = repo
            .get_feedings_between(profile_id, owner, at(0, 0), at(23, 59))
            .await
            .unwrap();
        assert_eq!(
            feedings.iter().map(|f| f.fed_at).collect::<Vec<_>>(),
            vec![at(0, 0), at(12, 30)]
        );

        repo.insert_vitals(
            owner,
            &models::puppy::VitalsEntry {
                profile_id,
                date: date("2024-03-10"),
                fecal_score: Some(2),
                gum_color: Some(crate::core::vitals::GumColor::Pale),
                crt_seconds: Some(1.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let vitals = repo.get_vitals(profile_id, owner).await.unwrap();
        assert_eq!(vitals[0].gum_color, Some(crate::core::vitals::GumColor::Pale));
        assert_eq!(vitals[0].fecal_score, Some(2));

        assert!(repo.delete_profile(profile_id, owner).await.unwrap());
        assert!(repo.get_feedings(profile_id, owner).await.unwrap().is_empty());
        let orphans = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM feeding_log;")
            .fetch_one(&repo.db_pool)
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn test_unknown_enum_text_is_a_decode_error() {
        assert_eq!(
            parse_enum_text::<vaccination::VaccineType>("vaccine_type", "Lepto".into()).unwrap(),
            vaccination::VaccineType::Lepto
        );

        let err = parse_enum_text::<vaccination::VaccineType>("vaccine_type", "Lyme".into())
            .unwrap_err();
        assert!(matches!(err, sqlx::Error::ColumnDecode { ref index, .. } if index == "vaccine_type"));

        assert!(
            parse_enum_text::<crate::core::vitals::GumColor>("gum_color", "purple".into()).is_err()
        );
        assert!(parse_enum_text::<FoodType>("food_type", "".into()).is_err());
    }

    #[ntex::test]
    async fn test_schema_rejects_unknown_vaccine_type() {
        let repo = test_repo().await;
        let owner = Uuid::new_v4();
        let profile_id = insert_profile(&repo, owner).await;

        let result = sqlx::query(
            "INSERT INTO health_schedule (profile_id, vaccine_type, week_number, due_date, description, administered)
            VALUES ($1, 'Lyme', 0, '2024-03-01', 'Lyme', 1)",
        )
        .bind(profile_id)
        .execute(&repo.db_pool)
        .await;

        assert!(result.is_err());
        assert!(repo.get_schedule(profile_id, owner).await.unwrap().is_empty());
    }
}
