//! Append-only logs: weight, vitals and feedings.

use super::insights;
use crate::{core::vitals, metric, models, repo, utils};
use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use uuid::Uuid;

pub async fn get_weights(
    profile_id: i64,
    owner_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::puppy::WeightEntry>> {
    let _span = logfire::span!("get_weights").entered();

    repo.get_weights(profile_id, owner_id).await
}

pub async fn add_weight(
    owner_id: Uuid,
    entry: models::puppy::WeightEntry,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<i64>> {
    let _span = logfire::span!("add_weight").entered();

    let entry_id = repo.insert_weight(owner_id, &entry).await?;
    if entry_id.is_some() {
        metric::incr_user_action_statds(metric::UserAction::WeightLogged);
    }

    Ok(entry_id)
}

pub async fn delete_weight(
    profile_id: i64,
    owner_id: Uuid,
    entry_id: i64,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<bool> {
    let _span = logfire::span!("delete_weight").entered();

    repo.delete_weight(profile_id, owner_id, entry_id).await
}

#[derive(Debug, Clone, Serialize)]
pub struct VitalsView {
    #[serde(flatten)]
    pub entry: models::puppy::VitalsEntry,
    pub concerns: Vec<vitals::VitalsConcern>,
}

impl From<models::puppy::VitalsEntry> for VitalsView {
    fn from(entry: models::puppy::VitalsEntry) -> Self {
        Self {
            concerns: vitals::assess(entry.fecal_score, entry.gum_color, entry.crt_seconds),
            entry,
        }
    }
}

pub async fn get_vitals(
    profile_id: i64,
    owner_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<VitalsView>> {
    let _span = logfire::span!("get_vitals").entered();

    Ok(repo
        .get_vitals(profile_id, owner_id)
        .await?
        .into_iter()
        .map(VitalsView::from)
        .collect())
}

/// Stores a vitals entry and returns it with its advisory concerns
pub async fn add_vitals(
    owner_id: Uuid,
    entry: models::puppy::VitalsEntry,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<VitalsView>> {
    let _span = logfire::span!("add_vitals").entered();

    let Some(id) = repo.insert_vitals(owner_id, &entry).await? else {
        return Ok(None);
    };
    metric::incr_user_action_statds(metric::UserAction::VitalsLogged);

    Ok(Some(models::puppy::VitalsEntry { id, ..entry }.into()))
}

pub async fn get_feedings(
    profile_id: i64,
    owner_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::puppy::FeedingEntry>> {
    let _span = logfire::span!("get_feedings").entered();

    repo.get_feedings(profile_id, owner_id).await
}

#[derive(Debug, PartialEq)]
pub enum NewFeeding {
    Created(i64),
    ProfileNotFound,
    /// `food_brand_id` is not one of the profile's food settings
    UnknownFood(i64),
}

pub async fn add_feeding(
    owner_id: Uuid,
    entry: models::puppy::FeedingEntry,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<NewFeeding> {
    let _span = logfire::span!("add_feeding").entered();

    if let Some(food_id) = entry.food_brand_id {
        let foods = repo.get_foods(entry.profile_id, owner_id).await?;
        if !foods.iter().any(|f| f.id == food_id) {
            tracing::warn!(
                profile_id = entry.profile_id,
                food_id,
                "feeding references a food of another profile"
            );
            return Ok(NewFeeding::UnknownFood(food_id));
        }
    }

    match repo.insert_feeding(owner_id, &entry).await? {
        Some(id) => {
            metric::incr_user_action_statds(metric::UserAction::FeedingLogged);
            Ok(NewFeeding::Created(id))
        }
        None => Ok(NewFeeding::ProfileNotFound),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TodayFeedings {
    pub date: NaiveDate,
    pub timezone: String,
    pub entries: Vec<models::puppy::FeedingEntry>,
    /// Grams of regular meals and snacks
    pub food_grams: f64,
    pub treat_grams: f64,
    pub daily_target_grams: Option<f64>,
    pub remaining_grams: Option<f64>,
    pub meals_per_day: Option<u32>,
}

pub fn summarize_feedings(
    date: NaiveDate,
    tz: Tz,
    entries: Vec<models::puppy::FeedingEntry>,
    plan: &insights::NutritionPlan,
) -> TodayFeedings {
    let (treats, meals): (Vec<_>, Vec<_>) = entries
        .iter()
        .partition(|e| e.meal_type == models::puppy::MealType::Treat);
    let grams = |feedings: Vec<&models::puppy::FeedingEntry>| {
        feedings.iter().filter_map(|e| e.amount_grams).sum::<f64>()
    };
    let food_grams = grams(meals);
    let daily_target_grams = plan.result.as_ref().map(|r| r.daily_grams);

    TodayFeedings {
        date,
        timezone: tz.name().to_string(),
        food_grams,
        treat_grams: grams(treats),
        remaining_grams: daily_target_grams.map(|target| (target - food_grams).max(0.0)),
        daily_target_grams,
        meals_per_day: plan.result.as_ref().map(|r| r.meals_per_day),
        entries,
    }
}

/// Feedings of the current calendar day in `tz`, against the daily target
/// of the nutrition plan.
pub async fn todays_feedings(
    profile_id: i64,
    owner_id: Uuid,
    now: DateTime<Utc>,
    tz: Tz,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<TodayFeedings>> {
    let _span = logfire::span!("todays_feedings").entered();

    let today = utils::local_today(now, tz);
    let (start, end) = utils::local_day_bounds(today, tz)
        .with_context(|| format!("no day bounds for {today} in {}", tz.name()))?;

    let Some(profile) = repo.get_profile(profile_id, owner_id).await? else {
        return Ok(None);
    };
    let entries = repo
        .get_feedings_between(profile_id, owner_id, start, end)
        .await?;
    let foods = repo.get_foods(profile_id, owner_id).await?;
    let weights = repo.get_weights(profile_id, owner_id).await?;
    let plan = insights::build_nutrition_plan(&profile, foods, &weights, today);

    Ok(Some(summarize_feedings(today, tz, entries, &plan)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use chrono::TimeZone;
    use mockall::predicate::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn feeding(meal_type: models::puppy::MealType, grams: Option<f64>) -> models::puppy::FeedingEntry {
        models::puppy::FeedingEntry {
            profile_id: 1,
            meal_type,
            amount_grams: grams,
            ..Default::default()
        }
    }

    #[ntex::test]
    async fn test_add_vitals_returns_concerns() {
        let owner_id = Uuid::new_v4();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_insert_vitals()
            .withf(move |owner, entry| *owner == owner_id && entry.fecal_score == Some(6))
            .times(1)
            .returning(|_, _| Ok(Some(8)));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let view = add_vitals(
            owner_id,
            models::puppy::VitalsEntry {
                profile_id: 1,
                date: date("2024-03-10"),
                fecal_score: Some(6),
                crt_seconds: Some(1.0),
                ..Default::default()
            },
            &mock_repo,
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(view.entry.id, 8);
        assert_eq!(view.concerns.len(), 1);
        assert_eq!(view.concerns[0].field, "fecalScore");
    }

    #[ntex::test]
    async fn test_add_feeding_rejects_foreign_food() {
        let owner_id = Uuid::new_v4();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_foods()
            .with(eq(1), eq(owner_id))
            .times(1)
            .returning(|profile_id, _| {
                Ok(vec![models::food::FoodAnalysis {
                    id: 2,
                    profile_id,
                    ..Default::default()
                }])
            });
        mock_repo.expect_insert_feeding().never();
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let entry = models::puppy::FeedingEntry {
            food_brand_id: Some(99),
            ..feeding(models::puppy::MealType::Regular, Some(40.0))
        };
        let result = add_feeding(owner_id, entry, &mock_repo).await.unwrap();

        assert_eq!(result, NewFeeding::UnknownFood(99));
    }

    #[ntex::test]
    async fn test_add_feeding_without_food_reference() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_foods().never();
        mock_repo
            .expect_insert_feeding()
            .times(1)
            .returning(|_, _| Ok(Some(5)));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = add_feeding(
            Uuid::new_v4(),
            feeding(models::puppy::MealType::Snack, None),
            &mock_repo,
        )
        .await
        .unwrap();

        assert_eq!(result, NewFeeding::Created(5));
    }

    #[ntex::test]
    async fn test_todays_feedings_uses_local_day_bounds() {
        let owner_id = Uuid::new_v4();
        // 02:00 UTC on the 11th is still the 10th in Mexico City
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 2, 0, 0).unwrap();
        let tz = chrono_tz::America::Mexico_City;

        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_profile().times(1).returning(|id, owner| {
            Ok(Some(models::puppy::PuppyProfile {
                id,
                owner_id: owner,
                birth_date: date("2024-01-01"),
                breed: "chihuahua".into(),
                ..Default::default()
            }))
        });
        mock_repo
            .expect_get_feedings_between()
            .with(
                eq(1),
                eq(owner_id),
                eq(Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap()),
                eq(Utc.with_ymd_and_hms(2024, 3, 11, 6, 0, 0).unwrap()),
            )
            .times(1)
            .returning(|_, _, _, _| {
                Ok(vec![
                    feeding(models::puppy::MealType::Regular, Some(20.0)),
                    feeding(models::puppy::MealType::Treat, Some(5.0)),
                ])
            });
        mock_repo.expect_get_foods().times(1).returning(|_, _| Ok(vec![]));
        mock_repo.expect_get_weights().times(1).returning(|_, _| Ok(vec![]));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let today = todays_feedings(1, owner_id, now, tz, &mock_repo)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(today.date, date("2024-03-10"));
        assert_eq!(today.timezone, "America/Mexico_City");
        assert_eq!(today.food_grams, 20.0);
        assert_eq!(today.treat_grams, 5.0);
        assert!(today.daily_target_grams.is_none());
        assert!(today.remaining_grams.is_none());
    }

    #[test]
    fn test_remaining_grams_never_negative() {
        let profile = models::puppy::PuppyProfile {
            birth_date: date("2024-01-01"),
            breed: "chihuahua".into(),
            ..Default::default()
        };
        let food = models::food::FoodAnalysis {
            analysis: models::food::GuaranteedAnalysis {
                protein: 28.0,
                fat: 15.0,
                fiber: 4.0,
                moisture: 10.0,
                ash: 7.0,
            },
            is_default: true,
            ..Default::default()
        };
        let weights = vec![models::puppy::WeightEntry {
            date: date("2024-02-26"),
            weight_grams: 500.0,
            ..Default::default()
        }];
        let plan = insights::build_nutrition_plan(&profile, vec![food], &weights, date("2024-02-26"));

        let summary = summarize_feedings(
            date("2024-02-26"),
            chrono_tz::UTC,
            vec![feeding(models::puppy::MealType::Regular, Some(50.0))],
            &plan,
        );

        assert!((summary.daily_target_grams.unwrap() - 35.52).abs() < 0.01);
        assert_eq!(summary.remaining_grams, Some(0.0));
        assert_eq!(summary.meals_per_day, Some(4));
    }
}
