//! Derived views: growth chart, booster plan, nutrition plan and life stage.
//! Nothing here is persisted; every view is recomputed from stored rows.

use crate::{
    core::{booster, breed, growth, life_stage, nutrition, units},
    models, repo,
};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct GrowthPoint {
    pub entry_id: i64,
    pub date: NaiveDate,
    pub age_weeks: f64,
    pub weight_grams: f64,
    pub target: Option<growth::TargetWeight>,
    pub status: Option<growth::GrowthStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthChart {
    pub size_category: breed::SizeCategory,
    pub curve: &'static [growth::ControlPoint],
    pub current_target: Option<growth::TargetWeight>,
    pub points: Vec<GrowthPoint>,
}

pub fn build_growth_chart(
    profile: &models::puppy::PuppyProfile,
    weights: &[models::puppy::WeightEntry],
    today: NaiveDate,
) -> GrowthChart {
    let size = breed::size_category(&profile.breed);

    let points = weights
        .iter()
        .map(|entry| {
            let age_weeks = (entry.date - profile.birth_date).num_days() as f64 / 7.0;
            let target = growth::target_weight_for_size(size, age_weeks);

            GrowthPoint {
                entry_id: entry.id,
                date: entry.date,
                age_weeks,
                weight_grams: entry.weight_grams,
                status: target.map(|t| t.classify(entry.weight_grams)),
                target,
            }
        })
        .collect();

    GrowthChart {
        size_category: size,
        curve: growth::curve(size),
        current_target: growth::target_weight_for_size(
            size,
            units::age_weeks(profile.birth_date, today),
        ),
        points,
    }
}

pub async fn growth_chart(
    profile_id: i64,
    owner_id: Uuid,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<GrowthChart>> {
    let _span = logfire::span!("growth_chart").entered();

    let Some(profile) = repo.get_profile(profile_id, owner_id).await? else {
        return Ok(None);
    };
    let weights = repo.get_weights(profile_id, owner_id).await?;

    Ok(Some(build_growth_chart(&profile, &weights, today)))
}

pub async fn booster_plan(
    profile_id: i64,
    owner_id: Uuid,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<Vec<booster::BoosterScheduleEntry>>> {
    let _span = logfire::span!("booster_plan").entered();

    let Some(profile) = repo.get_profile(profile_id, owner_id).await? else {
        return Ok(None);
    };
    let history = repo.get_schedule(profile_id, owner_id).await?;

    Ok(Some(booster::booster_schedule(
        &history,
        &profile.breed,
        units::age_months(profile.birth_date, today),
        today,
    )))
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionPlan {
    pub food: Option<models::food::FoodAnalysis>,
    pub weight_grams: Option<f64>,
    pub age_weeks: f64,
    /// Missing inputs, e.g. no default food or no logged weight
    pub missing: Vec<&'static str>,
    pub result: Option<nutrition::NutritionResult>,
}

pub fn build_nutrition_plan(
    profile: &models::puppy::PuppyProfile,
    foods: Vec<models::food::FoodAnalysis>,
    weights: &[models::puppy::WeightEntry],
    today: NaiveDate,
) -> NutritionPlan {
    let food = foods
        .into_iter()
        .find(|f| f.is_default && f.food_type == models::food::FoodType::Food);
    let weight_grams = models::puppy::current_weight(weights).map(|w| w.weight_grams);
    let age_weeks = units::age_weeks(profile.birth_date, today);

    let mut missing = vec![];
    if food.is_none() {
        missing.push("default food");
    }
    if weight_grams.is_none() {
        missing.push("weight");
    }

    let result = match (&food, weight_grams) {
        (Some(food), Some(grams)) => Some(nutrition::calculate_nutrition(
            &food.analysis,
            units::WeightUnit::Kilograms.from_grams(grams),
            age_weeks,
        )),
        _ => None,
    };

    NutritionPlan {
        food,
        weight_grams,
        age_weeks,
        missing,
        result,
    }
}

/// Feeding amounts for the default food, current weight and age
pub async fn nutrition_plan(
    profile_id: i64,
    owner_id: Uuid,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<NutritionPlan>> {
    let _span = logfire::span!("nutrition_plan").entered();

    let Some(profile) = repo.get_profile(profile_id, owner_id).await? else {
        return Ok(None);
    };
    let foods = repo.get_foods(profile_id, owner_id).await?;
    let weights = repo.get_weights(profile_id, owner_id).await?;

    Ok(Some(build_nutrition_plan(&profile, foods, &weights, today)))
}

#[derive(Debug, Serialize)]
pub struct LifeStageOverview {
    pub age_months: f64,
    pub size_category: breed::SizeCategory,
    pub lifespan: &'static breed::LifespanRecord,
    pub current: &'static life_stage::LifeStageInfo,
    pub remaining: life_stage::RemainingLifespan,
    pub next_transition: Option<life_stage::StageTransition>,
}

pub fn build_life_stage_overview(breed_name: &str, age_months: f64) -> LifeStageOverview {
    LifeStageOverview {
        age_months,
        size_category: breed::size_category(breed_name),
        lifespan: breed::lifespan(breed_name),
        current: life_stage::life_stage(breed_name, age_months),
        remaining: life_stage::remaining_lifespan(breed_name, age_months),
        next_transition: life_stage::next_transition(breed_name, age_months),
    }
}

pub async fn life_stage_overview(
    profile_id: i64,
    owner_id: Uuid,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<LifeStageOverview>> {
    let _span = logfire::span!("life_stage_overview").entered();

    Ok(repo
        .get_profile(profile_id, owner_id)
        .await?
        .map(|profile| {
            build_life_stage_overview(
                &profile.breed,
                units::age_months(profile.birth_date, today),
            )
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::vaccination::VaccineType, repo::MockAppRepo};
    use mockall::predicate::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn chihuahua() -> models::puppy::PuppyProfile {
        models::puppy::PuppyProfile {
            id: 1,
            name: "Pepa".into(),
            birth_date: date("2024-01-01"),
            breed: "Chihuahua".into(),
            ..Default::default()
        }
    }

    fn weight(id: i64, d: &str, grams: f64) -> models::puppy::WeightEntry {
        models::puppy::WeightEntry {
            id,
            profile_id: 1,
            date: date(d),
            weight_grams: grams,
        }
    }

    fn puppy_kibble(is_default: bool) -> models::food::FoodAnalysis {
        models::food::FoodAnalysis {
            id: 4,
            profile_id: 1,
            brand_name: "Puppy Kibble".into(),
            analysis: models::food::GuaranteedAnalysis {
                protein: 28.0,
                fat: 15.0,
                fiber: 4.0,
                moisture: 10.0,
                ash: 7.0,
            },
            is_default,
            ..Default::default()
        }
    }

    #[test]
    fn test_growth_chart_classifies_each_weight() {
        // week 8 is a toy control point: 400 / 500 / 650
        let weights = vec![weight(1, "2024-02-26", 380.0), weight(2, "2024-02-26", 520.0)];
        let chart = build_growth_chart(&chihuahua(), &weights, date("2024-02-26"));

        assert_eq!(chart.size_category, breed::SizeCategory::Toy);
        assert_eq!(
            chart.current_target,
            Some(growth::TargetWeight {
                min: 400.0,
                ideal: 500.0,
                max: 650.0
            })
        );
        assert_eq!(chart.points[0].status, Some(growth::GrowthStatus::Below));
        assert_eq!(chart.points[1].status, Some(growth::GrowthStatus::Within));
        assert_eq!(chart.points[1].age_weeks, 8.0);
    }

    #[test]
    fn test_growth_chart_weight_before_birth_has_no_target() {
        let chart = build_growth_chart(
            &chihuahua(),
            &[weight(1, "2023-12-25", 100.0)],
            date("2024-02-26"),
        );
        assert!(chart.points[0].target.is_none());
        assert!(chart.points[0].status.is_none());
    }

    #[test]
    fn test_nutrition_plan_uses_default_food_and_latest_weight() {
        let weights = vec![weight(1, "2024-02-01", 350.0), weight(2, "2024-02-26", 500.0)];
        let plan = build_nutrition_plan(
            &chihuahua(),
            vec![puppy_kibble(false), puppy_kibble(true)],
            &weights,
            date("2024-02-26"),
        );

        assert!(plan.missing.is_empty());
        assert_eq!(plan.weight_grams, Some(500.0));
        let result = plan.result.unwrap();
        assert!((result.resting_energy - 41.62).abs() < 0.01);
        assert_eq!(result.meals_per_day, 4);
    }

    #[test]
    fn test_nutrition_plan_reports_missing_inputs() {
        let plan = build_nutrition_plan(&chihuahua(), vec![puppy_kibble(false)], &[], date("2024-02-26"));

        assert!(plan.result.is_none());
        assert_eq!(plan.missing, vec!["default food", "weight"]);
    }

    #[test]
    fn test_life_stage_overview() {
        let overview = build_life_stage_overview("chihuahua", 9.0);
        assert_eq!(overview.current.stage, life_stage::LifeStage::Puppy);
        assert_eq!(
            overview.next_transition.map(|t| t.next_stage),
            Some(life_stage::LifeStage::YoungAdult)
        );

        let overview = build_life_stage_overview("chihuahua", 14.0 * 12.0 * 0.92);
        assert_eq!(overview.current.stage, life_stage::LifeStage::Geriatric);
        assert!(overview.next_transition.is_none());
    }

    #[ntex::test]
    async fn test_booster_plan_from_history() {
        let owner_id = Uuid::new_v4();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_profile()
            .with(eq(1), eq(owner_id))
            .times(1)
            .returning(|_, _| Ok(Some(chihuahua())));
        mock_repo
            .expect_get_schedule()
            .with(eq(1), eq(owner_id))
            .times(1)
            .returning(|_, _| {
                Ok(vec![models::schedule::HealthScheduleEntry {
                    vaccine_type: VaccineType::Rabies,
                    due_date: date("2024-04-22"),
                    administered: true,
                    administered_date: Some(date("2024-04-23")),
                    ..Default::default()
                }])
            });
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let plan = booster_plan(1, owner_id, date("2024-06-01"), &mock_repo)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].next_due, date("2025-04-23"));
    }

    #[ntex::test]
    async fn test_nutrition_plan_unknown_profile() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_profile()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_repo.expect_get_foods().never();
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = nutrition_plan(1, Uuid::new_v4(), date("2024-06-01"), &mock_repo).await;

        assert!(result.is_ok_and(|plan| plan.is_none()));
    }
}
