use crate::{core::nutrition, metric, models, repo};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct FoodView {
    #[serde(flatten)]
    pub food: models::food::FoodAnalysis,
    pub kcal_per_kg: f64,
}

impl From<models::food::FoodAnalysis> for FoodView {
    fn from(food: models::food::FoodAnalysis) -> Self {
        Self {
            kcal_per_kg: nutrition::kcal_per_kg(&food.analysis),
            food,
        }
    }
}

pub async fn get_foods(
    profile_id: i64,
    owner_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<FoodView>> {
    let _span = logfire::span!("get_foods").entered();

    Ok(repo
        .get_foods(profile_id, owner_id)
        .await?
        .into_iter()
        .map(FoodView::from)
        .collect())
}

/// Stores a food setting. When flagged as default it replaces the current
/// default of the same type.
pub async fn add_food(
    owner_id: Uuid,
    food: models::food::FoodAnalysis,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<i64>> {
    let _span = logfire::span!("add_food").entered();

    let food_id = repo.insert_food(owner_id, &food).await?;
    if food_id.is_some() && food.is_default {
        metric::incr_user_action_statds(metric::UserAction::DefaultFoodSet);
    }

    Ok(food_id)
}

pub async fn set_default_food(
    profile_id: i64,
    owner_id: Uuid,
    food_id: i64,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<bool> {
    let _span = logfire::span!("set_default_food").entered();

    let updated = repo.set_default_food(profile_id, owner_id, food_id).await?;
    if updated {
        metric::incr_user_action_statds(metric::UserAction::DefaultFoodSet);
    }

    Ok(updated)
}

pub async fn delete_food(
    profile_id: i64,
    owner_id: Uuid,
    food_id: i64,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<bool> {
    let _span = logfire::span!("delete_food").entered();

    repo.delete_food(profile_id, owner_id, food_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    #[ntex::test]
    async fn test_get_foods_adds_energy_density() {
        let owner_id = Uuid::new_v4();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_foods()
            .with(eq(3), eq(owner_id))
            .times(1)
            .returning(|profile_id, _| {
                Ok(vec![models::food::FoodAnalysis {
                    id: 1,
                    profile_id,
                    brand_name: "Puppy Kibble".into(),
                    analysis: models::food::GuaranteedAnalysis {
                        protein: 28.0,
                        fat: 15.0,
                        fiber: 4.0,
                        moisture: 10.0,
                        ash: 7.0,
                    },
                    is_default: true,
                    ..Default::default()
                }])
            });
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let foods = get_foods(3, owner_id, &mock_repo).await.unwrap();

        assert_eq!(foods.len(), 1);
        assert!((foods[0].kcal_per_kg - 3515.0).abs() < 1e-9);

        let value = serde_json::to_value(&foods[0]).unwrap();
        assert_eq!(value["brand_name"], "Puppy Kibble");
        assert_eq!(value["food_type"], "food");
    }

    #[ntex::test]
    async fn test_set_default_food_on_foreign_profile() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_set_default_food()
            .with(eq(3), always(), eq(9))
            .times(1)
            .returning(|_, _, _| Ok(false));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = set_default_food(3, Uuid::new_v4(), 9, &mock_repo).await;

        assert!(result.is_ok_and(|updated| !updated));
    }
}
