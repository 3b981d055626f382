//! Route configuration.
//!
//! Every scope answers JSON. `/reference` is public; everything under
//! `/puppy` needs the identity cookie and is scoped to its owner.

use super::{food, insights, logs, puppy, reference, schedule};
use ntex::web;

/// Static tables that need no profile.
///
/// # Routes
/// - `GET /reference/breeds` - Breeds with their size category
/// - `GET /reference/life-stages` - Life stage descriptions and care tips
pub fn reference(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reference").service((reference::get_breeds, reference::get_life_stages)),
    );
}

/// Puppy profiles and everything recorded against them.
///
/// # Profile
/// - `GET|POST /puppy` - List / create profiles
/// - `GET|PUT|DELETE /puppy/{profile_id}` - Load / update / delete a profile
/// - `GET /puppy/{profile_id}/export` - JSON snapshot of the profile
///
/// # Food
/// - `GET|POST /puppy/{profile_id}/food`
/// - `PUT /puppy/{profile_id}/food/{food_id}/default`
/// - `DELETE /puppy/{profile_id}/food/{food_id}`
///
/// # Health schedule
/// - `GET /puppy/{profile_id}/schedule`
/// - `POST /puppy/{profile_id}/schedule/generate`
/// - `PUT /puppy/{profile_id}/schedule/{entry_id}/administer`
/// - `GET /puppy/{profile_id}/boosters`
///
/// # Logs
/// - `GET|POST /puppy/{profile_id}/weight`, `DELETE /puppy/{profile_id}/weight/{entry_id}`
/// - `GET|POST /puppy/{profile_id}/vitals`
/// - `GET|POST /puppy/{profile_id}/feeding`, `GET /puppy/{profile_id}/feeding/today`
///
/// # Derived views
/// - `GET /puppy/{profile_id}/growth`
/// - `GET /puppy/{profile_id}/nutrition`
/// - `GET /puppy/{profile_id}/life-stage`
pub fn puppy(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/puppy")
            .service((
                puppy::list_profiles,
                puppy::create_profile,
                puppy::get_profile,
                puppy::update_profile,
                puppy::delete_profile,
                puppy::export_profile,
            ))
            .service((
                food::get_foods,
                food::add_food,
                food::set_default_food,
                food::delete_food,
            ))
            .service((
                schedule::get_schedule,
                schedule::generate_schedule,
                schedule::administer_entry,
                schedule::get_boosters,
            ))
            .service((
                logs::get_weights,
                logs::add_weight,
                logs::delete_weight,
                logs::get_vitals,
                logs::add_vitals,
                logs::get_feedings,
                logs::add_feeding,
                logs::get_todays_feedings,
            ))
            .service((
                insights::get_growth_chart,
                insights::get_nutrition_plan,
                insights::get_life_stage,
            )),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{front::AppState, repo::MockAppRepo};
    use ntex::{http, web::test};

    fn app_state(mock_repo: MockAppRepo) -> AppState {
        AppState {
            repo: Box::new(mock_repo),
        }
    }

    #[ntex::test]
    async fn test_reference_breeds_uses_camel_case() {
        let app = test::init_service(
            web::App::new()
                .state(app_state(MockAppRepo::new()))
                .configure(reference),
        )
        .await;

        let req = test::TestRequest::get().uri("/reference/breeds").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert!(body["breeds"][0]["sizeCategory"].is_string());
        assert!(body["breeds"][0].get("size_category").is_none());
    }

    #[ntex::test]
    async fn test_puppy_routes_need_identity() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_profiles().never();

        let app = test::init_service(
            web::App::new()
                .state(app_state(mock_repo))
                .configure(puppy),
        )
        .await;

        let req = test::TestRequest::get().uri("/puppy").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["error"], "unauthorized");
    }
}
