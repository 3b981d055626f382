use crate::{
    api,
    front::{AppState, errors, forms, middleware::owner::OwnerId, utils},
};
use ntex::{http, web};

#[derive(serde::Deserialize)]
struct FoodPath {
    profile_id: i64,
    food_id: i64,
}

#[web::get("/{profile_id}/food")]
async fn get_foods(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let foods = api::food::get_foods(*profile_id, owner_id, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::LoadError(format!("function get_foods raised an error: {e}"))
        })?;

    utils::ok_json(&foods)
}

#[web::post("/{profile_id}/food")]
async fn add_food(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    body: web::types::Json<serde_json::Value>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let form: forms::health::FoodForm = utils::parse_body(body.into_inner())?;
    let food = form.into_food(*profile_id)?;

    let id = api::food::add_food(owner_id, food, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::WriteError(format!("function add_food raised an error: {e}"))
        })?
        .ok_or(errors::UserError::NotFound)?;

    utils::json_response(http::StatusCode::CREATED, &utils::Created { id })
}

/// Marks the food as the default of its type, clearing the previous one
#[web::put("/{profile_id}/food/{food_id}/default")]
async fn set_default_food(
    OwnerId(owner_id): OwnerId,
    path: web::types::Path<FoodPath>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let updated =
        api::food::set_default_food(path.profile_id, owner_id, path.food_id, &app_state.repo)
            .await
            .map_err(|e| {
                errors::ServerError::WriteError(format!(
                    "function set_default_food raised an error: {e}"
                ))
            })?;
    if !updated {
        return Err(errors::UserError::NotFound.into());
    }

    Ok(web::HttpResponse::NoContent().finish())
}

#[web::delete("/{profile_id}/food/{food_id}")]
async fn delete_food(
    OwnerId(owner_id): OwnerId,
    path: web::types::Path<FoodPath>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let deleted = api::food::delete_food(path.profile_id, owner_id, path.food_id, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::WriteError(format!("function delete_food raised an error: {e}"))
        })?;
    if !deleted {
        return Err(errors::UserError::NotFound.into());
    }

    Ok(web::HttpResponse::NoContent().finish())
}
