use crate::{
    api,
    front::{
        AppState, errors, forms,
        middleware::{owner::OwnerId, timezone::ClientTimezone},
        utils,
    },
};
use chrono::Utc;
use ntex::{http, web};

#[derive(serde::Deserialize)]
struct WeightPath {
    profile_id: i64,
    entry_id: i64,
}

#[web::get("/{profile_id}/weight")]
async fn get_weights(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let weights = api::logs::get_weights(*profile_id, owner_id, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::LoadError(format!("function get_weights raised an error: {e}"))
        })?;

    utils::ok_json(&weights)
}

#[web::post("/{profile_id}/weight")]
async fn add_weight(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    body: web::types::Json<serde_json::Value>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let form: forms::logs::WeightForm = utils::parse_body(body.into_inner())?;
    let entry = form.into_entry(*profile_id)?;

    let id = api::logs::add_weight(owner_id, entry, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::WriteError(format!("function add_weight raised an error: {e}"))
        })?
        .ok_or(errors::UserError::NotFound)?;

    utils::json_response(http::StatusCode::CREATED, &utils::Created { id })
}

#[web::delete("/{profile_id}/weight/{entry_id}")]
async fn delete_weight(
    OwnerId(owner_id): OwnerId,
    path: web::types::Path<WeightPath>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let deleted =
        api::logs::delete_weight(path.profile_id, owner_id, path.entry_id, &app_state.repo)
            .await
            .map_err(|e| {
                errors::ServerError::WriteError(format!(
                    "function delete_weight raised an error: {e}"
                ))
            })?;
    if !deleted {
        return Err(errors::UserError::NotFound.into());
    }

    Ok(web::HttpResponse::NoContent().finish())
}

#[web::get("/{profile_id}/vitals")]
async fn get_vitals(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let vitals = api::logs::get_vitals(*profile_id, owner_id, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::LoadError(format!("function get_vitals raised an error: {e}"))
        })?;

    utils::ok_json(&vitals)
}

/// Stores the vitals and answers with the advisory concerns they raise
#[web::post("/{profile_id}/vitals")]
async fn add_vitals(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    body: web::types::Json<serde_json::Value>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let form: forms::logs::VitalsForm = utils::parse_body(body.into_inner())?;
    let entry = form.into_entry(*profile_id)?;

    let vitals = api::logs::add_vitals(owner_id, entry, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::WriteError(format!("function add_vitals raised an error: {e}"))
        })?
        .ok_or(errors::UserError::NotFound)?;

    utils::json_response(http::StatusCode::CREATED, &vitals)
}

#[web::get("/{profile_id}/feeding")]
async fn get_feedings(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let feedings = api::logs::get_feedings(*profile_id, owner_id, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::LoadError(format!("function get_feedings raised an error: {e}"))
        })?;

    utils::ok_json(&feedings)
}

#[web::post("/{profile_id}/feeding")]
async fn add_feeding(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    body: web::types::Json<serde_json::Value>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let form: forms::logs::FeedingForm = utils::parse_body(body.into_inner())?;
    let entry = form.into_entry(*profile_id, Utc::now())?;

    let result = api::logs::add_feeding(owner_id, entry, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::WriteError(format!("function add_feeding raised an error: {e}"))
        })?;

    match result {
        api::logs::NewFeeding::Created(id) => {
            utils::json_response(http::StatusCode::CREATED, &utils::Created { id })
        }
        api::logs::NewFeeding::ProfileNotFound => Err(errors::UserError::NotFound.into()),
        api::logs::NewFeeding::UnknownFood(food_id) => {
            Err(errors::UserError::FormInputValueError(format!(
                "food {food_id} is not one of this puppy's foods"
            ))
            .into())
        }
    }
}

/// Feedings of the current local day with the totals against the daily target
#[web::get("/{profile_id}/feeding/today")]
async fn get_todays_feedings(
    OwnerId(owner_id): OwnerId,
    ClientTimezone(tz): ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let today = api::logs::todays_feedings(*profile_id, owner_id, Utc::now(), tz, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::LoadError(format!(
                "function todays_feedings raised an error: {e}"
            ))
        })?
        .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&today)
}
