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

#[web::get("")]
async fn list_profiles(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let profiles = api::profile::list_profiles(owner_id, tz.today(Utc::now()), &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::LoadError(format!("function list_profiles raised an error: {e}"))
        })?;

    utils::ok_json(&profiles)
}

#[web::post("")]
async fn create_profile(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    body: web::types::Json<serde_json::Value>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let form: forms::puppy::ProfileForm = utils::parse_body(body.into_inner())?;
    let profile = form.into_profile(0, owner_id, tz.today(Utc::now()))?;

    let id = api::profile::create_profile(profile, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::WriteError(format!("function create_profile raised an error: {e}"))
        })?;

    utils::json_response(http::StatusCode::CREATED, &utils::Created { id })
}

#[web::get("/{profile_id}")]
async fn get_profile(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let profile = api::profile::get_profile(
        *profile_id,
        owner_id,
        tz.today(Utc::now()),
        &app_state.repo,
    )
    .await
    .map_err(|e| {
        errors::ServerError::LoadError(format!("function get_profile raised an error: {e}"))
    })?
    .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&profile)
}

#[web::put("/{profile_id}")]
async fn update_profile(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    body: web::types::Json<serde_json::Value>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let today = tz.today(Utc::now());
    let form: forms::puppy::ProfileForm = utils::parse_body(body.into_inner())?;
    let profile = form.into_profile(*profile_id, owner_id, today)?;

    let updated = api::profile::update_profile(profile, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::WriteError(format!("function update_profile raised an error: {e}"))
        })?;
    if !updated {
        return Err(errors::UserError::NotFound.into());
    }

    let profile = api::profile::get_profile(*profile_id, owner_id, today, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::LoadError(format!("function get_profile raised an error: {e}"))
        })?
        .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&profile)
}

/// Deletes the profile together with every log and schedule row
#[web::delete("/{profile_id}")]
async fn delete_profile(
    OwnerId(owner_id): OwnerId,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let deleted = api::profile::delete_profile(*profile_id, owner_id, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::WriteError(format!("function delete_profile raised an error: {e}"))
        })?;
    if !deleted {
        return Err(errors::UserError::NotFound.into());
    }

    Ok(web::HttpResponse::NoContent().finish())
}

#[web::get("/{profile_id}/export")]
async fn export_profile(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let now = Utc::now();
    let export =
        api::export::export_profile(*profile_id, owner_id, now, tz.today(now), &app_state.repo)
            .await
            .map_err(|e| {
                errors::ServerError::LoadError(format!(
                    "function export_profile raised an error: {e}"
                ))
            })?
            .ok_or(errors::UserError::NotFound)?;

    let mut response = utils::ok_json(&export)?;
    if let Ok(value) = http::header::HeaderValue::from_str(&format!(
        "attachment; filename=\"puppy-{}-export.json\"",
        *profile_id
    )) {
        response
            .headers_mut()
            .insert(http::header::CONTENT_DISPOSITION, value);
    }

    Ok(response)
}
