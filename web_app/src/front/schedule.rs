use crate::{
    api,
    front::{
        AppState, errors, forms,
        middleware::{owner::OwnerId, timezone::ClientTimezone},
        utils,
    },
};
use chrono::Utc;
use ntex::web;

#[derive(serde::Deserialize)]
struct EntryPath {
    profile_id: i64,
    entry_id: i64,
}

#[web::get("/{profile_id}/schedule")]
async fn get_schedule(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let schedule = api::schedule::get_schedule(
        *profile_id,
        owner_id,
        tz.today(Utc::now()),
        &app_state.repo,
    )
    .await
    .map_err(|e| {
        errors::ServerError::LoadError(format!("function get_schedule raised an error: {e}"))
    })?
    .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&schedule)
}

#[web::post("/{profile_id}/schedule/generate")]
async fn generate_schedule(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let schedule = api::schedule::generate_schedule(
        *profile_id,
        owner_id,
        tz.today(Utc::now()),
        &app_state.repo,
    )
    .await
    .map_err(|e| {
        errors::ServerError::WriteError(format!(
            "function generate_schedule raised an error: {e}"
        ))
    })?
    .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&schedule)
}

#[web::put("/{profile_id}/schedule/{entry_id}/administer")]
async fn administer_entry(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    path: web::types::Path<EntryPath>,
    body: web::types::Json<serde_json::Value>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let form: forms::health::AdministrationForm = utils::parse_body(body.into_inner())?;
    let administration = form.into_administration(tz.today(Utc::now()))?;

    let updated = api::schedule::administer_entry(
        path.profile_id,
        owner_id,
        path.entry_id,
        administration,
        &app_state.repo,
    )
    .await
    .map_err(|e| {
        errors::ServerError::WriteError(format!("function administer_entry raised an error: {e}"))
    })?;
    if !updated {
        return Err(errors::UserError::NotFound.into());
    }

    Ok(web::HttpResponse::NoContent().finish())
}

/// Next adult boosters computed from the administration history
#[web::get("/{profile_id}/boosters")]
async fn get_boosters(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let boosters = api::insights::booster_plan(
        *profile_id,
        owner_id,
        tz.today(Utc::now()),
        &app_state.repo,
    )
    .await
    .map_err(|e| {
        errors::ServerError::LoadError(format!("function booster_plan raised an error: {e}"))
    })?
    .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&boosters)
}
