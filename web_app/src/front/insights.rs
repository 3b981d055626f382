use crate::{
    api,
    front::{
        AppState, errors,
        middleware::{owner::OwnerId, timezone::ClientTimezone},
        utils,
    },
};
use chrono::Utc;
use ntex::web;

#[web::get("/{profile_id}/growth")]
async fn get_growth_chart(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let chart = api::insights::growth_chart(
        *profile_id,
        owner_id,
        tz.today(Utc::now()),
        &app_state.repo,
    )
    .await
    .map_err(|e| {
        errors::ServerError::LoadError(format!("function growth_chart raised an error: {e}"))
    })?
    .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&chart)
}

#[web::get("/{profile_id}/nutrition")]
async fn get_nutrition_plan(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let plan = api::insights::nutrition_plan(
        *profile_id,
        owner_id,
        tz.today(Utc::now()),
        &app_state.repo,
    )
    .await
    .map_err(|e| {
        errors::ServerError::LoadError(format!("function nutrition_plan raised an error: {e}"))
    })?
    .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&plan)
}

#[web::get("/{profile_id}/life-stage")]
async fn get_life_stage(
    OwnerId(owner_id): OwnerId,
    tz: ClientTimezone,
    profile_id: web::types::Path<i64>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let overview = api::insights::life_stage_overview(
        *profile_id,
        owner_id,
        tz.today(Utc::now()),
        &app_state.repo,
    )
    .await
    .map_err(|e| {
        errors::ServerError::LoadError(format!(
            "function life_stage_overview raised an error: {e}"
        ))
    })?
    .ok_or(errors::UserError::NotFound)?;

    utils::ok_json(&overview)
}
