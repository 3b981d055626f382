use super::profile::ProfileView;
use crate::{metric, models, repo};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const EXPORT_FORMAT_VERSION: u32 = 1;

/// Snapshot of everything recorded for a profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileExport {
    pub format_version: u32,
    pub exported_at: DateTime<Utc>,
    pub profile: ProfileView,
    pub schedule: Vec<models::schedule::HealthScheduleEntry>,
    pub weights: Vec<models::puppy::WeightEntry>,
    pub vitals: Vec<models::puppy::VitalsEntry>,
}

pub async fn export_profile(
    profile_id: i64,
    owner_id: Uuid,
    now: DateTime<Utc>,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<ProfileExport>> {
    let _span = logfire::span!("export_profile").entered();

    let Some(profile) = repo.get_profile(profile_id, owner_id).await? else {
        return Ok(None);
    };

    let export = ProfileExport {
        format_version: EXPORT_FORMAT_VERSION,
        exported_at: now,
        profile: ProfileView::new(profile, today),
        schedule: repo.get_schedule(profile_id, owner_id).await?,
        weights: repo.get_weights(profile_id, owner_id).await?,
        vitals: repo.get_vitals(profile_id, owner_id).await?,
    };
    metric::incr_user_action_statds(metric::UserAction::Export);

    Ok(Some(export))
}
