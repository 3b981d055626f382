use crate::{
    core::{breed, units},
    metric, models, repo,
};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSummary {
    pub days: i64,
    pub weeks: f64,
    pub months: f64,
    pub display: String,
}

impl AgeSummary {
    pub fn new(birth_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            days: units::age_days(birth_date, today),
            weeks: units::age_weeks(birth_date, today),
            months: units::age_months(birth_date, today),
            display: units::fmt_age(birth_date, today),
        }
    }
}

/// A profile with the values derived from its birth date and breed
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: models::puppy::PuppyProfile,
    pub size_category: breed::SizeCategory,
    pub age: AgeSummary,
}

impl ProfileView {
    pub fn new(profile: models::puppy::PuppyProfile, today: NaiveDate) -> Self {
        Self {
            size_category: breed::size_category(&profile.breed),
            age: AgeSummary::new(profile.birth_date, today),
            profile,
        }
    }
}

pub async fn list_profiles(
    owner_id: Uuid,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<ProfileView>> {
    let _span = logfire::span!("list_profiles").entered();

    Ok(repo
        .get_profiles(owner_id)
        .await?
        .into_iter()
        .map(|profile| ProfileView::new(profile, today))
        .collect())
}

pub async fn get_profile(
    profile_id: i64,
    owner_id: Uuid,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<ProfileView>> {
    let _span = logfire::span!("get_profile").entered();

    Ok(repo
        .get_profile(profile_id, owner_id)
        .await?
        .map(|profile| ProfileView::new(profile, today)))
}

pub async fn create_profile(
    profile: models::puppy::PuppyProfile,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<i64> {
    let _span = logfire::span!("create_profile").entered();

    let profile_id = repo.insert_profile(&profile).await?;
    metric::incr_user_action_statds(metric::UserAction::ProfileCreated);

    Ok(profile_id)
}

/// Overwrites the editable fields of a profile in a single update
pub async fn update_profile(
    profile: models::puppy::PuppyProfile,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<bool> {
    let _span = logfire::span!("update_profile").entered();

    repo.update_profile(&profile).await
}

pub async fn delete_profile(
    profile_id: i64,
    owner_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<bool> {
    let _span = logfire::span!("delete_profile").entered();

    repo.delete_profile(profile_id, owner_id).await
}
