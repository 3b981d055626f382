use crate::{
    core::{alert, vaccination},
    metric, models, repo,
};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntryView {
    #[serde(flatten)]
    pub entry: models::schedule::HealthScheduleEntry,
    pub alert_status: alert::AlertStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub entries: Vec<ScheduleEntryView>,
    pub summary: alert::AlertSummary,
}

impl ScheduleView {
    fn new(entries: Vec<models::schedule::HealthScheduleEntry>, today: NaiveDate) -> Self {
        Self {
            summary: alert::summarize(&entries, today),
            entries: entries
                .into_iter()
                .map(|entry| ScheduleEntryView {
                    alert_status: alert::alert_status(entry.due_date, entry.administered, today),
                    entry,
                })
                .collect(),
        }
    }
}

pub async fn get_schedule(
    profile_id: i64,
    owner_id: Uuid,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<ScheduleView>> {
    let _span = logfire::span!("get_schedule").entered();

    if repo.get_profile(profile_id, owner_id).await?.is_none() {
        return Ok(None);
    }

    let entries = repo.get_schedule(profile_id, owner_id).await?;

    Ok(Some(ScheduleView::new(entries, today)))
}

/// (Re)generates the puppy series from the profile's birth date.
///
/// Administered entries are carried over by `(vaccine_type, week_number)`,
/// so regenerating after a birth date correction keeps the vaccination
/// history.
pub async fn generate_schedule(
    profile_id: i64,
    owner_id: Uuid,
    today: NaiveDate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<ScheduleView>> {
    let _span = logfire::span!("generate_schedule").entered();

    let Some(profile) = repo.get_profile(profile_id, owner_id).await? else {
        return Ok(None);
    };

    let existing = repo.get_schedule(profile_id, owner_id).await?;
    let merged = vaccination::merge_schedule(
        vaccination::generate_schedule(profile_id, profile.birth_date),
        existing,
    );
    let kept = merged.iter().filter(|e| e.administered).count();

    if !repo.replace_schedule(profile_id, owner_id, merged).await? {
        return Ok(None);
    }
    metric::incr_user_action_statds(metric::UserAction::ScheduleGenerated);
    tracing::info!(profile_id, kept, "schedule regenerated");

    let entries = repo.get_schedule(profile_id, owner_id).await?;

    Ok(Some(ScheduleView::new(entries, today)))
}

pub async fn administer_entry(
    profile_id: i64,
    owner_id: Uuid,
    entry_id: i64,
    administration: models::schedule::Administration,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<bool> {
    let _span = logfire::span!("administer_entry").entered();

    let updated = repo
        .administer_entry(profile_id, owner_id, entry_id, &administration)
        .await?;
    if updated {
        metric::incr_user_action_statds(metric::UserAction::VaccineAdministered);
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_test_profile(id: i64, owner_id: Uuid) -> models::puppy::PuppyProfile {
        models::puppy::PuppyProfile {
            id,
            owner_id,
            name: "Milo".into(),
            birth_date: date("2024-01-01"),
            breed: "Beagle".into(),
            ..Default::default()
        }
    }

    fn administered_dapp5(profile_id: i64) -> models::schedule::HealthScheduleEntry {
        models::schedule::HealthScheduleEntry {
            id: 11,
            profile_id,
            vaccine_type: vaccination::VaccineType::Dapp5,
            week_number: 6,
            due_date: date("2023-12-20"),
            description: "DAPP 5-way, first dose".into(),
            administered: true,
            administered_date: Some(date("2024-02-13")),
            administrator: Some("Dr. Ruiz".into()),
            ..Default::default()
        }
    }

    #[ntex::test]
    async fn test_get_schedule_adds_alert_status() {
        let owner_id = Uuid::new_v4();
        let today = date("2024-02-26");

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_profile()
            .with(eq(1), eq(owner_id))
            .times(1)
            .returning(|id, owner| Ok(Some(create_test_profile(id, owner))));
        mock_repo
            .expect_get_schedule()
            .with(eq(1), eq(owner_id))
            .times(1)
            .returning(|profile_id, _| {
                Ok(vaccination::generate_schedule(profile_id, date("2024-01-01")))
            });
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let view = get_schedule(1, owner_id, today, &mock_repo)
            .await
            .unwrap()
            .unwrap();

        // week 8 rows fall on 2024-02-26
        let due_now = view
            .entries
            .iter()
            .filter(|e| e.alert_status == alert::AlertStatus::DueNow)
            .count();
        assert_eq!(due_now, 2);
        assert_eq!(view.summary.due_now, 2);
        assert_eq!(view.summary.overdue, 4);
        assert_eq!(view.entries.len(), vaccination::PUPPY_SERIES.len());
    }

    #[ntex::test]
    async fn test_get_schedule_unknown_profile() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_profile()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_repo.expect_get_schedule().never();
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = get_schedule(1, Uuid::new_v4(), date("2024-02-26"), &mock_repo).await;

        assert!(result.is_ok_and(|view| view.is_none()));
    }

    #[ntex::test]
    async fn test_generate_schedule_keeps_administered_entries() {
        let owner_id = Uuid::new_v4();
        let calls = Arc::new(AtomicUsize::new(0));

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_profile()
            .times(1)
            .returning(|id, owner| Ok(Some(create_test_profile(id, owner))));
        let schedule_calls = calls.clone();
        mock_repo
            .expect_get_schedule()
            .times(2)
            .returning(move |profile_id, _| {
                if schedule_calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(vec![administered_dapp5(profile_id)])
                } else {
                    let mut entries = vaccination::generate_schedule(profile_id, date("2024-01-01"));
                    entries[2] = administered_dapp5(profile_id);
                    Ok(entries)
                }
            });
        mock_repo
            .expect_replace_schedule()
            .withf(|profile_id, _, entries| {
                *profile_id == 1
                    && entries.len() == vaccination::PUPPY_SERIES.len()
                    && entries.iter().filter(|e| e.administered).count() == 1
                    && entries.iter().any(|e| {
                        e.id == 11
                            && e.administered
                            && e.due_date == date("2024-02-12")
                            && e.administrator.as_deref() == Some("Dr. Ruiz")
                    })
            })
            .times(1)
            .returning(|_, _, _| Ok(true));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let view = generate_schedule(1, owner_id, date("2024-02-26"), &mock_repo)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(view.summary.completed, 1);
    }

    #[ntex::test]
    async fn test_administer_entry() {
        let owner_id = Uuid::new_v4();
        let administration = models::schedule::Administration {
            administered_date: date("2024-04-22"),
            lot_number: Some("LOT-7".into()),
            ..Default::default()
        };

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_administer_entry()
            .with(eq(1), eq(owner_id), eq(30), eq(administration.clone()))
            .times(1)
            .returning(|_, _, _, _| Ok(true));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = administer_entry(1, owner_id, 30, administration, &mock_repo).await;

        assert!(result.is_ok_and(|updated| updated));
    }
}
