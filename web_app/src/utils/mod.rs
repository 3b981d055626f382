//! Helper functions could be used in api/, front/, ...

pub mod case;

use crate::config;
use anyhow::Context;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use std::str::FromStr;

pub async fn setup_sqlite_db_pool(encrypted: bool) -> anyhow::Result<SqlitePool> {
    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;
    if encrypted {
        return Ok(SqlitePool::connect_with(
            SqliteConnectOptions::from_str(&app_config.db_host)?
                .pragma("key", app_config.db_pass_encrypt.clone())
                .pragma("cipher_page_size", "1024")
                .pragma("kdf_iter", "64000")
                .pragma("cipher_hmac_algorithm", "HMAC_SHA1")
                .pragma("cipher_kdf_algorithm", "PBKDF2_HMAC_SHA1")
                .pragma("foreign_keys", "ON")
                .journal_mode(SqliteJournalMode::Delete),
        )
        .await?);
    }

    Ok(SqlitePool::connect_with(
        SqliteConnectOptions::from_str(&app_config.db_host)?.pragma("foreign_keys", "ON"),
    )
    .await?)
}

/// UTC bounds `[start, end)` of the calendar day `day` in `tz`.
///
/// Days starting inside a DST gap begin at the first valid local instant.
pub fn local_day_bounds(day: NaiveDate, tz: Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start_of = |d: NaiveDate| {
        let midnight = d.and_hms_opt(0, 0, 0)?;
        tz.from_local_datetime(&midnight)
            .earliest()
            .or_else(|| {
                // midnight skipped by a DST jump
                (1..=3).find_map(|h| {
                    tz.from_local_datetime(&(midnight + chrono::TimeDelta::hours(h)))
                        .earliest()
                })
            })
            .map(|dt| dt.with_timezone(&Utc))
    };

    Some((start_of(day)?, start_of(day.succ_opt()?)?))
}

/// Calendar date of `now` in `tz`
pub fn local_today(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_day_bounds() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let (start, end) = local_day_bounds(day, chrono_tz::UTC).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());

        let (start, end) = local_day_bounds(day, chrono_tz::America::Mexico_City).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 11, 6, 0, 0).unwrap());
    }

    #[test]
    fn test_dst_day_is_23_hours() {
        // US spring forward
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, end) = local_day_bounds(day, chrono_tz::America::New_York).unwrap();
        assert_eq!((end - start).num_hours(), 23);
    }

    #[test]
    fn test_local_today_crosses_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 3, 0, 0).unwrap();
        assert_eq!(
            local_today(now, chrono_tz::America::Mexico_City),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert_eq!(
            local_today(now, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
    }
}
