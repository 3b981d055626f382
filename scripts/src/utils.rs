use crate::config;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use std::str::FromStr;

pub const DEFAULT_MIGRATIONS_DIR: &str = "../migrations";

fn load_migrations(migrations_dir: &str) -> anyhow::Result<tera::Tera> {
    Ok(tera::Tera::new(&format!("{migrations_dir}/**/*.sql"))?)
}

/// Migration file names in the order they must be applied
pub fn migration_names(migrations_dir: &str) -> anyhow::Result<Vec<String>> {
    let tera = load_migrations(migrations_dir)?;
    let mut names = tera
        .get_template_names()
        .map(|name| name.to_string())
        .collect::<Vec<_>>();
    names.sort();

    Ok(names)
}

pub async fn run_migration(
    db_pool: &SqlitePool,
    migrations_dir: &str,
    file_name: &str,
) -> anyhow::Result<()> {
    let tera = load_migrations(migrations_dir)?;
    let query = tera.render(file_name, &tera::Context::new())?;

    sqlx::raw_sql(&query).execute(db_pool).await?;
    Ok(())
}

/// Applies every migration file, returning the applied names
pub async fn run_all_migrations(
    db_pool: &SqlitePool,
    migrations_dir: &str,
) -> anyhow::Result<Vec<String>> {
    let names = migration_names(migrations_dir)?;
    for name in &names {
        run_migration(db_pool, migrations_dir, name).await?;
    }

    Ok(names)
}

pub async fn setup_sqlite_db_pool(app_config: &config::AppConfig) -> anyhow::Result<SqlitePool> {
    if app_config.is_prod() {
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
        SqliteConnectOptions::from_str(&app_config.db_host)?
            .pragma("foreign_keys", "ON")
            .create_if_missing(true),
    )
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    fn migrations_dir() -> String {
        format!("{}/../migrations", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_migration_names_are_sorted() {
        let names = migration_names(&migrations_dir()).unwrap();
        assert_eq!(names.first().map(String::as_str), Some("0001_init.sql"));

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn test_run_all_migrations_creates_tables() {
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let applied = run_all_migrations(&db_pool, &migrations_dir()).await.unwrap();
        assert!(!applied.is_empty());

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&db_pool)
        .await
        .unwrap();
        let tables = tables.into_iter().map(|(name,)| name).collect::<Vec<_>>();

        assert_eq!(
            tables,
            vec![
                "feeding_log",
                "food_setting",
                "health_schedule",
                "puppy_profile",
                "vitals_log",
                "weight_log"
            ]
        );
    }
}
