use clap::{Args, Parser, Subcommand};
use envconfig::Envconfig;

use crate::{config, utils};

#[derive(Args, Debug, Clone)]
pub struct RunMigrationsArgs {
    /// Migration file name relative to the migrations directory
    #[arg(short, long)]
    file: String,

    #[arg(short, long, default_value = utils::DEFAULT_MIGRATIONS_DIR)]
    dir: String,
}

#[derive(Args, Debug, Clone)]
pub struct RunAllMigrationsArgs {
    #[arg(short, long, default_value = utils::DEFAULT_MIGRATIONS_DIR)]
    dir: String,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Applies a single migration file
    RunMigrations(RunMigrationsArgs),
    /// Applies every migration file in name order
    RunAllMigrations(RunAllMigrationsArgs),
}

/// Maintenance tasks for the puppy health database
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        let app_config = config::AppConfig::init_from_env()?;
        let db_pool = utils::setup_sqlite_db_pool(&app_config).await?;

        match &self.action {
            Action::RunMigrations(RunMigrationsArgs { file, dir }) => {
                utils::run_migration(&db_pool, dir, file).await?;
                println!("applied {file}");
            }
            Action::RunAllMigrations(RunAllMigrationsArgs { dir }) => {
                for name in utils::run_all_migrations(&db_pool, dir).await? {
                    println!("applied {name}");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_all_migrations() {
        let args = AppArgs::parse_from(["scripts", "run-all-migrations"]);
        match args.action {
            Action::RunAllMigrations(RunAllMigrationsArgs { dir }) => {
                assert_eq!(dir, utils::DEFAULT_MIGRATIONS_DIR)
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_migrations_requires_file() {
        assert!(AppArgs::try_parse_from(["scripts", "run-migrations"]).is_err());

        let args = AppArgs::parse_from(["scripts", "run-migrations", "--file", "0001_init.sql"]);
        assert!(matches!(
            args.action,
            Action::RunMigrations(RunMigrationsArgs { ref file, .. }) if file == "0001_init.sql"
        ));
    }
}
