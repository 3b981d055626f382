//! Application configuration.
//!
//! Every value comes from an environment variable named after the field in
//! upper case. Sensitive fields are marked and must never be logged.

use anyhow::{anyhow, bail};
use chrono_tz::Tz;
use envconfig::Envconfig;
use std::sync::OnceLock;

const DEV_IDENTITY_KEY: &str = "puppy-health-local-identity-key-change-me";
const MIN_IDENTITY_KEY_LEN: usize = 32;

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Example: "sqlite:data/puppy_health.db"
    pub db_host: String,

    /// SENSITIVE: key used by SQLCipher to encrypt the database in prod
    pub db_pass_encrypt: String,

    /// Example: "0.0.0.0", "localhost"
    pub web_server_host: String,

    #[envconfig(default = "8080")]
    pub web_server_port: u16,

    /// SENSITIVE PATH: TLS private key, prod only
    #[envconfig(default = "server.key")]
    pub private_key_path: String,

    #[envconfig(default = "server.crt")]
    pub certificate_path: String,

    /// SENSITIVE: traces and metrics are only exported when set
    pub logfire_token: Option<String>,

    /// IANA name used when a request carries no `timezone` header
    #[envconfig(default = "UTC")]
    pub default_timezone: String,

    #[envconfig(default = "http://localhost:8080")]
    pub allowed_origin: String,

    /// SENSITIVE: encrypts the identity cookie holding the owner id
    #[envconfig(default = "puppy-health-local-identity-key-change-me")]
    pub identity_key: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    pub fn default_tz(&self) -> anyhow::Result<Tz> {
        self.default_timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("invalid DEFAULT_TIMEZONE {}: {e}", self.default_timezone))
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.default_tz()?;

        if self.identity_key.len() < MIN_IDENTITY_KEY_LEN {
            bail!("IDENTITY_KEY must be at least {MIN_IDENTITY_KEY_LEN} characters");
        }
        if self.is_prod() && self.identity_key == DEV_IDENTITY_KEY {
            bail!("IDENTITY_KEY must be set in prod");
        }

        Ok(())
    }
}

pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn init_config() -> anyhow::Result<()> {
    let app_config = AppConfig::init_from_env()?;
    app_config.validate()?;

    APP_CONFIG
        .set(app_config)
        .map_err(|_| anyhow!("app config was already initialized"))
}
