//! # Puppy Health
//!
//! JSON web service tracking a puppy's growth, vaccinations, vitals and
//! feeding. Configures TLS, the identity cookie, CORS and route handling.

#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod core;
pub mod front;
pub mod logger;
pub mod metric;
pub mod models;
pub mod repo;
pub mod utils;

use anyhow::Context;
use logfire::config::{MetricsOptions, SendToLogfire};
use ntex::web;
use ntex_cors::Cors;
use ntex_identity::IdentityService;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    config::init_config()?;

    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;

    // Traces and metrics only leave the process when a token is configured
    let mut logfire_config = logfire::configure()
        .install_panic_handler()
        .with_metrics(Some(MetricsOptions::default()))
        .send_to_logfire(SendToLogfire::IfTokenPresent);
    if let Some(token) = &app_config.logfire_token {
        logfire_config = logfire_config.with_token(token);
    }
    let shutdown_handler = logfire_config.finish()?;

    if !app_config.is_prod() {
        if let Err(e) = logger::setup_simple_logger() {
            logfire::warn!("console logger not installed: {error}", error = e.to_string());
        }
    }

    let sqlite_repo = repo::sqlite::SqlxSqliteRepo {
        db_pool: utils::setup_sqlite_db_pool(app_config.is_prod()).await?,
    };

    configure_and_run_server(sqlite_repo).await?;

    shutdown_handler.shutdown()?;

    Ok(())
}

/// Configures SSL acceptor for production environments
fn setup_ssl_acceptor() -> anyhow::Result<openssl::ssl::SslAcceptorBuilder> {
    let mut ssl_acceptor = SslAcceptor::mozilla_intermediate(SslMethod::tls_server())
        .map_err(|e| anyhow::anyhow!("Failed to create SSL acceptor: {}", e))?;

    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;
    ssl_acceptor
        .set_private_key_file(&app_config.private_key_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load private key from {}: {}",
                app_config.private_key_path,
                e
            )
        })?;

    ssl_acceptor
        .set_certificate_file(&app_config.certificate_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load certificate from {}: {}",
                app_config.certificate_path,
                e
            )
        })?;

    Ok(ssl_acceptor)
}

/// Configures and starts the web server with appropriate SSL settings
async fn configure_and_run_server(sqlite_repo: repo::sqlite::SqlxSqliteRepo) -> anyhow::Result<()> {
    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;
    let server_addr = ("0.0.0.0", app_config.web_server_port);

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS", "PUT", "DELETE"])
                    .allowed_origin(&app_config.allowed_origin)
                    .allowed_header(consts::TIMEZONE_HEADER)
                    .supports_credentials()
                    .finish(),
            )
            .wrap(IdentityService::new(front::middleware::owner::identity_policy(
                app_config.identity_key.as_bytes(),
                &app_config.web_server_host,
                app_config.is_prod(),
            )))
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(front::AppState {
                repo: Box::new(sqlite_repo.clone()),
            })
            .configure(front::routes::reference)
            .configure(front::routes::puppy)
            .default_service(web::route().to(|| async {
                Err::<web::HttpResponse, web::Error>(front::errors::UserError::NotFound.into())
            }))
    });

    let bound_server = if app_config.is_prod() {
        let ssl_acceptor = setup_ssl_acceptor()?;
        server.bind_openssl(server_addr, ssl_acceptor)?
    } else {
        server.bind(server_addr)?
    };

    bound_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
