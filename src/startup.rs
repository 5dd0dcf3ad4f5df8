use crate::application::service::UserService;
use crate::data::postgres::PgUserRepository;
use crate::infrastructure::config::Config;
use crate::infrastructure::database::Database;
use crate::presentation::handlers::AppState;
use crate::presentation::middleware::RequestLogging;
use crate::presentation::routes::configure;
use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Runs the service until the HTTP server stops. Startup failures are
/// returned to the caller; nothing here exits the process.
pub async fn run(config: Config) -> Result<()> {
    let database = Database::initialize(&config)
        .await
        .context("Database startup check failed")?;

    let repository = Arc::new(PgUserRepository::new(database.pool().clone()));
    let state = web::Data::new(AppState {
        service: UserService::new(repository, config.insert_timeout),
    });

    let server = HttpServer::new(move || {
        tracing::trace!("Creating new application instance");
        App::new()
            .app_data(state.clone())
            .wrap(RequestLogging)
            .configure(configure)
    })
    .bind(config.bind_addr)
    .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!(address = %config.bind_addr, routes = "POST /users", "Starting HTTP server");
    let outcome = server.run().await;

    // Reached on graceful shutdown (SIGINT/SIGTERM) or server error.
    database.close().await;
    outcome.context("HTTP server terminated with an error")
}
