use tracing::{error, info};
use users_api::infrastructure::config::Config;
use users_api::infrastructure::logging::init_logging;
use users_api::startup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    info!(
        database_url = %config.database_url_masked(),
        bind_addr = %config.bind_addr,
        insert_timeout = ?config.insert_timeout,
        "Configuration loaded"
    );

    if let Err(err) = startup::run(config).await {
        error!(error = %format!("{err:#}"), "Service stopped with a fatal error");
        return Err(err);
    }

    info!("Service stopped");
    Ok(())
}
