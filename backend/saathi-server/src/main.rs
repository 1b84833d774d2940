use saathi_db::{SqliteIdentityProvider, SqliteProfileStore};
use saathi_server::cli::{Cli, Command};
use saathi_server::{AppState, bootstrap, build_router, logger, maintenance};

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load and validate configuration
    let config = saathi_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting saathi-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = saathi_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let provider_config = bootstrap::identity_provider_config(&config)
        .ok_or("auth.jwt_secret is required (set SAATHI_AUTH_JWT_SECRET)")?;
    let identity = Arc::new(SqliteIdentityProvider::new(pool.clone(), provider_config));

    let command = cli.command.unwrap_or(Command::Serve);
    if !matches!(command, Command::Serve) {
        maintenance::run(&command, &identity).await?;
        pool.close().await;
        return Ok(());
    }

    let store = Arc::new(SqliteProfileStore::new(pool.clone()));
    let app_state = AppState::new(identity, store, bootstrap::profile_settings(&config));
    let app = build_router(app_state, &config.server.cors_origins);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    pool.close().await;
    info!("Shutdown complete");

    Ok(())
}
