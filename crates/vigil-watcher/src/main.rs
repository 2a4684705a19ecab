//! Presence watcher entry point
//!
//! Run with:
//! ```bash
//! cargo run -p vigil-watcher
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use vigil_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Initialize tracing
    let tracing_config = match std::env::var("APP_ENV").as_deref() {
        Ok("production") => TracingConfig::production(),
        _ => TracingConfig::development(),
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the watcher
    if let Err(e) = run().await {
        error!(error = %e, "Watcher failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting presence watcher...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        target = %config.watcher.target_id,
        port = config.server.port,
        "Configuration loaded"
    );

    // Run the poll loop and the command surface
    vigil_watcher::run(config).await?;

    Ok(())
}
