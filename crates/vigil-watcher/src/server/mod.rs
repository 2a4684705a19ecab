//! Server setup and initialization
//!
//! Builds the dependency graph, spawns the poll loop, and runs the
//! HTTP command surface until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use vigil_common::{AppConfig, AppError};
use vigil_core::{Notifier, PresenceSource};
use vigil_db::{create_pool, init_schema, PgSampleRepository, PgSessionRepository};
use vigil_service::ServiceContextBuilder;

use crate::notifiers::{LogNotifier, WebhookNotifier};
use crate::poller::{PollConfig, PollLoop};
use crate::routes::create_router;
use crate::sources::HttpPresenceSource;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool and schema
    info!("Connecting to PostgreSQL...");
    let db_config = vigil_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    init_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // HTTP client shared by the probe and the webhook
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Collaborator adapters
    let source: Arc<dyn PresenceSource> = Arc::new(HttpPresenceSource::new(
        client.clone(),
        config.watcher.probe_url.clone(),
        config.watcher.target_id.clone(),
    ));
    let notifier: Arc<dyn Notifier> = match &config.watcher.webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(
            client,
            url.clone(),
            Arc::clone(&source),
        )),
        None => {
            info!("No webhook configured, notifications go to the log");
            Arc::new(LogNotifier::new(Arc::clone(&source)))
        }
    };

    // Create repositories
    let sample_repo = Arc::new(PgSampleRepository::new(pool.clone()));
    let session_repo = Arc::new(PgSessionRepository::new(pool));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .samples(sample_repo)
        .sessions(session_repo)
        .notifier(notifier)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, source, config))
}

/// Run the HTTP server until the shutdown signal fires
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

/// Run the complete watcher with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Spawn the poll loop
    let poll_config = PollConfig::new(
        state.config().watcher.poll_interval_min_secs,
        state.config().watcher.poll_interval_max_secs,
    );
    let poller = PollLoop::new(
        state.service_context().clone(),
        Arc::clone(state.presence_source()),
        poll_config,
    );
    let handle = poller.spawn();

    // Run the command surface
    let app = create_app(state);
    let result = run_server(app, addr).await;

    // Let an in-flight cycle finish its writes before exiting
    handle.shutdown();
    handle.join().await;

    result
}
