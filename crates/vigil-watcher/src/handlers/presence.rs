//! Status, stats and help handlers
//!
//! Thin wrappers over the query service; all rendering lives in the
//! `commands` module.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::error;
use vigil_core::DomainError;
use vigil_service::StatusService;

use crate::commands::{self, StatsWindow};
use crate::state::AppState;

/// Current presence of the tracked identity
///
/// GET /status
pub async fn get_status(State(state): State<AppState>) -> Result<String, (StatusCode, String)> {
    let service = StatusService::new(state.service_context());
    let status = service
        .current_status()
        .await
        .map_err(domain_error_response)?;

    Ok(commands::render_status(&state.display_name(), &status))
}

/// Session listing for a whitelisted window
///
/// GET /stats/:hours
pub async fn get_stats(
    State(state): State<AppState>,
    Path(hours): Path<u32>,
) -> Result<String, (StatusCode, String)> {
    let window = StatsWindow::parse(hours).map_err(|usage| (StatusCode::BAD_REQUEST, usage))?;

    let service = StatusService::new(state.service_context());
    let stats = service
        .stats(window.hours())
        .await
        .map_err(domain_error_response)?;

    Ok(commands::render_stats(&state.display_name(), &stats))
}

/// Command overview
///
/// GET /help
pub async fn get_help() -> String {
    commands::render_help()
}

fn domain_error_response(e: DomainError) -> (StatusCode, String) {
    error!(error = %e, code = e.code(), "Command query failed");

    let status = if e.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, format!("Error: {e}"))
}
