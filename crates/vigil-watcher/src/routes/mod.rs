//! Route definitions
//!
//! The full command surface plus the health endpoint.

use axum::{routing::get, Router};

use crate::handlers::{health, presence};
use crate::state::AppState;

/// Create the router with all command routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/status", get(presence::get_status))
        .route("/stats/:hours", get(presence::get_stats))
        .route("/help", get(presence::get_help))
}
