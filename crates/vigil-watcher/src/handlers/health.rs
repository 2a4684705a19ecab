//! Health check handler
//!
//! Liveness endpoint for the hosting platform.

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
