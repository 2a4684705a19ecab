//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context and configuration.

use std::sync::Arc;

use vigil_common::AppConfig;
use vigil_core::PresenceSource;
use vigil_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Presence source, shared with the poll loop
    source: Arc<dyn PresenceSource>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        source: Arc<dyn PresenceSource>,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            source,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the shared presence source handle
    pub fn presence_source(&self) -> &Arc<dyn PresenceSource> {
        &self.source
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Name used when rendering command replies
    pub fn display_name(&self) -> String {
        self.source.display_name()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish_non_exhaustive()
    }
}
