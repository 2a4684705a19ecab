//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Presence source error: {0}")]
    PresenceSource(String),

    #[error("Notification error: {0}")]
    Notify(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid stats window: {0} hours")]
    InvalidWindow(u32),
}

impl DomainError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
            Self::PresenceSource(_) => "PRESENCE_SOURCE_ERROR",
            Self::Notify(_) => "NOTIFY_ERROR",
            Self::InvalidWindow(_) => "INVALID_WINDOW",
        }
    }

    /// Check if this is a storage failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidWindow(_))
    }
}
