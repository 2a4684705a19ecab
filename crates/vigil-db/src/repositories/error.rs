//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use vigil_core::error::DomainError;
use vigil_core::value_objects::SessionId;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Create an error for an update that matched no session row
pub fn session_not_found(id: SessionId) -> DomainError {
    DomainError::Storage(format!("Session not found: {id}"))
}
