//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{PresenceSample, Session};
use crate::error::DomainError;
use crate::value_objects::SessionId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Sample Repository
// ============================================================================

#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Append one observation to the sample log
    async fn append(&self, sample: &PresenceSample) -> RepoResult<()>;

    /// Most recent observation, if any
    async fn find_latest(&self) -> RepoResult<Option<PresenceSample>>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a new session row, returning the assigned id
    async fn create(&self, session: &Session) -> RepoResult<SessionId>;

    /// Find the active session (no recorded end), if any
    async fn find_active(&self) -> RepoResult<Option<Session>>;

    /// Persist the end time and duration of a closed session
    async fn update(&self, session: &Session) -> RepoResult<()>;

    /// Sessions started at or after `cutoff`, plus the active session
    /// even when it started earlier, ordered by start time ascending
    async fn find_since(&self, cutoff: DateTime<Utc>) -> RepoResult<Vec<Session>>;
}
