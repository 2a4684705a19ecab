//! Collaborator traits (ports) - external systems the watcher talks to

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::PresenceState;

/// Source of presence observations for the tracked identity.
///
/// A failed check means the cycle is skipped; it never records a sample.
#[async_trait]
pub trait PresenceSource: Send + Sync {
    /// Observe the current presence state
    async fn check_status(&self) -> Result<PresenceState, DomainError>;

    /// Human-readable name of the tracked identity.
    ///
    /// Best effort; falls back to the configured raw identifier when the
    /// source knows nothing better.
    fn display_name(&self) -> String;
}

/// Outbound notification channel for presence transitions.
///
/// Delivery is at-least-once across restarts; failures are logged and
/// swallowed by the caller, never retried.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announce that the tracked identity came online at `at`
    async fn notify_online(&self, at: DateTime<Utc>) -> Result<(), DomainError>;
}
