//! Presence sample entity - one timestamped online/offline observation

use chrono::{DateTime, Utc};

use crate::value_objects::PresenceState;

/// A single presence observation.
///
/// Samples are append-only facts: once recorded they are never mutated
/// or deleted. The most recent sample is the source of truth for "what
/// was the last known state and when".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceSample {
    pub observed_at: DateTime<Utc>,
    pub state: PresenceState,
}

impl PresenceSample {
    /// Create a new sample for the given observation
    pub const fn new(observed_at: DateTime<Utc>, state: PresenceState) -> Self {
        Self { observed_at, state }
    }

    /// Check if the observed state was online
    #[inline]
    pub const fn is_online(&self) -> bool {
        self.state.is_online()
    }
}
