use chrono::{DateTime, Utc};
use vigil_core::PresenceState;

// ============================================================================
// Status
// ============================================================================

/// Snapshot of the tracked identity's presence at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentStatus {
    pub state: PresenceState,
    /// Start of the active session, when online.
    pub since: Option<DateTime<Utc>>,
    /// Timestamp of the most recent sample, when offline.
    pub last_seen: Option<DateTime<Utc>>,
}

impl CurrentStatus {
    pub const fn is_online(&self) -> bool {
        self.state.is_online()
    }
}

// ============================================================================
// Activity stats
// ============================================================================

/// One session inside a stats window. An active session reports the
/// query time as its end, so `ended_at` is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStat {
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// Sessions that touched a lookback window, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityStats {
    pub window_hours: u32,
    pub sessions: Vec<SessionStat>,
    pub total_minutes: i64,
}

impl ActivityStats {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
