//! Session entity - one contiguous period of considered-online time

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::SessionId;

/// Maximum offline gap, in minutes, that does not break session continuity
pub const GAP_TOLERANCE_MINUTES: i64 = 3;

/// Gap tolerance as a chrono duration
#[inline]
pub fn gap_tolerance() -> Duration {
    Duration::minutes(GAP_TOLERANCE_MINUTES)
}

/// Round the span between two instants to whole minutes (half-minute rounds up)
pub fn round_span_minutes(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> i32 {
    let millis = (ended_at - started_at).num_milliseconds();
    (millis + 30_000).div_euclid(60_000) as i32
}

/// One contiguous online session.
///
/// Invariants:
/// - At most one session is active (`ended_at = None`) at any time.
/// - `ended_at`, when present, is always >= `started_at`.
/// - A closed session is never re-opened; presence after a gap starts a
///   new session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
}

impl Session {
    /// Open a new session starting at the given instant.
    ///
    /// The id is zero until the store assigns one on insert.
    pub fn open(started_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::default(),
            started_at,
            ended_at: None,
            duration_minutes: None,
        }
    }

    /// Check if the session is still active (no recorded end)
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Close the session at the given instant, recording the rounded duration
    pub fn close(&mut self, ended_at: DateTime<Utc>) {
        self.ended_at = Some(ended_at);
        self.duration_minutes = Some(round_span_minutes(self.started_at, ended_at));
    }

    /// Duration in whole minutes as of `now`.
    ///
    /// Closed sessions report their stored duration; an active session
    /// reports the live span from its start to `now`.
    pub fn duration_minutes_at(&self, now: DateTime<Utc>) -> i32 {
        match self.duration_minutes {
            Some(minutes) if self.ended_at.is_some() => minutes,
            _ => round_span_minutes(self.started_at, now),
        }
    }
}
