use chrono::{Duration, Utc};
use tracing::instrument;
use vigil_core::{DomainError, PresenceState};

use super::context::ServiceContext;
use crate::dto::{ActivityStats, CurrentStatus, SessionStat};

/// Read-side queries over the recorded samples and sessions.
pub struct StatusService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatusService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current presence derived from stored state, not from a live probe.
    ///
    /// The identity counts as online only when the latest sample is online
    /// AND an active session exists; either signal alone is a transient
    /// state between poll cycles and reports as offline.
    #[instrument(skip(self))]
    pub async fn current_status(&self) -> Result<CurrentStatus, DomainError> {
        let latest = self.ctx.samples().find_latest().await?;

        if let Some(sample) = &latest {
            if sample.is_online() {
                if let Some(active) = self.ctx.sessions().find_active().await? {
                    return Ok(CurrentStatus {
                        state: PresenceState::Online,
                        since: Some(active.started_at),
                        last_seen: None,
                    });
                }
            }
        }

        Ok(CurrentStatus {
            state: PresenceState::Offline,
            since: None,
            last_seen: latest.map(|s| s.observed_at),
        })
    }

    /// Sessions that touched the last `window_hours` hours, oldest first.
    ///
    /// A session that started before the window but is still active is
    /// included in full. The active session reports the query time as its
    /// end and a live duration.
    #[instrument(skip(self))]
    pub async fn stats(&self, window_hours: u32) -> Result<ActivityStats, DomainError> {
        if window_hours == 0 {
            return Err(DomainError::InvalidWindow(window_hours));
        }

        let now = Utc::now();
        let cutoff = now - Duration::hours(i64::from(window_hours));
        let sessions = self.ctx.sessions().find_since(cutoff).await?;

        let sessions: Vec<SessionStat> = sessions
            .iter()
            .map(|session| SessionStat {
                started_at: session.started_at,
                ended_at: session.ended_at.unwrap_or(now),
                duration_minutes: session.duration_minutes_at(now),
            })
            .collect();
        let total_minutes = sessions.iter().map(|s| i64::from(s.duration_minutes)).sum();

        Ok(ActivityStats {
            window_hours,
            sessions,
            total_minutes,
        })
    }
}
