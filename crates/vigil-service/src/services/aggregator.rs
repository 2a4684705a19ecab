use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use vigil_core::{gap_tolerance, DomainError, PresenceSample, PresenceState, Session};

use super::context::ServiceContext;

/// Folds the stream of presence samples into online sessions.
///
/// Short offline gaps are treated as connectivity blips: a session only
/// closes when the identity comes back online after a gap longer than
/// [`vigil_core::GAP_TOLERANCE_MINUTES`], and it closes retroactively at
/// the first offline observation of that gap. A lone offline sample
/// never closes anything by itself, so a session that ends with the
/// process stopped stays open until the next online observation (or
/// forever, which the status queries account for).
pub struct SessionAggregator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionAggregator<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Records one observation and applies any session transition it implies.
    ///
    /// Samples that are not strictly newer than the latest stored one are
    /// ignored, so replaying an observation after a crash is harmless.
    #[instrument(skip(self))]
    pub async fn process_sample(
        &self,
        state: PresenceState,
        observed_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let prior = self.ctx.samples().find_latest().await?;

        if let Some(prior) = &prior {
            if observed_at <= prior.observed_at {
                debug!(
                    observed_at = %observed_at,
                    latest = %prior.observed_at,
                    "Sample not newer than the latest stored one, skipping"
                );
                return Ok(());
            }
        }

        if state.is_online() {
            self.advance_online(prior.as_ref(), observed_at).await?;
        } else {
            debug!(observed_at = %observed_at, "Offline observed, awaiting gap resolution");
        }

        self.ctx
            .samples()
            .append(&PresenceSample::new(observed_at, state))
            .await?;

        Ok(())
    }

    /// Handles an online observation: opens a session, continues the
    /// active one, or rolls it over after a long gap.
    async fn advance_online(
        &self,
        prior: Option<&PresenceSample>,
        observed_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let Some(active) = self.ctx.sessions().find_active().await? else {
            self.open_session(observed_at).await?;
            return Ok(());
        };

        match prior {
            // An offline observation can only end a session that was
            // already running when it was taken.
            Some(prior) if prior.state.is_offline() && prior.observed_at >= active.started_at => {
                let gap = observed_at - prior.observed_at;
                if gap <= gap_tolerance() {
                    debug!(
                        session_id = %active.id,
                        gap_seconds = gap.num_seconds(),
                        "Offline gap within tolerance, session continues"
                    );
                } else {
                    let mut closed = active;
                    closed.close(prior.observed_at);
                    self.ctx.sessions().update(&closed).await?;
                    info!(
                        session_id = %closed.id,
                        ended_at = %prior.observed_at,
                        duration_minutes = closed.duration_minutes.unwrap_or(0),
                        "Session closed after offline gap"
                    );
                    self.open_session(observed_at).await?;
                }
            }
            _ => {
                debug!(session_id = %active.id, "Still online, session continues");
            }
        }

        Ok(())
    }

    async fn open_session(&self, started_at: DateTime<Utc>) -> Result<(), DomainError> {
        let session = Session::open(started_at);
        let id = self.ctx.sessions().create(&session).await?;
        info!(session_id = %id, started_at = %started_at, "Session opened");
        Ok(())
    }
}
