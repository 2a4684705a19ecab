use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};
use vigil_core::{PresenceSample, PresenceState};

use super::context::ServiceContext;

/// Decides whether an observation is a notifiable transition.
///
/// Only an offline-to-online edge qualifies. With no prior sample there
/// is no edge to report, and repeated online samples stay quiet.
pub fn is_online_transition(prior: Option<&PresenceSample>, state: PresenceState) -> bool {
    state.is_online() && matches!(prior, Some(p) if p.state.is_offline())
}

/// Fires the configured notifier on offline-to-online transitions.
///
/// Delivery is best effort: a failed attempt is logged and dropped, never
/// retried, and never fails the poll cycle that triggered it.
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// `prior` is the latest sample recorded before this observation.
    #[instrument(skip(self, prior))]
    pub async fn handle_transition(
        &self,
        prior: Option<&PresenceSample>,
        state: PresenceState,
        observed_at: DateTime<Utc>,
    ) {
        if !is_online_transition(prior, state) {
            return;
        }

        match self.ctx.notifier().notify_online(observed_at).await {
            Ok(()) => info!(observed_at = %observed_at, "Online notification sent"),
            Err(e) => warn!(error = %e, "Online notification failed"),
        }
    }
}
