//! Jittered polling loop driving the aggregation engine.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use vigil_core::PresenceSource;
use vigil_service::{NotificationService, ServiceContext, SessionAggregator};

/// Poll scheduling bounds in seconds.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub min_interval_secs: u64,
    pub max_interval_secs: u64,
}

impl PollConfig {
    #[must_use]
    pub const fn new(min_interval_secs: u64, max_interval_secs: u64) -> Self {
        Self {
            min_interval_secs,
            max_interval_secs,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: 60,
            max_interval_secs: 120,
        }
    }
}

/// Background loop that samples presence at a jittered interval.
///
/// Exactly one cycle runs at a time; the next is scheduled only after
/// the previous one fully completes, which is what guarantees the
/// at-most-one-active-session invariant without any locking. The wait
/// between cycles is drawn uniformly from the configured bounds so the
/// probe sees no fixed cadence.
pub struct PollLoop {
    ctx: ServiceContext,
    source: Arc<dyn PresenceSource>,
    config: PollConfig,
}

impl PollLoop {
    pub fn new(ctx: ServiceContext, source: Arc<dyn PresenceSource>, config: PollConfig) -> Self {
        Self {
            ctx,
            source,
            config,
        }
    }

    /// Spawn the loop onto the runtime and return its control handle.
    #[must_use]
    pub fn spawn(self) -> PollHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(stop_rx));
        PollHandle {
            stop: stop_tx,
            task,
        }
    }

    async fn run(self, mut stop: watch::Receiver<bool>) {
        info!(
            min_secs = self.config.min_interval_secs,
            max_secs = self.config.max_interval_secs,
            "Poll loop started"
        );

        loop {
            if *stop.borrow() {
                break;
            }

            self.poll_once().await;

            let delay = jittered_delay(self.config);
            debug!(delay_secs = delay.as_secs(), "Next poll scheduled");

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                result = stop.changed() => {
                    // A dropped sender leaves nobody to stop the loop
                    if result.is_err() {
                        break;
                    }
                }
            }
        }

        info!("Poll loop stopped");
    }

    /// One complete cycle: probe, persist, notify.
    ///
    /// Any failure aborts this cycle only; the loop always reaches the
    /// next scheduling step.
    async fn poll_once(&self) {
        let state = match self.source.check_status().await {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Presence check failed, skipping cycle");
                return;
            }
        };

        let observed_at = Utc::now();

        // The sample recorded before this observation decides whether
        // the transition is notifiable.
        let prior = match self.ctx.samples().find_latest().await {
            Ok(prior) => prior,
            Err(e) => {
                warn!(error = %e, "Failed to read latest sample, skipping cycle");
                return;
            }
        };

        if let Err(e) = SessionAggregator::new(&self.ctx)
            .process_sample(state, observed_at)
            .await
        {
            warn!(error = %e, "Failed to record sample, skipping cycle");
            return;
        }

        NotificationService::new(&self.ctx)
            .handle_transition(prior.as_ref(), state, observed_at)
            .await;
    }
}

/// Uniform draw from the configured interval.
fn jittered_delay(config: PollConfig) -> Duration {
    let mut rng = rand::thread_rng();
    let secs = rng.gen_range(config.min_interval_secs..=config.max_interval_secs);
    Duration::from_secs(secs)
}

/// Control handle for a spawned [`PollLoop`].
pub struct PollHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Signal the loop to stop once its current cycle completes.
    pub fn shutdown(&self) {
        let _ = self.stop.send(true);
    }

    /// Wait for the loop task to finish.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}
