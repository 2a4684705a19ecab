//! Poll loop behavior: cycles, error skips, notification, shutdown
//!
//! The loop runs with a zero-length interval so a short real-time wait
//! covers many cycles; assertions avoid depending on the exact count.
//!
//! Run with: cargo test -p integration-tests --test poller_tests

use std::sync::Arc;
use std::time::Duration;

use integration_tests::{ScriptedPresenceSource, TestContext};
use tokio::time::timeout;
use vigil_core::DomainError;
use vigil_core::PresenceState::{Offline, Online};
use vigil_watcher::poller::{PollConfig, PollLoop};

fn tight_interval() -> PollConfig {
    PollConfig::new(0, 0)
}

#[tokio::test]
async fn test_loop_records_samples_and_opens_a_session() {
    let ctx = TestContext::new();
    let source = Arc::new(ScriptedPresenceSource::constant(Online));

    let handle = PollLoop::new(ctx.ctx.clone(), source, tight_interval()).spawn();
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.shutdown();
    timeout(Duration::from_secs(1), handle.join())
        .await
        .expect("loop did not stop");

    assert!(!ctx.samples.is_empty());
    assert!(ctx.samples.all().iter().all(|s| s.is_online()));
    // Continuously online means exactly one session, still active
    assert_eq!(ctx.sessions.len(), 1);
    assert_eq!(ctx.sessions.active_count(), 1);
}

#[tokio::test]
async fn test_loop_notifies_once_per_offline_to_online_transition() {
    let ctx = TestContext::new();
    let source = Arc::new(ScriptedPresenceSource::new(
        vec![Ok(Offline), Ok(Online)],
        Online,
    ));

    let handle = PollLoop::new(ctx.ctx.clone(), source, tight_interval()).spawn();
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.shutdown();
    timeout(Duration::from_secs(1), handle.join())
        .await
        .expect("loop did not stop");

    // One transition in the whole run, however many cycles happened
    assert_eq!(ctx.notifier.count(), 1);
    assert!(!ctx.samples.all()[0].is_online());
}

#[tokio::test]
async fn test_first_online_run_does_not_notify() {
    let ctx = TestContext::new();
    let source = Arc::new(ScriptedPresenceSource::constant(Online));

    let handle = PollLoop::new(ctx.ctx.clone(), source, tight_interval()).spawn();
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.shutdown();
    timeout(Duration::from_secs(1), handle.join())
        .await
        .expect("loop did not stop");

    // No offline sample was ever recorded, so there was no edge
    assert_eq!(ctx.notifier.count(), 0);
}

#[tokio::test]
async fn test_failed_probe_skips_the_cycle() {
    let ctx = TestContext::new();
    let source = Arc::new(ScriptedPresenceSource::new(
        vec![
            Err(DomainError::PresenceSource("probe timeout".to_string())),
            Err(DomainError::PresenceSource("probe timeout".to_string())),
        ],
        Online,
    ));

    let handle = PollLoop::new(ctx.ctx.clone(), source, tight_interval()).spawn();
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.shutdown();
    timeout(Duration::from_secs(1), handle.join())
        .await
        .expect("loop did not stop");

    // The failed checks recorded nothing; the loop kept going and the
    // first stored sample comes from the first successful probe
    assert!(!ctx.samples.is_empty());
    assert!(ctx.samples.all()[0].is_online());
    assert_eq!(ctx.sessions.len(), 1);
}

#[tokio::test]
async fn test_storage_failure_does_not_stop_the_loop() {
    let ctx = TestContext::new();
    ctx.samples.set_failing(true);
    let source = Arc::new(ScriptedPresenceSource::constant(Online));

    let handle = PollLoop::new(ctx.ctx.clone(), source, tight_interval()).spawn();
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(ctx.samples.is_empty());

    // The loop survived the failing cycles and resumes recording
    ctx.samples.set_failing(false);
    tokio::time::sleep(Duration::from_millis(30)).await;
    handle.shutdown();
    timeout(Duration::from_secs(1), handle.join())
        .await
        .expect("loop did not stop");

    assert!(!ctx.samples.is_empty());
}

#[tokio::test]
async fn test_shutdown_interrupts_the_scheduled_wait() {
    let ctx = TestContext::new();
    let source = Arc::new(ScriptedPresenceSource::constant(Offline));

    // An hour-long interval: join only returns promptly if shutdown
    // wakes the sleeping loop
    let handle = PollLoop::new(ctx.ctx.clone(), source, PollConfig::new(3600, 3600)).spawn();
    tokio::time::sleep(Duration::from_millis(20)).await;
    handle.shutdown();

    timeout(Duration::from_secs(1), handle.join())
        .await
        .expect("loop did not stop");
}
