//! Session aggregation engine behavior
//!
//! Every test drives `SessionAggregator::process_sample` against the
//! in-memory stores and asserts on the persisted samples and sessions.
//!
//! Run with: cargo test -p integration-tests --test engine_tests

use chrono::Duration;
use integration_tests::{ts, TestContext};
use vigil_core::PresenceState::{self, Offline, Online};

#[tokio::test]
async fn test_first_online_sample_opens_a_session() {
    let ctx = TestContext::new();

    ctx.process(Online, ts(9, 5)).await.unwrap();

    let sessions = ctx.sessions.all();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].started_at, ts(9, 5));
    assert!(sessions[0].is_active());
    assert_eq!(ctx.samples.len(), 1);
}

#[tokio::test]
async fn test_single_offline_sample_touches_no_session() {
    let ctx = TestContext::new();

    ctx.process(Offline, ts(9, 0)).await.unwrap();

    assert!(ctx.sessions.is_empty());
    assert_eq!(ctx.samples.len(), 1);
    assert_eq!(ctx.samples.all()[0].observed_at, ts(9, 0));
}

#[tokio::test]
async fn test_offline_after_online_leaves_session_open() {
    let ctx = TestContext::new();

    ctx.process(Online, ts(9, 5)).await.unwrap();
    ctx.process(Offline, ts(9, 10)).await.unwrap();

    // Closing is deferred until the next online sample resolves the gap
    let sessions = ctx.sessions.all();
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].is_active());
}

#[tokio::test]
async fn test_short_offline_blip_does_not_fragment_a_session() {
    let ctx = TestContext::new();

    // 10:00 online, 10:01 offline, 10:02 online: gap of one minute
    ctx.process(Online, ts(10, 0)).await.unwrap();
    ctx.process(Offline, ts(10, 1)).await.unwrap();
    ctx.process(Online, ts(10, 2)).await.unwrap();

    let sessions = ctx.sessions.all();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].started_at, ts(10, 0));
    assert!(sessions[0].is_active());
}

#[tokio::test]
async fn test_gap_of_exactly_the_tolerance_continues() {
    let ctx = TestContext::new();

    ctx.process(Online, ts(9, 0)).await.unwrap();
    ctx.process(Offline, ts(9, 10)).await.unwrap();
    // Exactly three minutes after the offline sample
    ctx.process(Online, ts(9, 13)).await.unwrap();

    let sessions = ctx.sessions.all();
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].is_active());
}

#[tokio::test]
async fn test_long_gap_closes_and_reopens() {
    let ctx = TestContext::new();

    // The reference sequence: 09:00 off, 09:05 on, 09:10 on,
    // 09:20 off, 09:25 on
    ctx.process(Offline, ts(9, 0)).await.unwrap();
    ctx.process(Online, ts(9, 5)).await.unwrap();
    ctx.process(Online, ts(9, 10)).await.unwrap();
    ctx.process(Offline, ts(9, 20)).await.unwrap();
    ctx.process(Online, ts(9, 25)).await.unwrap();

    let sessions = ctx.sessions.all();
    assert_eq!(sessions.len(), 2);

    // Session A closed retroactively at the last offline observation
    assert_eq!(sessions[0].started_at, ts(9, 5));
    assert_eq!(sessions[0].ended_at, Some(ts(9, 20)));
    assert_eq!(sessions[0].duration_minutes, Some(15));

    // Session B opened across the gap
    assert_eq!(sessions[1].started_at, ts(9, 25));
    assert!(sessions[1].is_active());

    assert_eq!(ctx.samples.len(), 5);
}

#[tokio::test]
async fn test_at_most_one_active_session_throughout() {
    let ctx = TestContext::new();

    let script: [(PresenceState, u32); 10] = [
        (Offline, 0),
        (Online, 5),
        (Online, 10),
        (Offline, 12),
        (Online, 14),
        (Offline, 20),
        (Online, 30),
        (Online, 35),
        (Offline, 40),
        (Online, 50),
    ];

    for (state, minute) in script {
        ctx.process(state, ts(9, minute)).await.unwrap();
        assert!(
            ctx.sessions.active_count() <= 1,
            "more than one active session after minute {minute}"
        );
    }

    // 09:14 rejoined within tolerance; 09:30 and 09:50 crossed it
    assert_eq!(ctx.sessions.len(), 3);
    assert_eq!(ctx.sessions.active_count(), 1);
}

#[tokio::test]
async fn test_closed_duration_rounds_to_nearest_minute() {
    let ctx = TestContext::new();

    ctx.process(Online, ts(9, 0)).await.unwrap();
    // Last known online-adjacent moment lands on a half minute
    ctx.process(Offline, ts(9, 14) + Duration::seconds(30))
        .await
        .unwrap();
    ctx.process(Online, ts(9, 25)).await.unwrap();

    let sessions = ctx.sessions.all();
    assert_eq!(sessions[0].ended_at, Some(ts(9, 14) + Duration::seconds(30)));
    assert_eq!(sessions[0].duration_minutes, Some(15));
}

#[tokio::test]
async fn test_replayed_sample_is_a_no_op() {
    let ctx = TestContext::new();

    ctx.process(Online, ts(9, 5)).await.unwrap();
    // Crash-and-retry replays the exact same observation
    ctx.process(Online, ts(9, 5)).await.unwrap();

    assert_eq!(ctx.samples.len(), 1);
    assert_eq!(ctx.sessions.len(), 1);
}

#[tokio::test]
async fn test_regressed_timestamp_is_ignored() {
    let ctx = TestContext::new();

    ctx.process(Online, ts(9, 10)).await.unwrap();
    ctx.process(Offline, ts(9, 5)).await.unwrap();

    // The stale observation recorded nothing
    assert_eq!(ctx.samples.len(), 1);
    assert!(ctx.samples.all()[0].is_online());
}

#[tokio::test]
async fn test_restart_mid_gap_recovers_from_the_stores() {
    let first = TestContext::new();

    first.process(Online, ts(9, 5)).await.unwrap();
    first.process(Offline, ts(9, 20)).await.unwrap();

    // Simulate a process restart: a fresh service context over the same
    // persisted state, with nothing carried over in memory
    let restarted = TestContext {
        samples: first.samples.clone(),
        sessions: first.sessions.clone(),
        notifier: first.notifier.clone(),
        ctx: vigil_service::ServiceContext::new(
            first.samples.clone() as _,
            first.sessions.clone() as _,
            first.notifier.clone() as _,
        ),
    };

    restarted.process(Online, ts(9, 25)).await.unwrap();

    // The gap computation survived the restart
    let sessions = restarted.sessions.all();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].ended_at, Some(ts(9, 20)));
    assert_eq!(sessions[1].started_at, ts(9, 25));
}

#[tokio::test]
async fn test_storage_failure_aborts_the_call_without_partial_writes() {
    let ctx = TestContext::new();

    ctx.sessions.set_failing(true);
    let err = ctx.process(Online, ts(9, 5)).await.unwrap_err();
    assert!(err.is_storage());

    // The sample append comes after the session transition, so a failed
    // transition leaves no half-recorded cycle behind
    assert!(ctx.samples.is_empty());
    assert!(ctx.sessions.is_empty());

    // The same observation succeeds once storage recovers
    ctx.sessions.set_failing(false);
    ctx.process(Online, ts(9, 5)).await.unwrap();
    assert_eq!(ctx.sessions.len(), 1);
    assert_eq!(ctx.samples.len(), 1);
}
