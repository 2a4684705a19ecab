//! Status and stats query behavior
//!
//! Run with: cargo test -p integration-tests --test query_tests

use chrono::{Duration, Utc};
use integration_tests::{ts, TestContext};
use vigil_core::PresenceState::{Offline, Online};
use vigil_core::{PresenceState, Session};
use vigil_service::StatusService;

#[tokio::test]
async fn test_status_with_no_history_is_offline_without_last_seen() {
    let ctx = TestContext::new();

    let status = StatusService::new(&ctx.ctx).current_status().await.unwrap();

    assert_eq!(status.state, PresenceState::Offline);
    assert_eq!(status.since, None);
    assert_eq!(status.last_seen, None);
}

#[tokio::test]
async fn test_status_online_reports_session_start() {
    let ctx = TestContext::new();
    ctx.process(Online, ts(9, 5)).await.unwrap();
    ctx.process(Online, ts(9, 10)).await.unwrap();

    let status = StatusService::new(&ctx.ctx).current_status().await.unwrap();

    assert!(status.is_online());
    assert_eq!(status.since, Some(ts(9, 5)));
    assert_eq!(status.last_seen, None);
}

#[tokio::test]
async fn test_status_offline_reports_last_seen() {
    let ctx = TestContext::new();
    ctx.process(Online, ts(9, 5)).await.unwrap();
    ctx.process(Offline, ts(9, 20)).await.unwrap();

    let status = StatusService::new(&ctx.ctx).current_status().await.unwrap();

    // The session is still open pending gap resolution, but the latest
    // sample wins: the identity reports as offline
    assert!(!status.is_online());
    assert_eq!(status.since, None);
    assert_eq!(status.last_seen, Some(ts(9, 20)));
}

#[tokio::test]
async fn test_stats_rejects_a_zero_window() {
    let ctx = TestContext::new();

    let err = StatusService::new(&ctx.ctx).stats(0).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_stats_sums_stored_and_live_durations() {
    let ctx = TestContext::new();
    let now = Utc::now();

    // One closed 15-minute session and one active session begun half an
    // hour ago
    let mut closed = Session::open(now - Duration::hours(2));
    closed.close(now - Duration::hours(2) + Duration::minutes(15));
    ctx.sessions.seed(closed);
    ctx.sessions.seed(Session::open(now - Duration::minutes(30)));

    let stats = StatusService::new(&ctx.ctx).stats(24).await.unwrap();

    assert_eq!(stats.sessions.len(), 2);
    assert_eq!(stats.sessions[0].duration_minutes, 15);
    assert_eq!(stats.sessions[1].duration_minutes, 30);
    assert_eq!(stats.total_minutes, 45);

    // The active session reports the query time as its end
    assert!(stats.sessions[1].ended_at >= now);
}

#[tokio::test]
async fn test_stats_orders_sessions_chronologically() {
    let ctx = TestContext::new();
    let now = Utc::now();

    for hours_ago in [2, 8, 5] {
        let started = now - Duration::hours(hours_ago);
        let mut session = Session::open(started);
        session.close(started + Duration::minutes(10));
        ctx.sessions.seed(session);
    }

    let stats = StatusService::new(&ctx.ctx).stats(24).await.unwrap();

    let starts: Vec<_> = stats.sessions.iter().map(|s| s.started_at).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert_eq!(stats.total_minutes, 30);
}

#[tokio::test]
async fn test_stats_excludes_closed_sessions_outside_the_window() {
    let ctx = TestContext::new();
    let now = Utc::now();

    let mut old = Session::open(now - Duration::hours(30));
    old.close(now - Duration::hours(29));
    ctx.sessions.seed(old);

    let mut recent = Session::open(now - Duration::hours(3));
    recent.close(now - Duration::hours(3) + Duration::minutes(20));
    ctx.sessions.seed(recent);

    let stats = StatusService::new(&ctx.ctx).stats(24).await.unwrap();

    assert_eq!(stats.sessions.len(), 1);
    assert_eq!(stats.total_minutes, 20);
}

#[tokio::test]
async fn test_stats_includes_active_session_older_than_window_in_full() {
    let ctx = TestContext::new();
    let now = Utc::now();

    // Active since well before the 24-hour window opened
    ctx.sessions.seed(Session::open(now - Duration::hours(80)));

    let stats = StatusService::new(&ctx.ctx).stats(24).await.unwrap();

    // The start is never clipped to the window boundary; the whole live
    // duration counts
    assert_eq!(stats.sessions.len(), 1);
    let expected = i64::from(80 * 60);
    assert!(
        (stats.total_minutes - expected).abs() <= 1,
        "expected ~{expected} minutes, got {}",
        stats.total_minutes
    );
}
