//! Application layer for the presence watcher.
//!
//! Coordinates domain logic over the repository traits defined in
//! `vigil-core`: folding presence samples into sessions, answering
//! status and activity queries, and deciding when a transition is
//! worth a notification. Everything here is storage-agnostic and
//! exercised against in-memory fakes in the integration tests.

pub mod dto;
pub mod services;

// Re-export commonly used types
pub use dto::{ActivityStats, CurrentStatus, SessionStat};
pub use services::{
    MissingDependency, NotificationService, ServiceContext, ServiceContextBuilder,
    SessionAggregator, StatusService,
};
