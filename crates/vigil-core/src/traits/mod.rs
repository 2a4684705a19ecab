//! Ports - traits the domain layer needs implemented by infrastructure

mod collaborators;
mod repositories;

pub use collaborators::{Notifier, PresenceSource};
pub use repositories::{RepoResult, SampleRepository, SessionRepository};
