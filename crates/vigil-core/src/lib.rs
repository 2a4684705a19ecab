//! # vigil-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{gap_tolerance, round_span_minutes, PresenceSample, Session, GAP_TOLERANCE_MINUTES};
pub use error::DomainError;
pub use traits::{Notifier, PresenceSource, RepoResult, SampleRepository, SessionRepository};
pub use value_objects::{ParsePresenceStateError, PresenceState, SessionId};
