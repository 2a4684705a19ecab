//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in vigil-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod sample;
mod session;

pub use sample::PgSampleRepository;
pub use session::PgSessionRepository;
