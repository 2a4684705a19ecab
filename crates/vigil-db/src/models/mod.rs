//! Database models - SQLx-compatible structs for PostgreSQL tables

mod sample;
mod session;

pub use sample::SampleModel;
pub use session::SessionModel;
