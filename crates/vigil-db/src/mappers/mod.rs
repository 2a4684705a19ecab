//! Entity to model mappers
//!
//! This module provides conversions between domain entities (vigil-core) and database models.
//! `From<Model> for Entity` converts database rows to domain objects.

mod sample;
mod session;

pub use sample::parse_presence_state;
