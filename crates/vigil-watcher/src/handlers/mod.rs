//! HTTP handlers for the command surface.

pub mod health;
pub mod presence;
