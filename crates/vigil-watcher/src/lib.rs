//! # vigil-watcher
//!
//! Watcher runtime: jittered poll loop driving the aggregation engine,
//! concrete presence-source and notifier adapters, and the Axum text
//! command surface.

pub mod commands;
pub mod handlers;
pub mod notifiers;
pub mod poller;
pub mod routes;
pub mod server;
pub mod sources;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
