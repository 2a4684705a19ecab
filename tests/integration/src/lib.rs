//! Integration test utilities for the presence watcher
//!
//! This crate provides in-memory fakes for the storage and collaborator
//! ports plus helpers for running the command surface against them.


pub use fakes::*;
pub use helpers::*;
