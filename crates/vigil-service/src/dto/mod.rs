//! Data transfer objects returned by the query services.

pub mod responses;

pub use responses::{ActivityStats, CurrentStatus, SessionStat};
