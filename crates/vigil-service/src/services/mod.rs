//! Service layer implementations.

pub mod aggregator;
pub mod context;
pub mod notification;
pub mod status;

pub use aggregator::SessionAggregator;
pub use context::{MissingDependency, ServiceContext, ServiceContextBuilder};
pub use notification::NotificationService;
pub use status::StatusService;
