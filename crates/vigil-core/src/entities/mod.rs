//! Domain entities - core business objects

mod sample;
mod session;

pub use sample::PresenceSample;
pub use session::{gap_tolerance, round_span_minutes, Session, GAP_TOLERANCE_MINUTES};
