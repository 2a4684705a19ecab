//! Value objects - immutable types that represent domain concepts

mod presence_state;
mod session_id;

pub use presence_state::{ParsePresenceStateError, PresenceState};
pub use session_id::SessionId;
