//! Presence sample entity <-> model mapper

use vigil_core::entities::PresenceSample;
use vigil_core::value_objects::PresenceState;

use crate::models::SampleModel;

/// Convert a database state string to PresenceState.
///
/// The column is only ever written from `PresenceState::as_str`, so
/// unknown text is treated as offline rather than failing the read.
pub fn parse_presence_state(state: &str) -> PresenceState {
    match state {
        "online" => PresenceState::Online,
        _ => PresenceState::Offline,
    }
}

/// Convert SampleModel to PresenceSample entity
impl From<SampleModel> for PresenceSample {
    fn from(model: SampleModel) -> Self {
        PresenceSample {
            observed_at: model.observed_at,
            state: parse_presence_state(&model.state),
        }
    }
}
