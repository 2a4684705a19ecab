//! Session entity <-> model mapper

use vigil_core::entities::Session;
use vigil_core::value_objects::SessionId;

use crate::models::SessionModel;

/// Convert SessionModel to Session entity
impl From<SessionModel> for Session {
    fn from(model: SessionModel) -> Self {
        Session {
            id: SessionId::new(model.id),
            started_at: model.started_at,
            ended_at: model.ended_at,
            duration_minutes: model.duration_minutes,
        }
    }
}
