//! Session database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the sessions table
#[derive(Debug, Clone, FromRow)]
pub struct SessionModel {
    pub id: i64,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
}

impl SessionModel {
    /// Check if the session has no recorded end
    #[inline]
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}
