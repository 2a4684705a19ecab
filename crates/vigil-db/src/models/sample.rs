//! Presence sample database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the presence_samples table
#[derive(Debug, Clone, FromRow)]
pub struct SampleModel {
    pub id: i64,
    pub observed_at: DateTime<Utc>,
    /// Presence state: 'online' or 'offline'
    pub state: String,
}

impl SampleModel {
    /// Check if the recorded state was online
    #[inline]
    pub fn is_online(&self) -> bool {
        self.state == "online"
    }
}
