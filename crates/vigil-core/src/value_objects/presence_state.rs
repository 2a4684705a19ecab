//! Presence state - the binary online/offline observation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary presence state of the tracked identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    Online,
    Offline,
}

impl PresenceState {
    /// Check if the state is online
    #[inline]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    /// Check if the state is offline
    #[inline]
    pub const fn is_offline(self) -> bool {
        matches!(self, Self::Offline)
    }

    /// Canonical lowercase string form ("online" / "offline")
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a presence state from a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid presence state: {0}")]
pub struct ParsePresenceStateError(pub String);

impl FromStr for PresenceState {
    type Err = ParsePresenceStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            other => Err(ParsePresenceStateError(other.to_string())),
        }
    }
}
