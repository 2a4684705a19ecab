//! Presence source adapters.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Deserialize;
use vigil_core::{DomainError, PresenceSource, PresenceState};

/// Payload returned by the probe endpoint.
#[derive(Debug, Deserialize)]
struct ProbeResponse {
    state: String,
    display_name: Option<String>,
}

/// Presence source that polls an HTTP probe endpoint.
///
/// The probe answers `{"state": "online"|"offline"}` with an optional
/// `display_name`. A name seen in any response is remembered for
/// rendering; until one arrives the raw target identifier stands in.
pub struct HttpPresenceSource {
    client: reqwest::Client,
    probe_url: String,
    target_id: String,
    learned_name: Mutex<Option<String>>,
}

impl HttpPresenceSource {
    pub fn new(client: reqwest::Client, probe_url: String, target_id: String) -> Self {
        Self {
            client,
            probe_url,
            target_id,
            learned_name: Mutex::new(None),
        }
    }
}

#[async_trait]
impl PresenceSource for HttpPresenceSource {
    async fn check_status(&self) -> Result<PresenceState, DomainError> {
        let response = self
            .client
            .get(&self.probe_url)
            .send()
            .await
            .map_err(|e| DomainError::PresenceSource(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::PresenceSource(format!(
                "Probe returned HTTP {status}"
            )));
        }

        let payload: ProbeResponse = response
            .json()
            .await
            .map_err(|e| DomainError::PresenceSource(e.to_string()))?;

        if let Some(name) = payload.display_name {
            *self.learned_name.lock() = Some(name);
        }

        payload
            .state
            .parse::<PresenceState>()
            .map_err(|e| DomainError::PresenceSource(e.to_string()))
    }

    fn display_name(&self) -> String {
        self.learned_name
            .lock()
            .clone()
            .unwrap_or_else(|| self.target_id.clone())
    }
}
