use async_trait::async_trait;
use tracing::debug;
use wsrelay_application::ports::RelayClient;
use wsrelay_domain::{DomainError, RelayJob};

/// Marker the update endpoint puts in the body of an accepted record.
const SUCCESS_MARKER: &str = "success";

/// Form-POSTs relay records to the Wunderground update endpoint.
pub struct WundergroundRelayClient {
    client: reqwest::Client,
    url: String,
}

impl WundergroundRelayClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RelayClient for WundergroundRelayClient {
    async fn relay(&self, job: &RelayJob) -> Result<(), DomainError> {
        let response = self
            .client
            .post(&self.url)
            .form(job.fields())
            .send()
            .await
            .map_err(|e| DomainError::RelayDelivery(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::RelayDelivery(e.to_string()))?;

        // The endpoint reports rejections in the body, not the status.
        if !body.contains(SUCCESS_MARKER) {
            return Err(DomainError::RelayDelivery(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        debug!(status = status.as_u16(), "Record relayed");
        Ok(())
    }
}
