use super::fetch_body;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::Value;
use wsrelay_application::ports::AstronomySource;
use wsrelay_domain::config::{StationConfig, UpstreamConfig};
use wsrelay_domain::{DomainError, StationPosition};

/// Row 1 of the positions table is the Moon; the field name is the API's.
const MOON_ANGLE_POINTER: &str = "/data/table/rows/1/cells/0/extraInfo/phase/angel";

/// AstronomyAPI bodies/positions endpoint.
pub struct AstronomyApiClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl AstronomyApiClient {
    pub fn new(client: reqwest::Client, upstream: &UpstreamConfig, station: &StationConfig) -> Self {
        Self {
            client,
            url: upstream.astronomy_url.clone(),
            api_key: station.astronomy_api_key.clone(),
        }
    }
}

#[async_trait]
impl AstronomySource for AstronomyApiClient {
    async fn fetch_moon_angle(
        &self,
        position: StationPosition,
        at: NaiveDateTime,
    ) -> Result<String, DomainError> {
        let date = at.format("%Y-%m-%d").to_string();
        let request = self
            .client
            .get(&self.url)
            .header(reqwest::header::AUTHORIZATION, format!("Basic {}", self.api_key))
            .query(&[
                ("latitude", format!("{:.6}", position.latitude)),
                ("longitude", format!("{:.6}", position.longitude)),
                ("elevation", "0".to_string()),
                ("from_date", date.clone()),
                ("to_date", date),
                ("time", at.format("%H:%M:%S").to_string()),
            ]);

        let body = fetch_body(request, "moon").await?;
        let json: Value =
            serde_json::from_slice(&body).map_err(|e| DomainError::upstream("moon", e))?;

        json.pointer(MOON_ANGLE_POINTER)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| DomainError::upstream("moon", "phase angle missing from response"))
    }
}
