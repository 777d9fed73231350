use super::fetch_body;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use wsrelay_application::ports::ObservationSource;
use wsrelay_domain::config::{StationConfig, UpstreamConfig};
use wsrelay_domain::{DomainError, Units};

/// weather.com personal weather station API.
pub struct WeatherComClient {
    client: reqwest::Client,
    observations_url: String,
    history_url: String,
    station_id: String,
    api_key: String,
}

impl WeatherComClient {
    pub fn new(client: reqwest::Client, upstream: &UpstreamConfig, station: &StationConfig) -> Self {
        Self {
            client,
            observations_url: upstream.observations_url.clone(),
            history_url: upstream.history_url.clone(),
            station_id: station.station_id.clone(),
            api_key: station.weather_api_key.clone(),
        }
    }

    fn request(&self, url: &str, units: Units) -> reqwest::RequestBuilder {
        self.client.get(url).query(&[
            ("stationId", self.station_id.as_str()),
            ("format", "json"),
            ("units", units.code()),
            ("apiKey", self.api_key.as_str()),
            ("numericPrecision", "decimal"),
        ])
    }
}

#[async_trait]
impl ObservationSource for WeatherComClient {
    async fn fetch_today(&self, units: Units) -> Result<Bytes, DomainError> {
        fetch_body(self.request(&self.observations_url, units), "observations").await
    }

    async fn fetch_history(&self, date: NaiveDate) -> Result<Bytes, DomainError> {
        let date = date.format("%Y%m%d").to_string();
        let request = self
            .request(&self.history_url, Units::Metric)
            .query(&[("date", date.as_str())]);

        fetch_body(request, "history")
            .await
            .map_err(|e| match e {
                DomainError::Upstream { resource, cause } => DomainError::Upstream {
                    resource,
                    cause: format!("{} ({})", cause, date),
                },
                other => other,
            })
    }
}
