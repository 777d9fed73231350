use super::fetch_body;
use async_trait::async_trait;
use bytes::Bytes;
use wsrelay_application::ports::SunTimesSource;
use wsrelay_domain::config::UpstreamConfig;
use wsrelay_domain::{DomainError, StationPosition};

/// sunrise-sunset.org; the response is passed through untouched.
pub struct SunriseSunsetClient {
    client: reqwest::Client,
    url: String,
}

impl SunriseSunsetClient {
    pub fn new(client: reqwest::Client, upstream: &UpstreamConfig) -> Self {
        Self {
            client,
            url: upstream.sunrise_sunset_url.clone(),
        }
    }
}

#[async_trait]
impl SunTimesSource for SunriseSunsetClient {
    async fn fetch_sun_times(&self, position: StationPosition) -> Result<Bytes, DomainError> {
        let request = self.client.get(&self.url).query(&[
            ("lat", format!("{:.6}", position.latitude)),
            ("lng", format!("{:.6}", position.longitude)),
            ("formatted", "0".to_string()),
        ]);

        fetch_body(request, "sunrise-sunset").await
    }
}
