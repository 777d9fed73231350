use serde::{Deserialize, Serialize};

/// Base URLs of the read-only third-party APIs, overridable for testing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub observations_url: String,

    pub history_url: String,

    pub astronomy_url: String,

    pub sunrise_sunset_url: String,

    /// Per-request timeout of the shared HTTP client.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            observations_url: "https://api.weather.com/v2/pws/observations/all/1day".to_string(),
            history_url: "https://api.weather.com/v2/pws/history/all".to_string(),
            astronomy_url: "https://api.astronomyapi.com/api/v2/bodies/positions".to_string(),
            sunrise_sunset_url: "https://api.sunrise-sunset.org/json".to_string(),
            timeout_secs: 30,
        }
    }
}
