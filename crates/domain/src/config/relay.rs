use serde::{Deserialize, Serialize};

pub const WUNDERGROUND_UPDATE_URL: &str =
    "http://weatherstation.wunderground.com/weatherstation/updateweatherstation.php";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Endpoint the relay workers form-POST each record to.
    pub url: String,

    /// Pending records held before ingestion blocks.
    pub queue_capacity: usize,

    pub workers: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: WUNDERGROUND_UPDATE_URL.to_string(),
            queue_capacity: 100,
            workers: 5,
        }
    }
}
