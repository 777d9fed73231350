use serde::{Deserialize, Serialize};

pub const ENV_STATION_ID: &str = "WUNDERGROUND_ID";
pub const ENV_STATION_PASSWORD: &str = "WUNDERGROUND_PASS";
pub const ENV_STATION_SOFTWARE: &str = "STATION_SOFTWARE";
pub const ENV_WEATHER_API_KEY: &str = "WUNDERGROUND_API_KEY";
pub const ENV_ASTRONOMY_API_KEY: &str = "ASTRO_API_KEY";

/// Station identity and third-party credentials.
///
/// Usually left out of the config file and supplied through the environment;
/// see [`StationConfig::apply_env`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StationConfig {
    pub station_id: String,

    #[serde(skip_serializing)]
    pub password: String,

    pub software: String,

    #[serde(skip_serializing)]
    pub weather_api_key: String,

    /// Pre-encoded `Basic` credential for the astronomy API.
    #[serde(skip_serializing)]
    pub astronomy_api_key: String,
}

impl StationConfig {
    /// Overrides each field with its environment variable when set and non-empty.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut String); 5] = [
            (ENV_STATION_ID, &mut self.station_id),
            (ENV_STATION_PASSWORD, &mut self.password),
            (ENV_STATION_SOFTWARE, &mut self.software),
            (ENV_WEATHER_API_KEY, &mut self.weather_api_key),
            (ENV_ASTRONOMY_API_KEY, &mut self.astronomy_api_key),
        ];

        for (name, field) in fields {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                *field = value;
            }
        }
    }

    pub fn has_relay_credentials(&self) -> bool {
        !self.station_id.is_empty() && !self.password.is_empty() && !self.software.is_empty()
    }
}
