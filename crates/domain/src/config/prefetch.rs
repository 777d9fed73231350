use serde::{Deserialize, Serialize};

/// Periods of the background refresh tasks, one per resource family.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PrefetchConfig {
    pub enabled: bool,

    pub observations_interval_secs: u64,

    pub moon_interval_secs: u64,

    pub rss_interval_secs: u64,

    pub sun_interval_secs: u64,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            observations_interval_secs: 120,
            moon_interval_secs: 3600,
            rss_interval_secs: 900,
            sun_interval_secs: 300,
        }
    }
}
