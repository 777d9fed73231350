use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::feeds::{default_feeds, FeedConfig};
use super::http_cache::HttpCacheConfig;
use super::logging::LoggingConfig;
use super::prefetch::PrefetchConfig;
use super::relay::RelayConfig;
use super::server::ServerConfig;
use super::station::StationConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "wsrelay.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/wsrelay/config.toml";

/// Main configuration structure for wsrelay
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Web server configuration (port, bind address, static files)
    pub server: ServerConfig,

    /// Station identity and API credentials
    pub station: StationConfig,

    /// Relay queue and upstream update endpoint
    pub relay: RelayConfig,

    /// Third-party API endpoints
    pub upstream: UpstreamConfig,

    /// Proxied RSS feeds
    pub feeds: Vec<FeedConfig>,

    /// Background refresh periods
    pub prefetch: PrefetchConfig,

    /// Browser cache lifetimes
    pub http_cache: HttpCacheConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            station: StationConfig::default(),
            relay: RelayConfig::default(),
            upstream: UpstreamConfig::default(),
            feeds: default_feeds(),
            prefetch: PrefetchConfig::default(),
            http_cache: HttpCacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. wsrelay.toml in current directory
    /// 3. /etc/wsrelay/config.toml
    /// 4. Default configuration
    ///
    /// Station credentials from the environment are applied afterwards, then
    /// command-line overrides.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.station.apply_env(|name| std::env::var(name).ok());
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dir) = overrides.static_dir {
            self.server.static_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.no_prefetch {
            self.prefetch.enabled = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.relay.url.is_empty() {
            return Err(ConfigError::Validation("Relay URL is empty".to_string()));
        }

        if self.relay.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Relay queue capacity must be at least 1".to_string(),
            ));
        }

        if self.relay.workers == 0 {
            return Err(ConfigError::Validation(
                "At least one relay worker is required".to_string(),
            ));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout must be at least 1 second".to_string(),
            ));
        }

        let intervals = [
            ("observations", self.prefetch.observations_interval_secs),
            ("moon", self.prefetch.moon_interval_secs),
            ("rss", self.prefetch.rss_interval_secs),
            ("sun", self.prefetch.sun_interval_secs),
        ];
        if let Some((family, _)) = intervals.iter().find(|(_, secs)| *secs == 0) {
            return Err(ConfigError::Validation(format!(
                "Prefetch interval for {} must be at least 1 second",
                family
            )));
        }

        for feed in &self.feeds {
            if !feed.path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "Feed path '{}' must start with '/'",
                    feed.path
                )));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub static_dir: Option<String>,
    pub log_level: Option<String>,
    pub no_prefetch: bool,
}
