pub mod errors;
pub mod feeds;
pub mod http_cache;
pub mod logging;
pub mod prefetch;
pub mod relay;
pub mod root;
pub mod server;
pub mod station;
pub mod upstream;

pub use errors::ConfigError;
pub use feeds::FeedConfig;
pub use http_cache::HttpCacheConfig;
pub use logging::LoggingConfig;
pub use prefetch::PrefetchConfig;
pub use relay::RelayConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use station::StationConfig;
pub use upstream::UpstreamConfig;
