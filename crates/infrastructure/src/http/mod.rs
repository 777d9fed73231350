//! `reqwest` clients for the third-party APIs the proxy endpoints front.
mod astronomy;
mod feeds;
mod observations;
mod sun_times;

pub use astronomy::AstronomyApiClient;
pub use feeds::RssFeedClient;
pub use observations::WeatherComClient;
pub use sun_times::SunriseSunsetClient;

use bytes::Bytes;
use std::time::Duration;
use tracing::debug;
use wsrelay_domain::DomainError;

const USER_AGENT: &str = concat!("wsrelay/", env!("CARGO_PKG_VERSION"));

/// Shared client for every upstream call; connection pools are per client,
/// so build one and clone it.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| DomainError::ConfigError(format!("HTTP client: {}", e)))
}

/// Sends `request` and returns the body of a 2xx response.
pub(crate) async fn fetch_body(
    request: reqwest::RequestBuilder,
    resource: &str,
) -> Result<Bytes, DomainError> {
    let response = request
        .send()
        .await
        .map_err(|e| DomainError::upstream(resource, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DomainError::upstream(
            resource,
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        ));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| DomainError::upstream(resource, e))?;

    debug!(resource, bytes = body.len(), "Upstream response received");
    Ok(body)
}
