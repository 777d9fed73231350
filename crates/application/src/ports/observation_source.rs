use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use wsrelay_domain::{DomainError, Units};

/// Personal-weather-station observations API.
///
/// Implementations return the raw response body of a successful call and
/// fail with `DomainError::Upstream` on transport errors or non-success status.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    /// All of today's observations for the station.
    async fn fetch_today(&self, units: Units) -> Result<Bytes, DomainError>;

    /// All observations for one past calendar day, metric units.
    async fn fetch_history(&self, date: NaiveDate) -> Result<Bytes, DomainError>;
}
