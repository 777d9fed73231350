use crate::ports::SunTimesSource;
use crate::services::{Fetched, ReadThroughCache};
use crate::use_cases::GetTodayObservationsUseCase;
use bytes::Bytes;
use std::sync::Arc;
use wsrelay_domain::history::next_local_midnight;
use wsrelay_domain::{CacheKey, DomainError};

/// Sunrise and sunset times for the station's position, cached until the
/// next local midnight at the station.
pub struct GetSunriseSunsetUseCase {
    cache: Arc<ReadThroughCache>,
    today: Arc<GetTodayObservationsUseCase>,
    sun: Arc<dyn SunTimesSource>,
}

impl GetSunriseSunsetUseCase {
    pub fn new(
        cache: Arc<ReadThroughCache>,
        today: Arc<GetTodayObservationsUseCase>,
        sun: Arc<dyn SunTimesSource>,
    ) -> Self {
        Self { cache, today, sun }
    }

    pub async fn execute(&self) -> Result<Bytes, DomainError> {
        self.cache
            .get_or_fetch(CacheKey::SunriseSunset, move || self.fetch())
            .await
    }

    async fn fetch(&self) -> Result<Fetched, DomainError> {
        let position = self.today.execute().await?.station_position()?;
        self.cache.record_upstream_call();
        let body = self.sun.fetch_sun_times(position).await?;

        let expires_at = next_local_midnight(self.cache.now(), position.timezone_or_utc());
        Ok(Fetched::new(body, expires_at))
    }
}
