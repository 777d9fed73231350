use crate::ports::ObservationSource;
use crate::services::{Fetched, ReadThroughCache};
use chrono::Duration;
use std::sync::Arc;
use wsrelay_domain::{CacheKey, DomainError, ObservationSet, Units};

const TODAY_TTL_SECS: i64 = 2 * 60;

/// Today's observations in imperial units, read through the `wutoday` entry.
///
/// Also the source of the station's position for the moon and sunrise
/// fetchers.
pub struct GetTodayObservationsUseCase {
    cache: Arc<ReadThroughCache>,
    source: Arc<dyn ObservationSource>,
}

impl GetTodayObservationsUseCase {
    pub fn new(cache: Arc<ReadThroughCache>, source: Arc<dyn ObservationSource>) -> Self {
        Self { cache, source }
    }

    pub async fn execute(&self) -> Result<ObservationSet, DomainError> {
        let (cache, source) = (&self.cache, &self.source);

        let payload = cache
            .get_or_fetch(CacheKey::WuToday, move || async move {
                cache.record_upstream_call();
                let body = source.fetch_today(Units::Imperial).await?;
                ObservationSet::decode(&body)?;
                Ok::<_, DomainError>(Fetched::new(
                    body,
                    cache.now() + Duration::seconds(TODAY_TTL_SECS),
                ))
            })
            .await?;

        ObservationSet::decode(&payload)
    }
}
