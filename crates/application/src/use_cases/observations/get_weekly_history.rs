use crate::ports::ObservationSource;
use crate::services::{Fetched, ReadThroughCache};
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use wsrelay_domain::history::{next_local_midnight, prior_dates};
use wsrelay_domain::{CacheKey, DomainError, ObservationSet, Units, WeeklyHistory};

const TODAY_HISTORY_TTL_SECS: i64 = 5 * 60;

/// Seven days of observations: today (metric) plus the six days before it.
///
/// Today and the prior days are cached under separate keys with separate
/// lifetimes and only combined when the response is assembled.
pub struct GetWeeklyHistoryUseCase {
    cache: Arc<ReadThroughCache>,
    source: Arc<dyn ObservationSource>,
}

impl GetWeeklyHistoryUseCase {
    pub fn new(cache: Arc<ReadThroughCache>, source: Arc<dyn ObservationSource>) -> Self {
        Self { cache, source }
    }

    pub async fn execute(&self) -> Result<WeeklyHistory, DomainError> {
        let today = self.today().await?;
        let (base_epoch, tz) = self.base_of(&today);
        let prior_days = self.prior_days(base_epoch, tz).await?;

        Ok(WeeklyHistory::compose(today.raw, prior_days))
    }

    async fn today(&self) -> Result<ObservationSet, DomainError> {
        let (cache, source) = (&self.cache, &self.source);

        let payload = cache
            .get_or_fetch(CacheKey::WuTodayHistory, move || async move {
                cache.record_upstream_call();
                let body = source.fetch_today(Units::Metric).await?;
                ObservationSet::decode(&body)?;
                Ok::<_, DomainError>(Fetched::new(
                    body,
                    cache.now() + Duration::seconds(TODAY_HISTORY_TTL_SECS),
                ))
            })
            .await?;

        ObservationSet::decode(&payload)
    }

    /// Epoch and timezone the prior days are counted back from: the first
    /// record of today, or yesterday in UTC when today has no records yet.
    fn base_of(&self, today: &ObservationSet) -> (i64, Tz) {
        match today.first() {
            Some(first) => {
                let tz = first.timezone().unwrap_or_else(|| {
                    warn!(tz = ?first.tz, "Station timezone not recognised, using UTC");
                    Tz::UTC
                });
                (first.epoch_secs(), tz)
            }
            None => ((self.cache.now() - Duration::days(1)).timestamp(), Tz::UTC),
        }
    }

    async fn prior_days(&self, base_epoch: i64, tz: Tz) -> Result<Vec<Vec<Value>>, DomainError> {
        let (cache, source) = (&self.cache, &self.source);

        let payload = cache
            .get_or_fetch(CacheKey::WuRestHistory, move || async move {
                let mut days = Vec::new();
                for date in prior_dates(base_epoch, tz) {
                    debug!(%date, "Fetching history day");
                    cache.record_upstream_call();
                    let body = source.fetch_history(date).await?;
                    days.push(ObservationSet::decode(&body)?.raw);
                }

                let body = serde_json::to_vec(&days)
                    .map_err(|e| DomainError::upstream("weekly history", e))?;
                let base =
                    DateTime::<Utc>::from_timestamp(base_epoch, 0).unwrap_or_else(|| cache.now());

                Ok::<_, DomainError>(Fetched::new(body, next_local_midnight(base, tz)))
            })
            .await?;

        serde_json::from_slice(&payload).map_err(|e| DomainError::upstream("weekly history", e))
    }
}
