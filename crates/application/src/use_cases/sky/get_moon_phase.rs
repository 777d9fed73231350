use crate::ports::AstronomySource;
use crate::services::{Fetched, ReadThroughCache};
use crate::use_cases::GetTodayObservationsUseCase;
use bytes::Bytes;
use chrono::Duration;
use std::sync::Arc;
use tracing::debug;
use wsrelay_domain::{CacheKey, DomainError, MoonReport};

const MOON_TTL_SECS: i64 = 60 * 60;

/// Current moon phase at the station, as a serialized [`MoonReport`].
pub struct GetMoonPhaseUseCase {
    cache: Arc<ReadThroughCache>,
    today: Arc<GetTodayObservationsUseCase>,
    astronomy: Arc<dyn AstronomySource>,
}

impl GetMoonPhaseUseCase {
    pub fn new(
        cache: Arc<ReadThroughCache>,
        today: Arc<GetTodayObservationsUseCase>,
        astronomy: Arc<dyn AstronomySource>,
    ) -> Self {
        Self {
            cache,
            today,
            astronomy,
        }
    }

    pub async fn execute(&self) -> Result<Bytes, DomainError> {
        self.cache
            .get_or_fetch(CacheKey::Moon, move || self.fetch())
            .await
    }

    /// Fetches and stores a new report even when the cached one is fresh.
    pub async fn refresh(&self) -> Result<Bytes, DomainError> {
        self.cache.refresh(CacheKey::Moon, move || self.fetch()).await
    }

    async fn fetch(&self) -> Result<Fetched, DomainError> {
        let position = self.today.execute().await?.station_position()?;

        let now = self.cache.now();
        let local = now.with_timezone(&position.timezone_or_utc()).naive_local();

        self.cache.record_upstream_call();
        let raw_angle = self.astronomy.fetch_moon_angle(position, local).await?;
        let angle = raw_angle
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|angle| angle.is_finite())
            .ok_or_else(|| {
                DomainError::upstream("moon", format!("invalid phase angle {:?}", raw_angle))
            })?;

        let report = MoonReport::from_angle(&raw_angle, angle);
        debug!(phase = %report.phase, angle, "Moon phase computed");

        let body = serde_json::to_vec(&report).map_err(|e| DomainError::upstream("moon", e))?;
        Ok(Fetched::new(body, now + Duration::seconds(MOON_TTL_SECS)))
    }
}
