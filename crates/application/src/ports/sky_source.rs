use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDateTime;
use wsrelay_domain::{DomainError, StationPosition};

#[async_trait]
pub trait AstronomySource: Send + Sync {
    /// Moon phase angle, in degrees, exactly as reported by the service.
    async fn fetch_moon_angle(
        &self,
        position: StationPosition,
        at: NaiveDateTime,
    ) -> Result<String, DomainError>;
}

#[async_trait]
pub trait SunTimesSource: Send + Sync {
    /// Raw sunrise/sunset JSON for the station's position.
    async fn fetch_sun_times(&self, position: StationPosition) -> Result<Bytes, DomainError>;
}
