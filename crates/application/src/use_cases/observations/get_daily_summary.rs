use super::GetTodayObservationsUseCase;
use std::sync::Arc;
use wsrelay_domain::{DailySummary, DomainError};

/// Today's extremes, recomputed on every call from whatever `wutoday` holds.
pub struct GetDailySummaryUseCase {
    today: Arc<GetTodayObservationsUseCase>,
    station_id: String,
}

impl GetDailySummaryUseCase {
    pub fn new(today: Arc<GetTodayObservationsUseCase>, station_id: impl Into<String>) -> Self {
        Self {
            today,
            station_id: station_id.into(),
        }
    }

    pub async fn execute(&self) -> Result<DailySummary, DomainError> {
        let set = self.today.execute().await?;
        Ok(DailySummary::build(&self.station_id, set))
    }
}
