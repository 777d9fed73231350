pub mod feeds;
pub mod ingest;
pub mod observations;
pub mod sky;

// Re-export use cases
pub use feeds::GetRssFeedUseCase;
pub use ingest::{GetLatestDataUseCase, IngestStationReportUseCase, RelayCredentials};
pub use observations::{
    GetDailySummaryUseCase, GetTodayObservationsUseCase, GetWeeklyHistoryUseCase,
};
pub use sky::{GetMoonPhaseUseCase, GetSunriseSunsetUseCase};
