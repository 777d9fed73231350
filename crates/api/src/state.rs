use crate::middleware::RequestStats;
use std::sync::Arc;
use wsrelay_application::services::ReadThroughCache;
use wsrelay_application::use_cases::{
    GetDailySummaryUseCase, GetLatestDataUseCase, GetMoonPhaseUseCase, GetRssFeedUseCase,
    GetSunriseSunsetUseCase, GetWeeklyHistoryUseCase, IngestStationReportUseCase,
};
use wsrelay_domain::config::HttpCacheConfig;

#[derive(Clone)]
pub struct AppState {
    pub ingest_report: Arc<IngestStationReportUseCase>,
    pub get_latest: Arc<GetLatestDataUseCase>,
    pub get_daily_summary: Arc<GetDailySummaryUseCase>,
    pub get_weekly_history: Arc<GetWeeklyHistoryUseCase>,
    pub get_moon_phase: Arc<GetMoonPhaseUseCase>,
    pub get_sunrise_sunset: Arc<GetSunriseSunsetUseCase>,
    pub get_rss_feed: Arc<GetRssFeedUseCase>,
    pub cache: Arc<ReadThroughCache>,
    pub http_cache: Arc<HttpCacheConfig>,
    pub stats: Arc<RequestStats>,
}
