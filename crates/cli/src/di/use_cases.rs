use super::Services;
use std::sync::Arc;
use wsrelay_api::{AppState, RequestStats};
use wsrelay_application::services::{LatestDataStore, MetricSmoothers, ReadThroughCache};
use wsrelay_application::use_cases::{
    GetDailySummaryUseCase, GetLatestDataUseCase, GetMoonPhaseUseCase, GetRssFeedUseCase,
    GetSunriseSunsetUseCase, GetTodayObservationsUseCase, GetWeeklyHistoryUseCase,
    IngestStationReportUseCase, RelayCredentials,
};
use wsrelay_domain::Config;

pub struct UseCases {
    pub ingest_report: Arc<IngestStationReportUseCase>,
    pub get_latest: Arc<GetLatestDataUseCase>,
    pub get_today: Arc<GetTodayObservationsUseCase>,
    pub get_daily_summary: Arc<GetDailySummaryUseCase>,
    pub get_weekly_history: Arc<GetWeeklyHistoryUseCase>,
    pub get_moon_phase: Arc<GetMoonPhaseUseCase>,
    pub get_sunrise_sunset: Arc<GetSunriseSunsetUseCase>,
    pub get_rss_feed: Arc<GetRssFeedUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, services: &Services) -> Self {
        let latest = Arc::new(LatestDataStore::new());
        let cache = &services.cache;

        let get_today = Arc::new(GetTodayObservationsUseCase::new(
            cache.clone(),
            services.observations.clone(),
        ));

        Self {
            ingest_report: Arc::new(IngestStationReportUseCase::new(
                Arc::new(MetricSmoothers::new()),
                latest.clone(),
                services.relay_queue.clone(),
                RelayCredentials::from(&config.station),
            )),
            get_latest: Arc::new(GetLatestDataUseCase::new(latest)),
            get_daily_summary: Arc::new(GetDailySummaryUseCase::new(
                get_today.clone(),
                config.station.station_id.clone(),
            )),
            get_weekly_history: Arc::new(GetWeeklyHistoryUseCase::new(
                cache.clone(),
                services.observations.clone(),
            )),
            get_moon_phase: Arc::new(GetMoonPhaseUseCase::new(
                cache.clone(),
                get_today.clone(),
                services.astronomy.clone(),
            )),
            get_sunrise_sunset: Arc::new(GetSunriseSunsetUseCase::new(
                cache.clone(),
                get_today.clone(),
                services.sun_times.clone(),
            )),
            get_rss_feed: Arc::new(GetRssFeedUseCase::new(
                cache.clone(),
                services.feeds.clone(),
                config.feeds.clone(),
            )),
            get_today,
        }
    }

    pub fn app_state(&self, config: &Config, cache: Arc<ReadThroughCache>) -> AppState {
        AppState {
            ingest_report: self.ingest_report.clone(),
            get_latest: self.get_latest.clone(),
            get_daily_summary: self.get_daily_summary.clone(),
            get_weekly_history: self.get_weekly_history.clone(),
            get_moon_phase: self.get_moon_phase.clone(),
            get_sunrise_sunset: self.get_sunrise_sunset.clone(),
            get_rss_feed: self.get_rss_feed.clone(),
            cache,
            http_cache: Arc::new(config.http_cache.clone()),
            stats: Arc::new(RequestStats::new()),
        }
    }
}
