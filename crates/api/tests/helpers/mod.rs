#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use bytes::Bytes;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio::time::timeout;
use tower::ServiceExt;
use wsrelay_api::{create_api_routes, middleware::layer_http_middleware, AppState, RequestStats};
use wsrelay_application::ports::{
    AstronomySource, FeedSource, ObservationSource, RelayClient, SunTimesSource, SystemClock,
};
use wsrelay_application::services::{LatestDataStore, MetricSmoothers, ReadThroughCache};
use wsrelay_application::use_cases::{
    GetDailySummaryUseCase, GetLatestDataUseCase, GetMoonPhaseUseCase, GetRssFeedUseCase,
    GetSunriseSunsetUseCase, GetTodayObservationsUseCase, GetWeeklyHistoryUseCase,
    IngestStationReportUseCase, RelayCredentials,
};
use wsrelay_domain::config::feeds::default_feeds;
use wsrelay_domain::config::HttpCacheConfig;
use wsrelay_domain::{DomainError, RelayJob, StationPosition, Units};
use wsrelay_infrastructure::cache::TtlCacheStore;
use wsrelay_infrastructure::relay::{RelayQueue, RelayWorkerPool};

pub const REPORT: &str = "uv=5&solarradiation=100&tempf=68&humidity=50&windspeedmph=3.5\
&dateutc=2024-06-15+14:00:00&windgustmph=5.1&winddir=180&baromrelin=29.92\
&baromabsin=29.50&rainratein=0&dailyrainin=0.1&weeklyrainin=0.2&monthlyrainin=1.0\
&yearlyrainin=10&tempinf=70&humidityin=40&interval=60";

/// Observations source that serves one record stamped "now" for every day.
pub struct StubObservationSource {
    should_fail: RwLock<bool>,
    calls: AtomicU64,
}

impl StubObservationSource {
    pub fn new() -> Self {
        Self {
            should_fail: RwLock::new(false),
            calls: AtomicU64::new(0),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<Bytes, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::upstream(
                "observations",
                "connection refused by api.weather.com",
            ));
        }
        Ok(Bytes::from(
            json!({
                "observations": [{
                    "stationID": "ISTATION1",
                    "tz": "America/Moncton",
                    "epoch": Utc::now().timestamp(),
                    "qcStatus": 1,
                    "lat": 45.27,
                    "lon": -66.06,
                    "humidityHigh": 80.0,
                    "humidityLow": 60.0,
                    "uvHigh": 3.0,
                    "solarRadiationHigh": 450.5,
                    "imperial": { "tempHigh": 71.0, "tempLow": 65.0 }
                }]
            })
            .to_string(),
        ))
    }
}

#[async_trait]
impl ObservationSource for StubObservationSource {
    async fn fetch_today(&self, _units: Units) -> Result<Bytes, DomainError> {
        self.respond().await
    }

    async fn fetch_history(&self, _date: NaiveDate) -> Result<Bytes, DomainError> {
        self.respond().await
    }
}

pub struct StubAstronomySource;

#[async_trait]
impl AstronomySource for StubAstronomySource {
    async fn fetch_moon_angle(
        &self,
        _position: StationPosition,
        _at: NaiveDateTime,
    ) -> Result<String, DomainError> {
        Ok("180.0".to_string())
    }
}

pub struct StubSunTimesSource;

#[async_trait]
impl SunTimesSource for StubSunTimesSource {
    async fn fetch_sun_times(&self, _position: StationPosition) -> Result<Bytes, DomainError> {
        Ok(Bytes::from_static(
            br#"{"results":{"sunrise":"2024-06-15T09:30:00+00:00"},"status":"OK"}"#,
        ))
    }
}

pub struct StubFeedSource;

#[async_trait]
impl FeedSource for StubFeedSource {
    async fn fetch_feed(&self, url: &str) -> Result<Bytes, DomainError> {
        Ok(Bytes::from(format!("<rss><link>{}</link></rss>", url)))
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub observations: Arc<StubObservationSource>,
    relay_rx: Option<mpsc::Receiver<RelayJob>>,
}

impl TestApp {
    /// Relay records stay on the queue for [`TestApp::next_job`].
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Relay records are drained by a worker pool delivering through `client`.
    pub fn with_relay_client(client: Arc<dyn RelayClient>) -> Self {
        Self::build(Some(client))
    }

    fn build(relay_client: Option<Arc<dyn RelayClient>>) -> Self {
        let clock = Arc::new(SystemClock);
        let store = Arc::new(TtlCacheStore::new(clock.clone()));
        let cache = Arc::new(ReadThroughCache::new(store, clock));

        let observations = Arc::new(StubObservationSource::new());
        let latest = Arc::new(LatestDataStore::new());
        let (queue, relay_rx) = RelayQueue::new(100);

        let today = Arc::new(GetTodayObservationsUseCase::new(
            cache.clone(),
            observations.clone(),
        ));

        let state = AppState {
            ingest_report: Arc::new(IngestStationReportUseCase::new(
                Arc::new(MetricSmoothers::new()),
                latest.clone(),
                Arc::new(queue),
                RelayCredentials {
                    station_id: "ISTATION1".to_string(),
                    password: "secret".to_string(),
                    software: "wsrelay".to_string(),
                },
            )),
            get_latest: Arc::new(GetLatestDataUseCase::new(latest)),
            get_daily_summary: Arc::new(GetDailySummaryUseCase::new(today.clone(), "ISTATION1")),
            get_weekly_history: Arc::new(GetWeeklyHistoryUseCase::new(
                cache.clone(),
                observations.clone(),
            )),
            get_moon_phase: Arc::new(GetMoonPhaseUseCase::new(
                cache.clone(),
                today.clone(),
                Arc::new(StubAstronomySource),
            )),
            get_sunrise_sunset: Arc::new(GetSunriseSunsetUseCase::new(
                cache.clone(),
                today,
                Arc::new(StubSunTimesSource),
            )),
            get_rss_feed: Arc::new(GetRssFeedUseCase::new(
                cache.clone(),
                Arc::new(StubFeedSource),
                default_feeds(),
            )),
            cache,
            http_cache: Arc::new(HttpCacheConfig::default()),
            stats: Arc::new(RequestStats::new()),
        };

        let router = layer_http_middleware(create_api_routes(state.clone()), state.clone());

        let relay_rx = match relay_client {
            Some(client) => {
                RelayWorkerPool::new(relay_rx, client, 5).start();
                None
            }
            None => Some(relay_rx),
        };

        Self {
            router,
            state,
            observations,
            relay_rx,
        }
    }

    /// Next queued relay record, or `None` if nothing arrives within a second.
    pub async fn next_job(&mut self) -> Option<RelayJob> {
        let rx = self.relay_rx.as_mut()?;
        timeout(Duration::from_secs(1), rx.recv()).await.ok().flatten()
    }

    pub fn has_pending_job(&mut self) -> bool {
        self.relay_rx
            .as_mut()
            .is_some_and(|rx| rx.try_recv().is_ok())
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_report(&self, body: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri("/ecowitt/report")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
