#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use wsrelay_application::ports::{
    AstronomySource, Clock, FeedSource, ObservationSource, RelayQueuePort, SunTimesSource,
    TtlCachePort,
};
use wsrelay_application::services::ReadThroughCache;
use wsrelay_domain::{
    CacheEntry, CacheKey, CacheLookup, DomainError, RelayJob, StationPosition, Units,
};

/// Clock that only moves when told to.
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn default_start() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 6, 15, 14, 0, 0).unwrap())
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn now_plus(&self, by: Duration) -> DateTime<Utc> {
        self.now() + by
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct InMemoryTtlStore {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    clock: Arc<MockClock>,
}

impl InMemoryTtlStore {
    pub fn new(clock: Arc<MockClock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }
}

impl TtlCachePort for InMemoryTtlStore {
    fn get(&self, key: &CacheKey) -> CacheLookup {
        match self.entries.lock().unwrap().get(key) {
            None => CacheLookup::Missing,
            Some(entry) if entry.is_fresh(self.clock.now()) => {
                CacheLookup::Fresh(entry.payload.clone())
            }
            Some(entry) => CacheLookup::Stale(entry.payload.clone()),
        }
    }

    fn put(&self, key: CacheKey, payload: Bytes, expires_at: DateTime<Utc>) {
        self.entries
            .lock()
            .unwrap()
            .insert(key, CacheEntry::new(payload, expires_at));
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Clock, store and read-through cache wired together for one test.
pub struct TestCache {
    pub clock: Arc<MockClock>,
    pub store: Arc<InMemoryTtlStore>,
    pub cache: Arc<ReadThroughCache>,
}

impl TestCache {
    pub fn new() -> Self {
        let clock = Arc::new(MockClock::default_start());
        let store = Arc::new(InMemoryTtlStore::new(clock.clone()));
        let cache = Arc::new(ReadThroughCache::new(store.clone(), clock.clone()));
        Self {
            clock,
            store,
            cache,
        }
    }
}

/// One observation record shaped like the observations API returns.
pub fn observation(epoch: i64, temp_high: f64, temp_low: f64) -> Value {
    json!({
        "stationID": "ISTATION1",
        "tz": "America/Moncton",
        "epoch": epoch,
        "qcStatus": 1,
        "lat": 45.27,
        "lon": -66.06,
        "humidityHigh": 80.0,
        "humidityLow": 60.0,
        "uvHigh": 3.0,
        "solarRadiationHigh": 450.5,
        "imperial": {
            "tempHigh": temp_high,
            "tempLow": temp_low,
            "windspeedHigh": 10.0,
            "windspeedLow": 0.0,
            "windgustHigh": 15.0,
            "windgustLow": 0.0,
            "dewptHigh": 55.0,
            "dewptLow": 50.0,
            "pressureMax": 30.1,
            "pressureMin": 29.9
        }
    })
}

pub fn observations_body(records: Vec<Value>) -> Bytes {
    Bytes::from(json!({ "observations": records }).to_string())
}

pub struct MockObservationSource {
    today: RwLock<HashMap<&'static str, Bytes>>,
    history: RwLock<HashMap<NaiveDate, Bytes>>,
    should_fail: RwLock<bool>,
    today_calls: AtomicU64,
    history_calls: AtomicU64,
    requested_dates: RwLock<Vec<NaiveDate>>,
}

impl MockObservationSource {
    pub fn new() -> Self {
        Self {
            today: RwLock::new(HashMap::new()),
            history: RwLock::new(HashMap::new()),
            should_fail: RwLock::new(false),
            today_calls: AtomicU64::new(0),
            history_calls: AtomicU64::new(0),
            requested_dates: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_today(&self, units: Units, body: Bytes) {
        self.today.write().await.insert(units.code(), body);
    }

    pub async fn set_history(&self, date: NaiveDate, body: Bytes) {
        self.history.write().await.insert(date, body);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn today_calls(&self) -> u64 {
        self.today_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> u64 {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub async fn requested_dates(&self) -> Vec<NaiveDate> {
        self.requested_dates.read().await.clone()
    }
}

#[async_trait]
impl ObservationSource for MockObservationSource {
    async fn fetch_today(&self, units: Units) -> Result<Bytes, DomainError> {
        self.today_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::upstream("observations", "mock failure"));
        }
        Ok(self
            .today
            .read()
            .await
            .get(units.code())
            .cloned()
            .unwrap_or_else(|| observations_body(vec![])))
    }

    async fn fetch_history(&self, date: NaiveDate) -> Result<Bytes, DomainError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_dates.write().await.push(date);
        if *self.should_fail.read().await {
            return Err(DomainError::upstream("history", "mock failure"));
        }
        Ok(self
            .history
            .read()
            .await
            .get(&date)
            .cloned()
            .unwrap_or_else(|| observations_body(vec![])))
    }
}

pub struct MockAstronomySource {
    angle: RwLock<String>,
    should_fail: RwLock<bool>,
    calls: AtomicU64,
    last_request: RwLock<Option<(StationPosition, NaiveDateTime)>>,
}

impl MockAstronomySource {
    pub fn with_angle(angle: &str) -> Self {
        Self {
            angle: RwLock::new(angle.to_string()),
            should_fail: RwLock::new(false),
            calls: AtomicU64::new(0),
            last_request: RwLock::new(None),
        }
    }

    pub async fn set_angle(&self, angle: &str) {
        *self.angle.write().await = angle.to_string();
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_request(&self) -> Option<(StationPosition, NaiveDateTime)> {
        *self.last_request.read().await
    }
}

#[async_trait]
impl AstronomySource for MockAstronomySource {
    async fn fetch_moon_angle(
        &self,
        position: StationPosition,
        at: NaiveDateTime,
    ) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.write().await = Some((position, at));
        if *self.should_fail.read().await {
            return Err(DomainError::upstream("moon", "mock failure"));
        }
        Ok(self.angle.read().await.clone())
    }
}

pub struct MockSunTimesSource {
    calls: AtomicU64,
}

impl MockSunTimesSource {
    pub fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SunTimesSource for MockSunTimesSource {
    async fn fetch_sun_times(&self, position: StationPosition) -> Result<Bytes, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Bytes::from(
            json!({
                "results": { "sunrise": "2024-06-15T09:30:00+00:00" },
                "lat": position.latitude,
                "status": "OK"
            })
            .to_string(),
        ))
    }
}

pub struct MockFeedSource {
    calls: AtomicU64,
    delay: Option<std::time::Duration>,
    requested: RwLock<Vec<String>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
            delay: None,
            requested: RwLock::new(Vec::new()),
        }
    }

    pub fn with_delay(delay: std::time::Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn requested(&self) -> Vec<String> {
        self.requested.read().await.clone()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_feed(&self, url: &str) -> Result<Bytes, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requested.write().await.push(url.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(Bytes::from(format!("<rss><call>{}</call></rss>", call)))
    }
}

/// Relay queue that records what it was given.
pub struct RecordingRelayQueue {
    jobs: RwLock<Vec<RelayJob>>,
}

impl RecordingRelayQueue {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
        }
    }

    pub async fn jobs(&self) -> Vec<RelayJob> {
        self.jobs.read().await.clone()
    }
}

#[async_trait]
impl RelayQueuePort for RecordingRelayQueue {
    async fn enqueue(&self, job: RelayJob) -> Result<(), DomainError> {
        self.jobs.write().await.push(job);
        Ok(())
    }
}
