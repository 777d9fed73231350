#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use wsrelay_application::ports::{
    AstronomySource, FeedSource, ObservationSource, SunTimesSource, SystemClock, TtlCachePort,
};
use wsrelay_application::services::ReadThroughCache;
use wsrelay_application::use_cases::GetTodayObservationsUseCase;
use wsrelay_domain::{CacheEntry, CacheKey, CacheLookup, DomainError, StationPosition, Units};

#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl TtlCachePort for InMemoryStore {
    fn get(&self, key: &CacheKey) -> CacheLookup {
        match self.entries.lock().unwrap().get(key) {
            None => CacheLookup::Missing,
            Some(entry) if entry.is_fresh(Utc::now()) => CacheLookup::Fresh(entry.payload.clone()),
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

pub fn read_through_cache() -> Arc<ReadThroughCache> {
    Arc::new(ReadThroughCache::new(
        Arc::new(InMemoryStore::default()),
        Arc::new(SystemClock),
    ))
}

pub struct MockObservationSource {
    should_fail: RwLock<bool>,
    today_calls: AtomicU64,
    history_calls: AtomicU64,
}

impl MockObservationSource {
    pub fn new() -> Self {
        Self {
            should_fail: RwLock::new(false),
            today_calls: AtomicU64::new(0),
            history_calls: AtomicU64::new(0),
        }
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
}

#[async_trait]
impl ObservationSource for MockObservationSource {
    async fn fetch_today(&self, _units: Units) -> Result<Bytes, DomainError> {
        self.today_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::upstream("observations", "mock failure"));
        }
        let record = json!({
            "epoch": Utc::now().timestamp(),
            "tz": "America/Moncton",
            "lat": 45.27,
            "lon": -66.06
        });
        Ok(Bytes::from(json!({ "observations": [record] }).to_string()))
    }

    async fn fetch_history(&self, _date: NaiveDate) -> Result<Bytes, DomainError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::upstream("history", "mock failure"));
        }
        Ok(Bytes::from_static(br#"{"observations":[]}"#))
    }
}

pub fn today_use_case(
    cache: Arc<ReadThroughCache>,
    source: Arc<MockObservationSource>,
) -> Arc<GetTodayObservationsUseCase> {
    Arc::new(GetTodayObservationsUseCase::new(cache, source))
}

#[derive(Default)]
pub struct MockAstronomySource {
    calls: AtomicU64,
}

impl MockAstronomySource {
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AstronomySource for MockAstronomySource {
    async fn fetch_moon_angle(
        &self,
        _position: StationPosition,
        _at: NaiveDateTime,
    ) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("90.0".to_string())
    }
}

#[derive(Default)]
pub struct MockSunTimesSource {
    calls: AtomicU64,
}

impl MockSunTimesSource {
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SunTimesSource for MockSunTimesSource {
    async fn fetch_sun_times(&self, _position: StationPosition) -> Result<Bytes, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Bytes::from_static(br#"{"status":"OK"}"#))
    }
}

#[derive(Default)]
pub struct MockFeedSource {
    calls: AtomicU64,
    failing_url: Option<String>,
}

impl MockFeedSource {
    pub fn failing_for(url: &str) -> Self {
        Self {
            calls: AtomicU64::new(0),
            failing_url: Some(url.to_string()),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_feed(&self, url: &str) -> Result<Bytes, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_url.as_deref() == Some(url) {
            return Err(DomainError::upstream("rss", "mock failure"));
        }
        Ok(Bytes::from_static(b"<rss/>"))
    }
}
