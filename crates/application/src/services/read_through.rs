use crate::ports::{Clock, TtlCachePort};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;
use wsrelay_domain::{CacheKey, DomainError};

/// Payload produced by a fetcher together with the expiry it chose for it.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub payload: Bytes,
    pub expires_at: DateTime<Utc>,
}

impl Fetched {
    pub fn new(payload: impl Into<Bytes>, expires_at: DateTime<Utc>) -> Self {
        Self {
            payload: payload.into(),
            expires_at,
        }
    }
}

/// The single fetch-and-populate path every fetcher goes through.
///
/// A fresh entry is returned as-is; otherwise the fetcher runs outside any
/// lock and its result is stored. Concurrent misses on the same key are not
/// coalesced, so each caller fetches and the last `put` wins.
pub struct ReadThroughCache {
    store: Arc<dyn TtlCachePort>,
    clock: Arc<dyn Clock>,
    upstream_fetches: AtomicU64,
}

impl ReadThroughCache {
    pub fn new(store: Arc<dyn TtlCachePort>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            upstream_fetches: AtomicU64::new(0),
        }
    }

    pub async fn get_or_fetch<F, Fut>(&self, key: CacheKey, fetch: F) -> Result<Bytes, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Fetched, DomainError>>,
    {
        if let Some(payload) = self.store.get(&key).into_fresh() {
            debug!(key = %key, "Cache hit");
            return Ok(payload);
        }

        self.refresh(key, fetch).await
    }

    /// Fetches unconditionally and stores the result. The store is left
    /// untouched when the fetcher fails.
    pub async fn refresh<F, Fut>(&self, key: CacheKey, fetch: F) -> Result<Bytes, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Fetched, DomainError>>,
    {
        debug!(key = %key, "Fetching from upstream");

        let fetched = fetch().await?;
        self.store
            .put(key, fetched.payload.clone(), fetched.expires_at);
        Ok(fetched.payload)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn store(&self) -> &Arc<dyn TtlCachePort> {
        &self.store
    }

    /// Called by fetchers once per upstream HTTP call, so a batch fetch
    /// counts every request it makes.
    pub fn record_upstream_call(&self) {
        self.upstream_fetches.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of upstream calls made by fetchers since start-up.
    pub fn upstream_fetches(&self) -> u64 {
        self.upstream_fetches.load(Ordering::Relaxed)
    }
}
