use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::trace;
use wsrelay_application::ports::{Clock, TtlCachePort};
use wsrelay_domain::{CacheEntry, CacheKey, CacheLookup};

/// The process-wide TTL cache: one map behind one mutex.
///
/// The lock covers only the map access. Entries are never evicted, only
/// overwritten; the key set is small and fixed.
pub struct TtlCacheStore {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl TtlCacheStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TtlCachePort for TtlCacheStore {
    fn get(&self, key: &CacheKey) -> CacheLookup {
        let now = self.clock.now();
        let entries = self.entries();

        match entries.get(key) {
            None => CacheLookup::Missing,
            Some(entry) if entry.is_fresh(now) => CacheLookup::Fresh(entry.payload.clone()),
            Some(entry) => CacheLookup::Stale(entry.payload.clone()),
        }
    }

    fn put(&self, key: CacheKey, payload: Bytes, expires_at: DateTime<Utc>) {
        trace!(key = %key, %expires_at, bytes = payload.len(), "Cache put");
        self.entries()
            .insert(key, CacheEntry::new(payload, expires_at));
    }

    fn len(&self) -> usize {
        self.entries().len()
    }
}
