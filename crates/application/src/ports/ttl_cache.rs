use bytes::Bytes;
use chrono::{DateTime, Utc};
use wsrelay_domain::{CacheKey, CacheLookup};

/// Shared key → (payload, expiry) store.
///
/// Implementations guard every read and write with a single lock held only
/// for the map access; no I/O happens under it. There is no single-flight:
/// concurrent misses on one key each fetch and each `put`, last writer wins.
pub trait TtlCachePort: Send + Sync {
    fn get(&self, key: &CacheKey) -> CacheLookup;

    fn put(&self, key: CacheKey, payload: Bytes, expires_at: DateTime<Utc>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
