use bytes::Bytes;
use chrono::{DateTime, Utc};

/// A cached upstream payload and the instant it stops being fresh.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: Bytes,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(payload: Bytes, expires_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            expires_at,
        }
    }

    #[inline]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Result of a cache read: `found` and `fresh` folded into one enum.
///
/// A stale entry still hands back its payload so callers that tolerate
/// staleness can use it.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Missing,
    Fresh(Bytes),
    Stale(Bytes),
}

impl CacheLookup {
    pub fn found(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }

    pub fn payload(&self) -> Option<&Bytes> {
        match self {
            Self::Missing => None,
            Self::Fresh(payload) | Self::Stale(payload) => Some(payload),
        }
    }

    /// The payload only when it may be served as-is.
    pub fn into_fresh(self) -> Option<Bytes> {
        match self {
            Self::Fresh(payload) => Some(payload),
            _ => None,
        }
    }
}
