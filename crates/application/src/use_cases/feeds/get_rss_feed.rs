use crate::ports::FeedSource;
use crate::services::{Fetched, ReadThroughCache};
use bytes::Bytes;
use chrono::Duration;
use std::sync::Arc;
use wsrelay_domain::config::FeedConfig;
use wsrelay_domain::{CacheKey, DomainError};

const FEED_TTL_SECS: i64 = 15 * 60;

/// Proxies the configured RSS feeds, each under its own cache key.
pub struct GetRssFeedUseCase {
    cache: Arc<ReadThroughCache>,
    source: Arc<dyn FeedSource>,
    feeds: Vec<FeedConfig>,
}

impl GetRssFeedUseCase {
    pub fn new(
        cache: Arc<ReadThroughCache>,
        source: Arc<dyn FeedSource>,
        feeds: Vec<FeedConfig>,
    ) -> Self {
        Self {
            cache,
            source,
            feeds,
        }
    }

    /// Feed body for a request path such as `/rss/nb10_e.xml`.
    pub async fn execute(&self, path: &str) -> Result<Bytes, DomainError> {
        let feed = self
            .feeds
            .iter()
            .find(|feed| feed.path == path)
            .ok_or_else(|| DomainError::UnknownFeed(path.to_string()))?;

        let (cache, source) = (&self.cache, &self.source);
        let url = feed.url.as_str();

        cache
            .get_or_fetch(CacheKey::rss(path), move || async move {
                cache.record_upstream_call();
                let body = source.fetch_feed(url).await?;
                Ok::<_, DomainError>(Fetched::new(
                    body,
                    cache.now() + Duration::seconds(FEED_TTL_SECS),
                ))
            })
            .await
    }

    pub fn feed_paths(&self) -> impl Iterator<Item = &str> {
        self.feeds.iter().map(|feed| feed.path.as_str())
    }
}
