use async_trait::async_trait;
use bytes::Bytes;
use wsrelay_domain::DomainError;

#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_feed(&self, url: &str) -> Result<Bytes, DomainError>;
}
