use super::fetch_body;
use async_trait::async_trait;
use bytes::Bytes;
use wsrelay_application::ports::FeedSource;
use wsrelay_domain::DomainError;

pub struct RssFeedClient {
    client: reqwest::Client,
}

impl RssFeedClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedSource for RssFeedClient {
    async fn fetch_feed(&self, url: &str) -> Result<Bytes, DomainError> {
        fetch_body(self.client.get(url), "rss").await
    }
}
