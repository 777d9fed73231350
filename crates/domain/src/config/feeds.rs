use serde::{Deserialize, Serialize};

/// An RSS feed proxied under `path`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FeedConfig {
    pub path: String,

    pub url: String,
}

impl FeedConfig {
    pub fn new(path: &str, url: &str) -> Self {
        Self {
            path: path.to_string(),
            url: url.to_string(),
        }
    }
}

pub fn default_feeds() -> Vec<FeedConfig> {
    vec![
        FeedConfig::new(
            "/rss/nb10_e.xml",
            "https://weather.gc.ca/rss/battleboard/nb10_e.xml",
        ),
        FeedConfig::new(
            "/rss/nb16_e.xml",
            "https://weather.gc.ca/rss/battleboard/nb16_e.xml",
        ),
        FeedConfig::new(
            "/rss/city/nb-17_e.xml",
            "https://weather.gc.ca/rss/city/nb-17_e.xml",
        ),
    ]
}
