use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `Cache-Control: max-age` sent to browsers, per request path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpCacheConfig {
    pub paths: BTreeMap<String, u64>,

    pub default_secs: u64,

    /// Applied to any path with a file extension other than `.xml`.
    pub static_secs: u64,
}

impl Default for HttpCacheConfig {
    fn default() -> Self {
        let paths = [
            ("/", 120 * 60),
            ("/stats", 0),
            ("/latest", 60),
            ("/weekly", 5 * 60),
            ("/moon", 20 * 60),
            ("/wutoday", 5 * 60),
            ("/rss/nb10_e.xml", 5 * 60),
            ("/rss/nb16_e.xml", 5 * 60),
            ("/rss/city/nb-17_e.xml", 5 * 60),
        ]
        .into_iter()
        .map(|(path, secs)| (path.to_string(), secs))
        .collect();

        Self {
            paths,
            default_secs: 60,
            static_secs: 24 * 60 * 60,
        }
    }
}

impl HttpCacheConfig {
    pub fn max_age_for(&self, path: &str) -> u64 {
        if is_static_asset(path) {
            self.static_secs
        } else {
            self.paths.get(path).copied().unwrap_or(self.default_secs)
        }
    }
}

/// Paths whose last segment has an extension, `.xml` feeds excepted.
pub fn is_static_asset(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or(path);
    match last.rsplit_once('.') {
        Some((_, ext)) => !ext.is_empty() && ext != "xml",
        None => false,
    }
}
