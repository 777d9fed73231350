use std::fmt;

/// Key of an entry in the shared TTL cache.
///
/// The set is closed: one key per upstream resource, plus one per configured
/// RSS feed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// 1-day observations in imperial units, feeding the daily summary.
    WuToday,
    /// 1-day observations in metric units, index 0 of the weekly history.
    WuTodayHistory,
    /// The six calendar days before today, cached as one unit.
    WuRestHistory,
    Moon,
    SunriseSunset,
    /// RSS feed, keyed by the public path it is served under.
    Rss(String),
}

impl CacheKey {
    pub fn rss(path: impl Into<String>) -> Self {
        Self::Rss(path.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::WuToday => "wutoday",
            Self::WuTodayHistory => "wuTodayHistory",
            Self::WuRestHistory => "wuRestHistory",
            Self::Moon => "moon",
            Self::SunriseSunset => "sunriseSunset",
            Self::Rss(path) => path,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
