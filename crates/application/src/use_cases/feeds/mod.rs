pub mod get_rss_feed;

pub use get_rss_feed::GetRssFeedUseCase;
