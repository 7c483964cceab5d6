pub mod config_service;
pub mod contribution_feed;

pub use config_service::ConfigService;
pub use contribution_feed::{ContributionFeed, FeedOptions, FeedSnapshot};
