use std::sync::Arc;

use crate::application::dtos::ContributionGraphDto;
use crate::application::services::{ConfigService, ContributionFeed};
use zeroday_domain::shared::{DomainError, ProfileHandle};

pub struct AppState {
    pub config: Arc<ConfigService>,
    pub feed: ContributionFeed,
    /// Profile the feed refreshes for
    pub identity: ProfileHandle,
}

impl AppState {
    /// Begin the periodic refresh for the configured identity
    pub async fn start(&self) -> Result<(), DomainError> {
        self.feed.start(self.identity.as_str()).await
    }

    pub async fn shutdown(&self) {
        self.feed.shutdown().await;
    }

    /// Latest snapshot in presentation form
    pub fn graph(&self) -> ContributionGraphDto {
        ContributionGraphDto::from_snapshot(&self.feed.snapshot())
    }
}
