use chrono::{DateTime, Local, NaiveDate, Utc};
use std::time::Duration;

use zeroday_domain::activity::{
    chunk_weeks, month_labels, ActivityDay, ActivitySummary, DataOrigin, MonthLabel,
    SyntheticActivityGenerator, Week,
};
use zeroday_domain::shared::{ProfileHandle, RefreshId};

/// The unit the feed publishes. Replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    /// `None` until the first refresh completes
    pub refresh_id: Option<RefreshId>,
    /// Profile the data belongs to, `None` while loading
    pub profile: Option<ProfileHandle>,
    pub loading: bool,
    /// `None` while loading
    pub origin: Option<DataOrigin>,
    pub days: Vec<ActivityDay>,
    pub summary: ActivitySummary,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl FeedSnapshot {
    /// Placeholder published before the first refresh
    pub fn initial() -> Self {
        Self {
            refresh_id: None,
            profile: None,
            loading: true,
            origin: None,
            days: Vec::new(),
            summary: ActivitySummary::default(),
            refreshed_at: None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.origin == Some(DataOrigin::Synthetic)
    }

    pub fn weeks(&self) -> Vec<Week> {
        chunk_weeks(&self.days)
    }

    pub fn month_labels(&self) -> Vec<MonthLabel> {
        month_labels(&self.weeks())
    }
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// Knobs for [`super::ContributionFeed`]
#[derive(Debug, Clone, Copy)]
pub struct FeedOptions {
    pub refresh_interval: Duration,
    pub generator: SyntheticActivityGenerator,
    /// Reference day for synthetic data
    pub today: fn() -> NaiveDate,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(300),
            generator: SyntheticActivityGenerator::default(),
            today: local_today,
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
