use async_trait::async_trait;

use super::value_objects::ActivityDay;
use crate::shared::{DomainError, ProfileHandle};

/// A well-formed contributions document as reported by a remote source
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteContributions {
    pub days: Vec<ActivityDay>,
    /// Year total as reported by the source, when it sends one
    pub reported_total: Option<u64>,
}

/// Port for fetching a profile's trailing-year contributions.
///
/// Implementations make a single attempt; retry policy belongs to the caller.
#[async_trait]
pub trait ContributionSource: Send + Sync {
    async fn fetch(&self, handle: &ProfileHandle) -> Result<RemoteContributions, DomainError>;
}
