use async_trait::async_trait;
use url::Url;

use zeroday_domain::activity::{ContributionSource, RemoteContributions};
use zeroday_domain::shared::{DomainError, ProfileHandle};

use super::client::HttpClient;

/// [`ContributionSource`] backed by the public contributions JSON API
pub struct HttpContributionSource {
    client: HttpClient,
    api_base_url: Url,
}

impl HttpContributionSource {
    pub fn new(client: HttpClient, api_base_url: Url) -> Self {
        Self {
            client,
            api_base_url,
        }
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }
}

#[async_trait]
impl ContributionSource for HttpContributionSource {
    async fn fetch(&self, handle: &ProfileHandle) -> Result<RemoteContributions, DomainError> {
        self.client
            .fetch_contributions(&self.api_base_url, handle)
            .await
    }
}
