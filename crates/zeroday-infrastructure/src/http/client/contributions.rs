use reqwest::header;
use tracing::{debug, info, warn};
use url::Url;

use zeroday_domain::activity::RemoteContributions;
use zeroday_domain::shared::{DomainError, ProfileHandle};

use super::types::{snippet, ContributionsResponse};

/// Selector for the trailing year ending today
const LAST_YEAR_SELECTOR: &str = "last";

impl super::HttpClient {
    /// Fetch the trailing-year contributions document - single attempt
    pub async fn fetch_contributions(
        &self,
        api_base_url: &Url,
        handle: &ProfileHandle,
    ) -> Result<RemoteContributions, DomainError> {
        let url = contributions_url(api_base_url, handle)?;
        debug!(url = %url, "Requesting contributions");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(Self::classify_error)?;

        let status = response.status();
        info!(handle = %handle, status = status.as_u16(), "Contributions response received");

        let body = response.text().await.map_err(Self::classify_error)?;

        if !status.is_success() {
            warn!(
                handle = %handle,
                status = status.as_u16(),
                body = %snippet(&body, 500),
                "Contributions request failed"
            );
            return Err(DomainError::ExternalService {
                status: status.as_u16(),
                message: snippet(&body, 200),
            });
        }

        debug!("Contributions response length: {} bytes", body.len());

        let parsed: ContributionsResponse = serde_json::from_str(&body).map_err(|e| {
            DomainError::Deserialization(format!(
                "Failed to parse contributions response: {} ({})",
                e,
                snippet(&body, 200)
            ))
        })?;

        parsed.into_domain()
    }
}

/// `{base}/v4/{handle}?y=last`
fn contributions_url(
    api_base_url: &Url,
    handle: &ProfileHandle,
) -> Result<Url, DomainError> {
    let mut url = api_base_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            DomainError::Configuration(format!("API base URL cannot be a base: {}", api_base_url))
        })?
        .pop_if_empty()
        .push("v4")
        .push(handle.as_str());
    url.query_pairs_mut()
        .clear()
        .append_pair("y", LAST_YEAR_SELECTOR);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> ProfileHandle {
        ProfileHandle::parse("octocat").unwrap()
    }

    #[test]
    fn test_contributions_url_from_bare_host() {
        let base = Url::parse("https://github-contributions-api.jogruber.de").unwrap();
        let url = contributions_url(&base, &handle()).unwrap();

        assert_eq!(
            url.as_str(),
            "https://github-contributions-api.jogruber.de/v4/octocat?y=last"
        );
    }

    #[test]
    fn test_contributions_url_keeps_base_path() {
        let base = Url::parse("http://localhost:8080/proxy/").unwrap();
        let url = contributions_url(&base, &handle()).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/proxy/v4/octocat?y=last");
    }

    #[test]
    fn test_contributions_url_rejects_non_base_url() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        let err = contributions_url(&base, &handle()).unwrap_err();

        assert!(matches!(err, DomainError::Configuration(_)));
    }
}
