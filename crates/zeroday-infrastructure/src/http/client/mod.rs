mod contributions;
mod types;

use anyhow::{Context, Result};
use reqwest::Client;
use zeroday_domain::shared::DomainError;

use crate::config::TimeoutConfig;
use types::USER_AGENT;

/// Thin reqwest wrapper shared by the HTTP adapters.
///
/// Every call is a single attempt: the feed's own refresh cadence is the
/// only retry mechanism.
#[derive(Clone)]
pub struct HttpClient {
    pub(super) client: Client,
}

impl HttpClient {
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.http_request)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Map a transport failure onto the domain error it represents
    pub(super) fn classify_error(error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::Timeout(error.to_string())
        } else if error.is_decode() {
            DomainError::Deserialization(error.to_string())
        } else {
            DomainError::Network(error.to_string())
        }
    }
}
