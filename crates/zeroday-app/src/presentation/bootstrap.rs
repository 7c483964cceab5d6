use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::services::{ConfigService, ContributionFeed, FeedOptions};
use crate::presentation::state::AppState;
use zeroday_domain::activity::ContributionSource;
use zeroday_infrastructure::http::{HttpClient, HttpContributionSource};

/// Build the feed and its HTTP source from the loaded configuration
pub fn build_app_state(config: Arc<ConfigService>) -> Result<AppState> {
    let started_at = Instant::now();
    let settings = config.settings();

    let (identity, api_base_url) = settings
        .validate()
        .map_err(|e| anyhow::anyhow!(e.format_with_code()))
        .context("Invalid feed configuration")?;
    let timeouts = settings.timeouts();

    info!("🌐 Contributions API: {}", api_base_url);
    let client = HttpClient::new(&timeouts)?;
    let source = Arc::new(HttpContributionSource::new(client, api_base_url))
        as Arc<dyn ContributionSource>;

    let feed = ContributionFeed::new(
        source,
        FeedOptions {
            refresh_interval: timeouts.refresh_interval,
            ..FeedOptions::default()
        },
    );

    info!(
        "✓ Contribution feed ready for '{}' ({}ms)",
        identity,
        started_at.elapsed().as_millis()
    );

    Ok(AppState {
        config,
        feed,
        identity,
    })
}
