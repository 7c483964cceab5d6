use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use zeroday_infrastructure::config::{FeedSettings, LogLevel};

/// Application configuration service backed by `feed_config.json`
pub struct ConfigService {
    settings: FeedSettings,
    config_path: PathBuf,
}

impl ConfigService {
    /// Load the config file, creating it with defaults if missing
    pub fn load(config_path: PathBuf) -> Result<Self> {
        let settings = FeedSettings::load_or_init(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        info!("🔧 Initial log level: {}", settings.log_level.as_str());

        Ok(Self {
            settings,
            config_path,
        })
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    /// Configured log level
    pub fn get_log_level(&self) -> LogLevel {
        self.settings.log_level
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
