use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

use zeroday_domain::shared::{DomainError, ProfileHandle};

use super::TimeoutConfig;

pub const CONFIG_FILE_NAME: &str = "feed_config.json";
const APP_DIR_NAME: &str = "zeroday";
const DEFAULT_IDENTITY: &str = "aerlynvorynx";
const DEFAULT_API_BASE_URL: &str = "https://github-contributions-api.jogruber.de";

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Persistent feed configuration, stored as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    pub identity: String,
    pub api_base_url: String,
    pub refresh_interval_secs: u64,
    pub http_timeout_secs: u64,
    pub log_level: LogLevel,
}

impl Default for FeedSettings {
    fn default() -> Self {
        let timeouts = TimeoutConfig::default();
        Self {
            identity: DEFAULT_IDENTITY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            refresh_interval_secs: timeouts.refresh_interval.as_secs(),
            http_timeout_secs: timeouts.http_request.as_secs(),
            log_level: LogLevel::default(),
        }
    }
}

impl FeedSettings {
    /// Check every field and return the parsed handle and base URL
    pub fn validate(&self) -> Result<(ProfileHandle, Url), DomainError> {
        let handle = ProfileHandle::parse(&self.identity)?;
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            DomainError::Configuration(format!("Invalid api_base_url '{}': {}", self.api_base_url, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(DomainError::Configuration(format!(
                "api_base_url must be a hierarchical URL: {}",
                self.api_base_url
            )));
        }
        if self.refresh_interval_secs == 0 {
            return Err(DomainError::Configuration(
                "refresh_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.http_timeout_secs == 0 {
            return Err(DomainError::Configuration(
                "http_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok((handle, url))
    }

    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig {
            http_request: Duration::from_secs(self.http_timeout_secs),
            refresh_interval: Duration::from_secs(self.refresh_interval_secs),
        }
    }

    /// Load settings from `path`.
    ///
    /// A missing file is created with defaults. An unreadable or invalid file
    /// falls back to defaults and is left untouched.
    pub fn load_or_init(path: &Path) -> Result<Self, DomainError> {
        if !path.exists() {
            let settings = Self::default();
            settings.save(path)?;
            info!("📁 Created default config at: {}", path.display());
            return Ok(settings);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read config {}: {}. Using defaults", path.display(), e);
                return Ok(Self::default());
            }
        };

        match serde_json::from_str::<Self>(&content) {
            Ok(settings) => {
                info!("📁 Config loaded from: {}", path.display());
                Ok(settings)
            }
            Err(e) => {
                warn!("Invalid config {}: {}. Using defaults", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), DomainError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainError::Configuration(format!(
                    "Failed to create config dir {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::Configuration(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| {
            DomainError::Configuration(format!("Failed to write config {}: {}", path.display(), e))
        })
    }
}

/// `<platform config dir>/zeroday/feed_config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// `<platform data dir>/zeroday/logs`
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join("logs"))
}
