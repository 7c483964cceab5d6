mod settings;
mod timeouts;

pub use settings::{
    default_config_path, default_log_dir, FeedSettings, LogLevel, CONFIG_FILE_NAME,
};
pub use timeouts::TimeoutConfig;
