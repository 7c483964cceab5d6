use std::time::Duration;

/// Timing knobs for the contribution feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// HTTP request timeout (default: 30 seconds)
    pub http_request: Duration,

    /// Interval between feed refreshes (default: 5 minutes)
    pub refresh_interval: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            refresh_interval: Duration::from_secs(300),
        }
    }
}
