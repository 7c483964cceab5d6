use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, instrument, warn};

use zeroday_domain::shared::{DomainError, ProfileHandle};

impl super::ContributionFeed {
    /// Refresh now, then every refresh interval until [`shutdown`].
    ///
    /// Starting again replaces the running task.
    ///
    /// [`shutdown`]: super::ContributionFeed::shutdown
    #[instrument(skip(self))]
    pub async fn start(&self, identity: &str) -> Result<(), DomainError> {
        let handle = ProfileHandle::parse(identity)?;
        if !self.is_alive() {
            return Err(DomainError::Validation(
                "Contribution feed has been shut down".to_string(),
            ));
        }

        let shared = Arc::clone(&self.shared);
        let period = shared.refresh_interval;
        if period.is_zero() {
            return Err(DomainError::Validation(
                "Refresh interval must be greater than zero".to_string(),
            ));
        }
        info!(
            "⏰ Scheduling contribution refresh for '{}' every {}s",
            handle,
            period.as_secs()
        );

        let join_handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // First tick completes immediately: the initial load
                ticker.tick().await;
                if !shared.alive.load(Ordering::Acquire) {
                    break;
                }
                shared.refresh(&handle).await;
            }
        });

        if let Some(old_handle) = self.task_slot().replace(join_handle) {
            warn!("⚠️  Aborting previous refresh task");
            old_handle.abort();
        }

        Ok(())
    }

    /// Stop the repeating refresh and drop any result still in flight.
    ///
    /// The feed cannot be restarted afterwards.
    pub async fn shutdown(&self) {
        self.shared.alive.store(false, Ordering::Release);

        let stopped = self.task_slot().take();
        if let Some(handle) = stopped {
            handle.abort();
            info!("🛑 Contribution refresh task stopped");
        }
    }

    /// Whether a refresh task is currently scheduled
    pub fn is_running(&self) -> bool {
        self.task_slot()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}
