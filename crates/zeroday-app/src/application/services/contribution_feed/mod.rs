mod refresh;
mod scheduler;
mod types;


pub use types::{FeedOptions, FeedSnapshot};

use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use zeroday_domain::activity::{ContributionSource, SyntheticActivityGenerator};
use zeroday_domain::shared::{DomainError, ProfileHandle};

/// State shared between the feed handle and its refresh task
struct FeedShared {
    source: Arc<dyn ContributionSource>,
    generator: SyntheticActivityGenerator,
    today: fn() -> NaiveDate,
    refresh_interval: Duration,
    /// Cleared on shutdown; results arriving afterwards are not published
    alive: AtomicBool,
    publisher: watch::Sender<Arc<FeedSnapshot>>,
}

/// Trailing-year contribution data for one profile, refreshed periodically.
///
/// Consumers read the latest [`FeedSnapshot`] through [`subscribe`] or
/// [`snapshot`]. Fetch failures never reach the consumer: the feed publishes
/// synthetic data instead and flags it via the snapshot's origin.
///
/// [`subscribe`]: ContributionFeed::subscribe
/// [`snapshot`]: ContributionFeed::snapshot
pub struct ContributionFeed {
    shared: Arc<FeedShared>,
    /// Repeating refresh task, if started. Never held across an await.
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ContributionFeed {
    pub fn new(source: Arc<dyn ContributionSource>, options: FeedOptions) -> Self {
        let (publisher, _) = watch::channel(Arc::new(FeedSnapshot::initial()));
        Self {
            shared: Arc::new(FeedShared {
                source,
                generator: options.generator,
                today: options.today,
                refresh_interval: options.refresh_interval,
                alive: AtomicBool::new(true),
                publisher,
            }),
            task: Mutex::new(None),
        }
    }

    /// Run one refresh cycle for `identity` and return the resulting snapshot.
    ///
    /// Only an empty or malformed identity is an error; fetch problems are
    /// absorbed by the synthetic fallback.
    pub async fn refresh(&self, identity: &str) -> Result<Arc<FeedSnapshot>, DomainError> {
        let handle = ProfileHandle::parse(identity)?;
        Ok(self.shared.refresh(&handle).await)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> Arc<FeedSnapshot> {
        self.shared.publisher.borrow().clone()
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Arc<FeedSnapshot>> {
        self.shared.publisher.subscribe()
    }

    pub fn is_alive(&self) -> bool {
        self.shared.alive.load(Ordering::Acquire)
    }

    pub fn refresh_interval(&self) -> Duration {
        self.shared.refresh_interval
    }

    fn task_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ContributionFeed {
    fn drop(&mut self) {
        self.shared.alive.store(false, Ordering::Release);
        let task = self.task.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = task.take() {
            handle.abort();
        }
    }
}
