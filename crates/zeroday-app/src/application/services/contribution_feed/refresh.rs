use chrono::Utc;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use zeroday_domain::activity::{
    ActivityDay, ActivitySeries, ActivitySummary, DataOrigin, RemoteContributions,
};
use zeroday_domain::shared::{ProfileHandle, RefreshId};

use super::types::FeedSnapshot;

impl super::FeedShared {
    /// One refresh cycle: fetch, fall back if needed, derive, publish.
    ///
    /// Never fails. The returned snapshot is published only while the feed
    /// is alive.
    pub(super) async fn refresh(&self, handle: &ProfileHandle) -> Arc<FeedSnapshot> {
        let refresh_id = RefreshId::new();
        let started_at = Instant::now();

        let (origin, days, reported_total) = match self.source.fetch(handle).await {
            Ok(remote) if !remote.days.is_empty() => {
                let (days, reported_total) = Self::accept_remote(&refresh_id, remote);
                (DataOrigin::Remote, days, reported_total)
            }
            Ok(_) => {
                warn!(
                    refresh_id = %refresh_id,
                    handle = %handle,
                    "Remote contributions were empty, using synthetic data"
                );
                (DataOrigin::Synthetic, self.synthesize(), None)
            }
            Err(e) => {
                warn!(
                    refresh_id = %refresh_id,
                    handle = %handle,
                    error = %e.format_with_code(),
                    recoverable = e.is_recoverable(),
                    "Contributions fetch failed, using synthetic data"
                );
                (DataOrigin::Synthetic, self.synthesize(), None)
            }
        };

        let summary = ActivitySummary::from_days(&days, reported_total);
        let snapshot = Arc::new(FeedSnapshot {
            refresh_id: Some(refresh_id.clone()),
            profile: Some(handle.clone()),
            loading: false,
            origin: Some(origin),
            days,
            summary,
            refreshed_at: Some(Utc::now()),
        });

        if self.alive.load(Ordering::Acquire) {
            self.publisher.send_replace(Arc::clone(&snapshot));
            info!(
                refresh_id = %refresh_id,
                handle = %handle,
                origin = origin.as_str(),
                days = snapshot.days.len(),
                total = summary.total,
                current_streak = summary.current_streak,
                longest_streak = summary.longest_streak,
                elapsed_ms = started_at.elapsed().as_millis() as u64,
                "Contribution feed refreshed"
            );
        } else {
            debug!(
                refresh_id = %refresh_id,
                handle = %handle,
                "Feed shut down before refresh completed, result dropped"
            );
        }

        snapshot
    }

    fn accept_remote(
        refresh_id: &RefreshId,
        remote: RemoteContributions,
    ) -> (Vec<ActivityDay>, Option<u64>) {
        let (series, repair) = ActivitySeries::normalize(remote.days);
        if !repair.is_clean() {
            warn!(
                refresh_id = %refresh_id,
                reordered = repair.reordered,
                duplicates_dropped = repair.duplicates_dropped,
                "Remote contributions were repaired"
            );
        }
        if !series.is_contiguous() {
            debug!(refresh_id = %refresh_id, "Remote contributions contain date gaps");
        }
        (series.into_days(), remote.reported_total)
    }

    fn synthesize(&self) -> Vec<ActivityDay> {
        self.generator.generate_now((self.today)())
    }
}
