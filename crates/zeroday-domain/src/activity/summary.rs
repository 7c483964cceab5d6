use serde::{Deserialize, Serialize};

use super::value_objects::ActivityDay;

/// Aggregates derived from an activity sequence. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub total: u64,
    pub today_count: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Current and longest runs of active days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

impl Streaks {
    /// Single backward pass from the newest day.
    ///
    /// `current` is the run ending at the last index, so it is 0 whenever the
    /// newest day is idle. `longest` is the largest run seen anywhere.
    pub fn from_days(days: &[ActivityDay]) -> Self {
        let mut current = 0u32;
        let mut longest = 0u32;
        let mut streak = 0u32;
        let mut trailing_run_open = true;

        for day in days.iter().rev() {
            if day.is_active() {
                streak += 1;
                if trailing_run_open {
                    current = streak;
                }
                longest = longest.max(streak);
            } else {
                streak = 0;
                trailing_run_open = false;
            }
        }

        Self { current, longest }
    }
}

impl ActivitySummary {
    /// Derive the summary; a non-zero reported total overrides the summed counts.
    pub fn from_days(days: &[ActivityDay], reported_total: Option<u64>) -> Self {
        let streaks = Streaks::from_days(days);
        let summed: u64 = days.iter().map(|d| u64::from(d.count)).sum();

        Self {
            total: reported_total.filter(|&total| total > 0).unwrap_or(summed),
            today_count: days.last().map(|d| d.count).unwrap_or(0),
            current_streak: streaks.current,
            longest_streak: streaks.longest,
        }
    }
}
