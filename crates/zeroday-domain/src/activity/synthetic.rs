use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::Rng;

use super::value_objects::ActivityDay;

/// Placeholder activity used when the remote source is unavailable.
///
/// Weekdays are busier than weekends so the heatmap looks plausible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticActivityGenerator {
    pub days: u32,
    pub weekday_activity_chance: f64,
    pub weekend_activity_chance: f64,
    pub max_count: u32,
}

impl Default for SyntheticActivityGenerator {
    fn default() -> Self {
        Self {
            days: 365,
            weekday_activity_chance: 0.7,
            weekend_activity_chance: 0.4,
            max_count: 15,
        }
    }
}

impl SyntheticActivityGenerator {
    /// Generate `days` consecutive days ending on `reference_day`, oldest first.
    pub fn generate<R: Rng>(&self, reference_day: NaiveDate, rng: &mut R) -> Vec<ActivityDay> {
        (0..self.days)
            .rev()
            .map(|offset| {
                let date = reference_day - Duration::days(i64::from(offset));
                let chance = if is_weekend(date) {
                    self.weekend_activity_chance
                } else {
                    self.weekday_activity_chance
                };

                if rng.gen::<f64>() < chance {
                    let count = rng.gen_range(1..=self.max_count.max(1));
                    ActivityDay::with_derived_level(date, count)
                } else {
                    ActivityDay::idle(date)
                }
            })
            .collect()
    }

    /// Generate with the thread-local RNG
    pub fn generate_now(&self, reference_day: NaiveDate) -> Vec<ActivityDay> {
        self.generate(reference_day, &mut rand::thread_rng())
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
