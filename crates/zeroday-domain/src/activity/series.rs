use std::collections::BTreeMap;

use super::value_objects::ActivityDay;

/// A chronologically ordered run of activity days with unique dates.
///
/// Construction either trusts an already ordered input or repairs it,
/// reporting what had to be fixed so callers can log it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivitySeries {
    days: Vec<ActivityDay>,
}

/// What [`ActivitySeries::normalize`] had to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesRepair {
    pub reordered: bool,
    pub duplicates_dropped: usize,
}

impl SeriesRepair {
    pub fn is_clean(&self) -> bool {
        !self.reordered && self.duplicates_dropped == 0
    }
}

impl ActivitySeries {
    /// Sort by date and keep the last occurrence of any duplicated date.
    pub fn normalize(days: Vec<ActivityDay>) -> (Self, SeriesRepair) {
        let reordered = days.windows(2).any(|pair| pair[0].date > pair[1].date);
        let input_len = days.len();

        let mut by_date = BTreeMap::new();
        for day in days {
            by_date.insert(day.date, day);
        }

        let repair = SeriesRepair {
            reordered,
            duplicates_dropped: input_len - by_date.len(),
        };

        (
            Self {
                days: by_date.into_values().collect(),
            },
            repair,
        )
    }

    pub fn days(&self) -> &[ActivityDay] {
        &self.days
    }

    pub fn into_days(self) -> Vec<ActivityDay> {
        self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn last(&self) -> Option<&ActivityDay> {
        self.days.last()
    }

    /// True when every date follows its predecessor by exactly one day
    pub fn is_contiguous(&self) -> bool {
        self.days
            .windows(2)
            .all(|pair| pair[0].date.succ_opt() == Some(pair[1].date))
    }
}
