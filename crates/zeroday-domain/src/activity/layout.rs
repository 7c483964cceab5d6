use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::value_objects::ActivityDay;

pub const DAYS_PER_WEEK: usize = 7;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A column of the heatmap: up to seven consecutive days.
///
/// `padding` is how many empty cells the renderer adds after the last
/// chunk; the day sequence itself is never padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub days: Vec<ActivityDay>,
    pub padding: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    pub month: String,
    pub week_index: usize,
}

/// Split the sequence into 7-day chunks starting at the oldest day
pub fn chunk_weeks(days: &[ActivityDay]) -> Vec<Week> {
    days.chunks(DAYS_PER_WEEK)
        .map(|chunk| Week {
            days: chunk.to_vec(),
            padding: DAYS_PER_WEEK - chunk.len(),
        })
        .collect()
}

/// Emit a label whenever a week's first day changes month from the last label
pub fn month_labels(weeks: &[Week]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last_month: Option<u32> = None;

    for (week_index, week) in weeks.iter().enumerate() {
        let Some(first) = week.days.first() else {
            continue;
        };
        let month = first.date.month0();
        if last_month != Some(month) {
            labels.push(MonthLabel {
                month: MONTH_NAMES[month as usize].to_string(),
                week_index,
            });
            last_month = Some(month);
        }
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn year_ending(end: NaiveDate) -> Vec<ActivityDay> {
        (0..365)
            .rev()
            .map(|offset| ActivityDay::idle(end - Duration::days(offset)))
            .collect()
    }

    #[test]
    fn test_year_chunks_into_53_weeks() {
        let days = year_ending(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let weeks = chunk_weeks(&days);

        assert_eq!(weeks.len(), 53);
        assert!(weeks[..52].iter().all(|w| w.days.len() == 7 && w.padding == 0));
        assert_eq!(weeks[52].days.len(), 1);
        assert_eq!(weeks[52].padding, 6);
    }

    #[test]
    fn test_empty_sequence_has_no_weeks_or_labels() {
        let weeks = chunk_weeks(&[]);
        assert!(weeks.is_empty());
        assert!(month_labels(&weeks).is_empty());
    }

    #[test]
    fn test_month_labels_follow_first_day_of_each_week() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let days: Vec<ActivityDay> = (0..70)
            .map(|i| ActivityDay::idle(start + Duration::days(i)))
            .collect();
        let labels = month_labels(&chunk_weeks(&days));

        // Weeks start Jan 1, 8, 15, 22, 29, Feb 5, ... Mar 5
        let expected = vec![
            MonthLabel { month: "Jan".to_string(), week_index: 0 },
            MonthLabel { month: "Feb".to_string(), week_index: 5 },
            MonthLabel { month: "Mar".to_string(), week_index: 9 },
        ];
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_same_month_a_year_apart_is_labelled_twice() {
        let days = year_ending(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let labels = month_labels(&chunk_weeks(&days));

        assert_eq!(labels.first().unwrap().month, "Oct");
        assert_eq!(labels.last().unwrap().month, "Oct");
        assert_eq!(labels.len(), 13);
    }
}
