use serde::{Deserialize, Serialize};

use zeroday_domain::activity::{ActivityDay, MonthLabel};

use crate::application::services::FeedSnapshot;

const PROFILE_BASE_URL: &str = "https://github.com/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDayDto {
    pub date: String, // YYYY-MM-DD
    pub count: u32,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionWeekDto {
    pub days: Vec<ContributionDayDto>,
    /// Empty cells to draw after the last day of a short week
    pub padding: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLabelDto {
    pub month: String,
    pub week_index: usize,
}

/// Everything the heatmap renderer needs from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionGraphDto {
    pub days: Vec<ContributionDayDto>,
    pub total: u64,
    pub today_count: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub loading: bool,
    pub is_synthetic: bool,
    pub weeks: Vec<ContributionWeekDto>,
    pub month_labels: Vec<MonthLabelDto>,
    pub refreshed_at: Option<String>, // RFC 3339
    /// Public profile page of the feed's identity
    pub profile_url: Option<String>,
}

impl From<&ActivityDay> for ContributionDayDto {
    fn from(day: &ActivityDay) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            count: day.count,
            level: day.level.value(),
        }
    }
}

impl From<MonthLabel> for MonthLabelDto {
    fn from(label: MonthLabel) -> Self {
        Self {
            month: label.month,
            week_index: label.week_index,
        }
    }
}

impl ContributionGraphDto {
    pub fn from_snapshot(snapshot: &FeedSnapshot) -> Self {
        let weeks = snapshot.weeks();
        let month_labels = snapshot
            .month_labels()
            .into_iter()
            .map(MonthLabelDto::from)
            .collect();

        Self {
            days: snapshot.days.iter().map(ContributionDayDto::from).collect(),
            total: snapshot.summary.total,
            today_count: snapshot.summary.today_count,
            current_streak: snapshot.summary.current_streak,
            longest_streak: snapshot.summary.longest_streak,
            loading: snapshot.loading,
            is_synthetic: snapshot.is_synthetic(),
            weeks: weeks
                .iter()
                .map(|week| ContributionWeekDto {
                    days: week.days.iter().map(ContributionDayDto::from).collect(),
                    padding: week.padding,
                })
                .collect(),
            month_labels,
            refreshed_at: snapshot.refreshed_at.map(|at| at.to_rfc3339()),
            profile_url: snapshot
                .profile
                .as_ref()
                .map(|handle| format!("{}{}", PROFILE_BASE_URL, handle)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use zeroday_domain::activity::{ActivitySummary, DataOrigin};
    use zeroday_domain::shared::{ProfileHandle, RefreshId};

    fn snapshot_with_days(count: i64) -> FeedSnapshot {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let days: Vec<ActivityDay> = (0..count)
            .map(|i| ActivityDay::with_derived_level(start + Duration::days(i), (i % 5) as u32))
            .collect();
        FeedSnapshot {
            refresh_id: Some(RefreshId::new()),
            profile: Some(ProfileHandle::parse("octocat").unwrap()),
            loading: false,
            origin: Some(DataOrigin::Synthetic),
            summary: ActivitySummary::from_days(&days, None),
            days,
            refreshed_at: Some(Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_loading_snapshot_maps_to_empty_graph() {
        let dto = ContributionGraphDto::from_snapshot(&FeedSnapshot::initial());

        assert!(dto.loading);
        assert!(!dto.is_synthetic);
        assert!(dto.days.is_empty());
        assert!(dto.weeks.is_empty());
        assert!(dto.month_labels.is_empty());
        assert_eq!(dto.refreshed_at, None);
        assert_eq!(dto.profile_url, None);
    }

    #[test]
    fn test_graph_carries_weeks_and_labels() {
        let dto = ContributionGraphDto::from_snapshot(&snapshot_with_days(10));

        assert!(dto.is_synthetic);
        assert_eq!(dto.days.len(), 10);
        assert_eq!(dto.weeks.len(), 2);
        assert_eq!(dto.weeks[1].days.len(), 3);
        assert_eq!(dto.weeks[1].padding, 4);
        assert_eq!(
            dto.month_labels,
            vec![MonthLabelDto {
                month: "Jan".to_string(),
                week_index: 0
            }]
        );
        assert_eq!(dto.days[0].date, "2026-01-01");
        assert_eq!(dto.refreshed_at.as_deref(), Some("2026-01-10T12:00:00+00:00"));
        assert_eq!(dto.profile_url.as_deref(), Some("https://github.com/octocat"));
    }

    #[test]
    fn test_graph_serializes_summary_fields() {
        let dto = ContributionGraphDto::from_snapshot(&snapshot_with_days(10));
        let json = serde_json::to_value(&dto).unwrap();

        // counts: 0,1,2,3,4,0,1,2,3,4
        assert_eq!(json["total"], 20);
        assert_eq!(json["today_count"], 4);
        assert_eq!(json["current_streak"], 4);
        assert_eq!(json["longest_streak"], 4);
        assert_eq!(json["days"][2], serde_json::json!({ "date": "2026-01-03", "count": 2, "level": 1 }));
    }
}
