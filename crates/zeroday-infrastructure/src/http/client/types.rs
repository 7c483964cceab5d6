use chrono::NaiveDate;
use serde::Deserialize;

use zeroday_domain::activity::{ActivityDay, ActivityLevel, RemoteContributions};
use zeroday_domain::shared::DomainError;

pub const USER_AGENT: &str = concat!("zeroday/", env!("CARGO_PKG_VERSION"));

/// Body of `GET /v4/{handle}?y=last`
#[derive(Debug, Deserialize)]
pub(super) struct ContributionsResponse {
    #[serde(default)]
    pub contributions: Option<Vec<ContributionRecord>>,
    #[serde(default)]
    pub total: Option<ContributionTotals>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContributionRecord {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContributionTotals {
    #[serde(rename = "lastYear", default)]
    pub last_year: Option<u64>,
}

impl ContributionsResponse {
    /// Convert the wire document into domain days.
    ///
    /// A missing `contributions` field yields no days; an out-of-range level
    /// rejects the whole document. A zero `lastYear` is treated as absent.
    pub(super) fn into_domain(self) -> Result<RemoteContributions, DomainError> {
        let days = self
            .contributions
            .unwrap_or_default()
            .into_iter()
            .map(|record| -> Result<ActivityDay, DomainError> {
                let level = ActivityLevel::try_from(record.level).map_err(|e| {
                    DomainError::Deserialization(format!("{} on {}", e.message(), record.date))
                })?;
                Ok(ActivityDay::new(record.date, record.count, level))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(RemoteContributions {
            days,
            reported_total: self
                .total
                .and_then(|t| t.last_year)
                .filter(|&total| total > 0),
        })
    }
}

/// First `limit` characters of a response body, for logs and errors
pub(super) fn snippet(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_document() {
        let body = r#"{
            "total": { "lastYear": 42 },
            "contributions": [
                { "date": "2026-10-17", "count": 0, "level": 0 },
                { "date": "2026-10-18", "count": 12, "level": 4 }
            ]
        }"#;
        let parsed: ContributionsResponse = serde_json::from_str(body).unwrap();
        let remote = parsed.into_domain().unwrap();

        assert_eq!(remote.reported_total, Some(42));
        assert_eq!(remote.days.len(), 2);
        assert_eq!(remote.days[1].count, 12);
        assert_eq!(remote.days[1].level.value(), 4);
    }

    #[test]
    fn test_missing_fields_are_permissive() {
        let parsed: ContributionsResponse = serde_json::from_str("{}").unwrap();
        let remote = parsed.into_domain().unwrap();

        assert!(remote.days.is_empty());
        assert_eq!(remote.reported_total, None);
    }

    #[test]
    fn test_total_without_last_year_is_ignored() {
        let body = r#"{ "total": { "2025": 10 }, "contributions": [] }"#;
        let parsed: ContributionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_domain().unwrap().reported_total, None);
    }

    #[test]
    fn test_zero_last_year_is_not_reported() {
        let body = r#"{
            "total": { "lastYear": 0 },
            "contributions": [{ "date": "2026-10-18", "count": 3, "level": 1 }]
        }"#;
        let parsed: ContributionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_domain().unwrap().reported_total, None);
    }

    #[test]
    fn test_out_of_range_level_is_rejected() {
        let body = r#"{ "contributions": [{ "date": "2026-10-18", "count": 1, "level": 7 }] }"#;
        let parsed: ContributionsResponse = serde_json::from_str(body).unwrap();
        let err = parsed.into_domain().unwrap_err();

        assert!(matches!(err, DomainError::Deserialization(_)));
    }

    #[test]
    fn test_snippet_respects_char_boundaries() {
        assert_eq!(snippet("héllo wörld", 4), "héll");
        assert_eq!(snippet("ab", 10), "ab");
    }
}
