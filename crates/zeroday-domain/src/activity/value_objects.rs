use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Quantized intensity of one day, 0 (no activity) to 4 (busiest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ActivityLevel(u8);

impl ActivityLevel {
    pub const NONE: Self = Self(0);
    pub const MAX: Self = Self(4);

    /// Bucket a count: 0 → 0, 1-3 → 1, 4-6 → 2, 7-10 → 3, above → 4.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self(0),
            1..=3 => Self(1),
            4..=6 => Self(2),
            7..=10 => Self(3),
            _ => Self(4),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(DomainError::InvalidInput(format!(
                "Activity level must be within 0..=4, got {}",
                value
            )));
        }
        Ok(Self(value))
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.0
    }
}

/// One calendar day of recorded activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
    pub level: ActivityLevel,
}

impl ActivityDay {
    pub fn new(date: NaiveDate, count: u32, level: ActivityLevel) -> Self {
        Self { date, count, level }
    }

    /// Build a day whose level is derived from its count
    pub fn with_derived_level(date: NaiveDate, count: u32) -> Self {
        Self::new(date, count, ActivityLevel::from_count(count))
    }

    /// A day with no recorded activity
    pub fn idle(date: NaiveDate) -> Self {
        Self::new(date, 0, ActivityLevel::NONE)
    }

    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

/// Where a published sequence came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Remote,
    Synthetic,
}

impl DataOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataOrigin::Remote => "remote",
            DataOrigin::Synthetic => "synthetic",
        }
    }
}
