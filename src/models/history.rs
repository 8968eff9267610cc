use chrono::{DateTime, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::mood::MoodId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodHistoryEntry {
    pub id: String,
    pub mood: MoodId,
    pub timestamp: DateTime<Utc>,
    /// 1-10
    pub intensity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One cell of the week-at-a-glance strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMood {
    pub day: Weekday,
    pub mood: MoodId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn message(&self) -> &'static str {
        match self {
            Trend::Improving => "Your mood is improving! 🌟",
            Trend::Declining => "You might need some extra care 💙",
            Trend::Stable => "Your mood is stable ✨",
        }
    }
}

impl Default for Trend {
    fn default() -> Self {
        Self::Stable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::Week
    }
}

impl TimeRange {
    pub fn span(&self) -> Duration {
        match self {
            TimeRange::Week => Duration::days(7),
            TimeRange::Month => Duration::days(30),
            TimeRange::Quarter => Duration::days(90),
            TimeRange::Year => Duration::days(365),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "Last 7 days",
            TimeRange::Month => "Last 30 days",
            TimeRange::Quarter => "Last 3 months",
            TimeRange::Year => "Last year",
        }
    }
}
