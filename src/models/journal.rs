use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::mood::MoodId;

/// Full record captured when a draft is saved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub content: String,
    pub mood: Option<MoodId>,
    pub timestamp: DateTime<Utc>,
    pub word_count: usize,
    pub writing_time_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntrySummary {
    pub date: NaiveDate,
    /// `None` serializes as `"neutral"`, the label used for moodless entries.
    #[serde(with = "neutral_mood")]
    pub mood: Option<MoodId>,
    pub preview: String,
}

mod neutral_mood {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::mood::MoodId;

    const NEUTRAL: &str = "neutral";

    pub fn serialize<S: Serializer>(mood: &Option<MoodId>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(mood.map(|m| m.as_str()).unwrap_or(NEUTRAL))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<MoodId>, D::Error> {
        let raw = String::deserialize(d)?;
        // Anything unrecognized degrades to neutral instead of failing
        Ok(raw.parse().ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encouragement {
    Starting,
    FindingVoice,
    Flowing,
    Meaningful,
    Amazing,
}

impl Encouragement {
    pub fn for_word_count(words: usize) -> Self {
        match words {
            0..=9 => Self::Starting,
            10..=49 => Self::FindingVoice,
            50..=99 => Self::Flowing,
            100..=199 => Self::Meaningful,
            _ => Self::Amazing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Starting => "Start with just one sentence...",
            Self::FindingVoice => "You're finding your voice!",
            Self::Flowing => "Beautiful flow of thoughts!",
            Self::Meaningful => "This is really meaningful writing!",
            Self::Amazing => "You're doing amazing work! 🌟",
        }
    }
}

/// Formats elapsed writing seconds as `m:ss`.
pub fn format_writing_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
