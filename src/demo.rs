//! Seed data for a fresh session: the starter habits, a few recent journal
//! entries, a ten-entry mood history and the dashboard counters.

use chrono::{DateTime, NaiveDate, Utc, Weekday};

use crate::models::habit::{Difficulty, HabitCategory, HabitIcon, HabitRecord};
use crate::models::history::{DayMood, MoodHistoryEntry};
use crate::models::journal::JournalEntrySummary;
use crate::models::mood::MoodId;

pub const SEED_TOTAL_CHECKINS: u32 = 23;
pub const SEED_STREAK_DAYS: u32 = 7;

/// Monday first.
pub fn seed_weekly_moods() -> Vec<DayMood> {
    [
        (Weekday::Mon, MoodId::Happy),
        (Weekday::Tue, MoodId::Calm),
        (Weekday::Wed, MoodId::Sad),
        (Weekday::Thu, MoodId::Anxious),
        (Weekday::Fri, MoodId::Energized),
        (Weekday::Sat, MoodId::Happy),
        (Weekday::Sun, MoodId::Calm),
    ]
    .into_iter()
    .map(|(day, mood)| DayMood { day, mood })
    .collect()
}

pub fn seed_habits() -> Vec<HabitRecord> {
    vec![
        HabitRecord {
            id: "water".into(),
            name: "Hydrate".into(),
            description: "Drink a glass of water".into(),
            icon: HabitIcon::Circle,
            category: HabitCategory::Wellness,
            difficulty: Difficulty::Easy,
            time_estimate: "1 min".into(),
            completed: false,
            streak: 3,
        },
        HabitRecord {
            id: "gratitude".into(),
            name: "Gratitude Practice".into(),
            description: "Think of 3 things you're grateful for".into(),
            icon: HabitIcon::Smile,
            category: HabitCategory::Mindfulness,
            difficulty: Difficulty::Easy,
            time_estimate: "2 min".into(),
            completed: true,
            streak: 7,
        },
        HabitRecord {
            id: "fresh-air".into(),
            name: "Fresh Air".into(),
            description: "Step outside for a moment".into(),
            icon: HabitIcon::Target,
            category: HabitCategory::Wellness,
            difficulty: Difficulty::Easy,
            time_estimate: "3 min".into(),
            completed: false,
            streak: 1,
        },
    ]
}

/// Newest first.
pub fn seed_recent_entries() -> Vec<JournalEntrySummary> {
    [
        ((2024, 1, 15), MoodId::Happy, "Today was amazing..."),
        ((2024, 1, 14), MoodId::Calm, "Feeling peaceful..."),
        ((2024, 1, 13), MoodId::Sad, "It's been a tough day..."),
    ]
    .into_iter()
    .filter_map(|((y, m, d), mood, preview)| {
        Some(JournalEntrySummary {
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            mood: Some(mood),
            preview: preview.to_string(),
        })
    })
    .collect()
}

const MOOD_HISTORY: [(&str, MoodId, &str, u8, &str); 10] = [
    ("1", MoodId::Happy, "2024-01-15T09:00:00Z", 8, "Great morning workout"),
    ("2", MoodId::Calm, "2024-01-15T14:00:00Z", 6, "Peaceful lunch break"),
    ("3", MoodId::Anxious, "2024-01-15T18:00:00Z", 4, "Work stress"),
    ("4", MoodId::Happy, "2024-01-16T08:00:00Z", 7, "Good sleep"),
    ("5", MoodId::Sad, "2024-01-16T16:00:00Z", 5, "Missing friends"),
    ("6", MoodId::Energized, "2024-01-17T10:00:00Z", 9, "Creative breakthrough"),
    ("7", MoodId::Calm, "2024-01-17T20:00:00Z", 7, "Evening meditation"),
    ("8", MoodId::Happy, "2024-01-18T12:00:00Z", 8, "Lunch with family"),
    ("9", MoodId::Anxious, "2024-01-18T19:00:00Z", 3, "Upcoming deadline"),
    ("10", MoodId::Sad, "2024-01-19T11:00:00Z", 6, "Rainy day blues"),
];

/// Oldest first.
pub fn seed_mood_history() -> Vec<MoodHistoryEntry> {
    MOOD_HISTORY
        .iter()
        .filter_map(|&(id, mood, timestamp, intensity, notes)| {
            let timestamp = DateTime::parse_from_rfc3339(timestamp).ok()?.with_timezone(&Utc);
            Some(MoodHistoryEntry {
                id: id.to_string(),
                mood,
                timestamp,
                intensity,
                notes: Some(notes.to_string()),
            })
        })
        .collect()
}
