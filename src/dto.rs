//! # Snapshots for the display layer
//!
//! Plain serializable views over the services. Nothing in here holds state;
//! each struct is built fresh from the owning service.
//!
//! Conventions:
//! - JSON keys are camelCase, matching what the display layer binds to
//! - Rates are fractions in `[0, 1]`; percentages are whole numbers

use serde::Serialize;

use crate::models::habit::HabitCategory;
use crate::models::history::{DayMood, MoodHistoryEntry, TimeRange, Trend};
use crate::models::journal::JournalEntrySummary;
use crate::models::mood::MoodId;
use crate::services::resolver::MoodContent;

// ============================================================================
// Habits
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitOverview {
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
    pub completion_percent: u32,
    pub message: &'static str,
    /// "Great job completing N habits!" or a nudge when nothing is done
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_filter: Option<HabitCategory>,
    /// One chip per category, in fixed order
    pub categories: Vec<CategoryChip>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChip {
    pub category: HabitCategory,
    pub total: usize,
    pub completed: usize,
    pub active: bool,
}

// ============================================================================
// Journal
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalStatus {
    pub char_count: usize,
    pub word_count: usize,
    /// `m:ss`
    pub writing_time: String,
    pub encouragement: Option<&'static str>,
    pub is_typing: bool,
    pub is_saved: bool,
    /// Drives the disabled state of the save action
    pub can_save: bool,
    pub selected_prompt: Option<String>,
    pub placeholder: &'static str,
    pub recent: Vec<JournalEntrySummary>,
}

// ============================================================================
// History
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCount {
    pub mood: MoodId,
    pub count: usize,
    /// Share of all entries, `[0, 1]`
    pub share: f64,
}

impl MoodCount {
    pub fn new(mood: MoodId, count: usize, total: usize) -> Self {
        let share = if total > 0 {
            count as f64 / total as f64
        } else {
            0.0
        };
        Self { mood, count, share }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub direction: Trend,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStats {
    pub total_entries: usize,
    pub average_intensity: f64,
    pub most_frequent: Option<MoodCount>,
    pub distribution: Vec<MoodCount>,
    pub trend: TrendSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSummary {
    pub range: TimeRange,
    pub label: &'static str,
    pub entries: usize,
}

// ============================================================================
// Check-in
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInSnapshot {
    pub selected_mood: Option<MoodId>,
    pub total_checkins: u32,
    pub streak_days: u32,
    pub weekly_moods: Vec<DayMood>,
    pub suggestions_revealed: bool,
    pub selected_suggestion: Option<&'static str>,
    pub content: MoodContent,
    pub habits: HabitOverview,
    pub journal: JournalStatus,
    pub history: MoodStats,
    pub history_range: RangeSummary,
    pub selected_history_entry: Option<MoodHistoryEntry>,
}
