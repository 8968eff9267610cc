use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::demo;
use crate::catalog;
use crate::dto::CheckInSnapshot;
use crate::models::history::{DayMood, TimeRange};
use crate::models::mood::MoodId;
use crate::scheduler::TransientFlag;
use crate::services::habits::HabitBoard;
use crate::services::history::MoodHistory;
use crate::services::journal::JournalSession;
use crate::services::resolver::{self, MoodContent};

/// Top-level check-in state: the selected mood and the services it feeds.
#[derive(Debug, Clone)]
pub struct CheckIn {
    selected: Option<MoodId>,
    selected_suggestion: Option<&'static str>,
    total_checkins: u32,
    streak_days: u32,
    weekly_moods: Vec<DayMood>,
    history_range: TimeRange,
    content: MoodContent,
    reveal: TransientFlag,
    trend_window: usize,
    pub habits: HabitBoard,
    pub journal: JournalSession,
    pub history: MoodHistory,
}

impl CheckIn {
    pub fn new(config: &Config, habits: HabitBoard, journal: JournalSession, history: MoodHistory) -> Self {
        Self {
            selected: None,
            selected_suggestion: None,
            total_checkins: 0,
            streak_days: 0,
            weekly_moods: Vec::new(),
            history_range: TimeRange::default(),
            content: resolver::resolve(None),
            reveal: TransientFlag::new(config.suggestion_reveal()),
            trend_window: config.trend_window,
            habits,
            journal,
            history,
        }
    }

    /// A session populated with the starter habits, sample journal entries,
    /// sample mood history and dashboard counters.
    pub fn seeded(config: &Config) -> Self {
        Self::new(
            config,
            HabitBoard::new(config, demo::seed_habits()),
            JournalSession::new(config, demo::seed_recent_entries()),
            MoodHistory::new(demo::seed_mood_history()),
        )
        .with_progress(
            demo::SEED_TOTAL_CHECKINS,
            demo::SEED_STREAK_DAYS,
            demo::seed_weekly_moods(),
        )
    }

    /// Carries over dashboard counters from earlier sessions.
    pub fn with_progress(
        mut self,
        total_checkins: u32,
        streak_days: u32,
        weekly_moods: Vec<DayMood>,
    ) -> Self {
        self.total_checkins = total_checkins;
        self.streak_days = streak_days;
        self.weekly_moods = weekly_moods;
        self
    }

    /// Selects a mood by id. Unknown ids leave the session untouched.
    pub fn select_mood(&mut self, mood: &str, now: DateTime<Utc>) -> Option<MoodId> {
        match mood.parse::<MoodId>() {
            Ok(id) => {
                self.apply_mood(id, now);
                Some(id)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Mood selection ignored");
                None
            }
        }
    }

    pub fn apply_mood(&mut self, mood: MoodId, now: DateTime<Utc>) {
        self.selected = Some(mood);
        self.selected_suggestion = None;
        self.total_checkins = self.total_checkins.saturating_add(1);
        self.content = resolver::resolve(Some(mood));
        self.habits.set_mood(Some(mood));
        self.journal.set_mood(Some(mood));
        self.reveal.arm(now);

        tracing::info!(
            mood = %mood,
            total_checkins = self.total_checkins,
            theme = self.content.theme.mood_class.unwrap_or_default(),
            "Mood checked in"
        );
    }

    pub fn selected_mood(&self) -> Option<MoodId> {
        self.selected
    }

    pub fn total_checkins(&self) -> u32 {
        self.total_checkins
    }

    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    pub fn weekly_moods(&self) -> &[DayMood] {
        &self.weekly_moods
    }

    /// Picks one of the current mood's suggestions; picking it again clears
    /// it. Text that is not a suggestion for the current mood is ignored.
    pub fn select_suggestion(&mut self, suggestion: &str) -> Option<&'static str> {
        let Some(mood) = self.selected else {
            tracing::debug!("Suggestion ignored, no mood selected");
            return None;
        };
        let Some(&picked) = catalog::mood(mood).suggestions.iter().find(|s| **s == suggestion) else {
            tracing::debug!(mood = %mood, suggestion = %suggestion, "Suggestion ignored, not offered for mood");
            return self.selected_suggestion;
        };

        self.selected_suggestion = if self.selected_suggestion == Some(picked) {
            None
        } else {
            Some(picked)
        };
        self.selected_suggestion
    }

    pub fn selected_suggestion(&self) -> Option<&'static str> {
        self.selected_suggestion
    }

    pub fn set_history_range(&mut self, range: TimeRange) {
        self.history_range = range;
    }

    pub fn content(&self) -> &MoodContent {
        &self.content
    }

    /// Suggestions stay hidden for a short beat after each selection.
    pub fn suggestions_revealed(&self, now: DateTime<Utc>) -> bool {
        self.selected.is_some() && !self.reveal.is_raised(now)
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> CheckInSnapshot {
        CheckInSnapshot {
            selected_mood: self.selected,
            total_checkins: self.total_checkins,
            streak_days: self.streak_days,
            weekly_moods: self.weekly_moods.clone(),
            suggestions_revealed: self.suggestions_revealed(now),
            selected_suggestion: self.selected_suggestion,
            content: self.content.clone(),
            habits: self.habits.overview(),
            journal: self.journal.status(now),
            history: self.history.stats(self.trend_window),
            history_range: self.history.range_summary(self.history_range, now),
            selected_history_entry: self.history.selected().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::Theme;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-20T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_fresh_session_is_neutral() {
        let checkin = CheckIn::seeded(&Config::default());
        let snap = checkin.snapshot(t0());
        assert_eq!(snap.selected_mood, None);
        assert_eq!(snap.total_checkins, 23);
        assert_eq!(snap.streak_days, 7);
        assert_eq!(snap.weekly_moods.len(), 7);
        assert_eq!(snap.selected_suggestion, None);
        assert!(!snap.suggestions_revealed);
        assert_eq!(snap.content.theme, Theme::NEUTRAL);
        assert_eq!(snap.history.total_entries, 10);
    }

    #[test]
    fn test_select_mood_forwards_to_services() {
        let mut checkin = CheckIn::seeded(&Config::default());
        assert_eq!(checkin.select_mood("energized", t0()), Some(MoodId::Energized));

        assert_eq!(checkin.total_checkins(), 24);
        assert_eq!(checkin.content().theme, Theme::for_mood(MoodId::Energized));
        assert_eq!(checkin.habits.suggestions()[0].id, "move");
        assert_eq!(checkin.journal.prompts()[0], "How do you want to use this energy?");
    }

    #[test]
    fn test_unknown_mood_is_ignored() {
        let mut checkin = CheckIn::seeded(&Config::default());
        checkin.select_mood("calm", t0());
        assert_eq!(checkin.select_mood("bored", t0()), None);

        assert_eq!(checkin.selected_mood(), Some(MoodId::Calm));
        assert_eq!(checkin.total_checkins(), 24);
    }

    #[test]
    fn test_switching_mood_stops_session_timers() {
        let mut checkin = CheckIn::seeded(&Config::default());
        checkin.select_mood("happy", t0());
        checkin.journal.update_content("A good day", t0());
        checkin.habits.toggle_completion("water", t0());

        checkin.select_mood("sad", t0() + Duration::milliseconds(200));
        let now = t0() + Duration::milliseconds(300);
        assert!(!checkin.journal.is_typing(now));
        assert!(!checkin.journal.tick(now));
        assert_eq!(checkin.habits.success_target(now), None);
        assert_eq!(checkin.total_checkins(), 25);
    }

    #[test]
    fn test_unseeded_session_starts_at_zero() {
        let config = Config::default();
        let checkin = CheckIn::new(
            &config,
            HabitBoard::new(&config, Vec::new()),
            JournalSession::new(&config, Vec::new()),
            MoodHistory::default(),
        );
        assert_eq!(checkin.total_checkins(), 0);
        assert_eq!(checkin.streak_days(), 0);
        assert!(checkin.weekly_moods().is_empty());
    }

    #[test]
    fn test_suggestion_pick_toggles_and_resets_on_mood_change() {
        let mut checkin = CheckIn::seeded(&Config::default());
        assert_eq!(checkin.select_suggestion("anything"), None, "No mood, nothing to pick");

        checkin.select_mood("calm", t0());
        let first = catalog::mood(MoodId::Calm).suggestions[0];
        let second = catalog::mood(MoodId::Calm).suggestions[1];

        assert_eq!(checkin.select_suggestion(first), Some(first));
        assert_eq!(checkin.select_suggestion(second), Some(second));
        assert_eq!(checkin.select_suggestion("Not a calm suggestion"), Some(second));
        assert_eq!(checkin.select_suggestion(second), None, "Picking again clears it");

        checkin.select_suggestion(first);
        checkin.select_mood("sad", t0());
        assert_eq!(checkin.selected_suggestion(), None);
        assert_eq!(checkin.snapshot(t0()).selected_suggestion, None);
    }

    #[test]
    fn test_snapshot_carries_history_selection_and_range() {
        let mut checkin = CheckIn::seeded(&Config::default());
        checkin.history.toggle_selected("5");
        checkin.set_history_range(TimeRange::Month);

        let snap = checkin.snapshot(t0());
        assert_eq!(snap.selected_history_entry.map(|e| e.mood), Some(MoodId::Sad));
        assert_eq!(snap.history_range.label, "Last 30 days");
        assert_eq!(snap.history_range.entries, 10);
    }

    #[test]
    fn test_suggestions_reveal_after_delay() {
        let mut checkin = CheckIn::seeded(&Config::default());
        checkin.select_mood("calm", t0());
        assert!(!checkin.suggestions_revealed(t0() + Duration::milliseconds(499)));
        assert!(checkin.suggestions_revealed(t0() + Duration::milliseconds(500)));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut checkin = CheckIn::seeded(&Config::default());
        checkin.select_mood("anxious", t0());
        let json = serde_json::to_value(checkin.snapshot(t0())).unwrap();

        assert_eq!(json["selectedMood"], "anxious");
        assert_eq!(json["content"]["theme"]["primary"], "160 50% 60%");
        assert_eq!(json["content"]["habitSuggestions"][0]["id"], "breathe");
        assert_eq!(json["history"]["averageIntensity"], 6.3);
        assert_eq!(json["journal"]["recent"][0]["mood"], "happy");
        assert_eq!(json["totalCheckins"], 24);
        assert_eq!(json["weeklyMoods"][4]["mood"], "energized");
        assert_eq!(json["historyRange"]["range"], "7d");
        assert_eq!(json["content"]["intensity"]["dots"], 2);
    }
}
