use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog;
use crate::config::Config;
use crate::dto::{CategoryChip, HabitOverview};
use crate::models::habit::{
    HabitCategory, HabitRecord, HabitSuggestion, ToggleAction, ToggleOutcome,
};
use crate::models::mood::MoodId;
use crate::scheduler::TransientFlag;

/// The active habit list plus its category filter and success flash.
#[derive(Debug, Clone)]
pub struct HabitBoard {
    habits: Vec<HabitRecord>,
    category_filter: Option<HabitCategory>,
    mood: Option<MoodId>,
    success: TransientFlag,
    success_target: Option<String>,
}

impl HabitBoard {
    pub fn new(config: &Config, seed: Vec<HabitRecord>) -> Self {
        Self {
            habits: seed,
            category_filter: None,
            mood: None,
            success: TransientFlag::new(config.success_flash()),
            success_target: None,
        }
    }

    /// Habits in insertion order, optionally restricted to one category.
    pub fn list(&self, category: Option<HabitCategory>) -> Vec<&HabitRecord> {
        self.habits
            .iter()
            .filter(|h| category.map_or(true, |c| h.category == c))
            .collect()
    }

    /// Habits under the board's own category filter.
    pub fn visible(&self) -> Vec<&HabitRecord> {
        self.list(self.category_filter)
    }

    pub fn get(&self, habit_id: &str) -> Option<&HabitRecord> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    /// Flips completion. Completing adds one to the streak; uncompleting
    /// leaves the streak as it was. Unknown ids are ignored.
    pub fn toggle_completion(&mut self, habit_id: &str, now: DateTime<Utc>) -> Option<ToggleOutcome> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == habit_id) else {
            tracing::debug!(habit_id = %habit_id, "Toggle ignored, habit not found");
            return None;
        };

        habit.completed = !habit.completed;
        let action = if habit.completed {
            habit.streak = habit.streak.saturating_add(1);
            ToggleAction::Completed
        } else {
            ToggleAction::Uncompleted
        };

        let outcome = ToggleOutcome {
            habit_id: habit.id.clone(),
            action,
            streak: habit.streak,
        };

        if action == ToggleAction::Completed {
            self.flash_success(&outcome.habit_id, now);
        }

        tracing::debug!(
            habit_id = %outcome.habit_id,
            action = ?outcome.action,
            streak = outcome.streak,
            "Habit toggled"
        );
        Some(outcome)
    }

    /// Adds a fresh, incomplete habit built from a mood suggestion to the
    /// front of the list.
    pub fn promote_suggestion(&mut self, suggestion: &HabitSuggestion, now: DateTime<Utc>) -> HabitRecord {
        let record = HabitRecord {
            id: format!("mood-{}-{}", suggestion.id, Uuid::new_v4().simple()),
            name: suggestion.name.to_string(),
            description: suggestion.description.to_string(),
            icon: suggestion.icon,
            category: suggestion.category,
            difficulty: suggestion.difficulty,
            time_estimate: suggestion.time_estimate.to_string(),
            completed: false,
            streak: 0,
        };

        self.habits.insert(0, record.clone());
        self.flash_success(&record.id, now);

        tracing::info!(
            habit_id = %record.id,
            suggestion = suggestion.id,
            category = ?record.category,
            "Promoted mood suggestion to habit"
        );
        record
    }

    /// Selecting the active category again clears the filter.
    pub fn toggle_category_filter(&mut self, category: HabitCategory) -> Option<HabitCategory> {
        self.category_filter = if self.category_filter == Some(category) {
            None
        } else {
            Some(category)
        };
        self.category_filter
    }

    pub fn category_filter(&self) -> Option<HabitCategory> {
        self.category_filter
    }

    pub fn set_mood(&mut self, mood: Option<MoodId>) {
        self.mood = mood;
        self.success.cancel();
        self.success_target = None;
    }

    /// Suggestions for the current mood; empty when none is selected.
    pub fn suggestions(&self) -> &'static [HabitSuggestion] {
        self.mood.map(catalog::habit_suggestions).unwrap_or(&[])
    }

    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|h| h.completed).count()
    }

    pub fn total(&self) -> usize {
        self.habits.len()
    }

    /// Completed / total, in `[0, 1]`. An empty board is 0.
    pub fn completion_rate(&self) -> f64 {
        let total = self.total();
        if total > 0 {
            self.completed_count() as f64 / total as f64
        } else {
            0.0
        }
    }

    pub fn completion_percent(&self) -> f64 {
        self.completion_rate() * 100.0
    }

    /// The habit currently showing the success flash, if any.
    pub fn success_target(&self, now: DateTime<Utc>) -> Option<&str> {
        if self.success.is_raised(now) {
            self.success_target.as_deref()
        } else {
            None
        }
    }

    pub fn overview(&self) -> HabitOverview {
        HabitOverview {
            total: self.total(),
            completed: self.completed_count(),
            completion_rate: self.completion_rate(),
            completion_percent: self.completion_percent().round() as u32,
            message: self.mood.map_or(catalog::DEFAULT_HABIT_MESSAGE, catalog::habit_message),
            summary: completion_summary(self.completed_count()),
            category_filter: self.category_filter,
            categories: self.category_chips(),
        }
    }

    pub fn category_chips(&self) -> Vec<CategoryChip> {
        HabitCategory::ALL
            .into_iter()
            .map(|category| {
                let in_category = self.list(Some(category));
                CategoryChip {
                    category,
                    total: in_category.len(),
                    completed: in_category.iter().filter(|h| h.completed).count(),
                    active: self.category_filter == Some(category),
                }
            })
            .collect()
    }

    fn flash_success(&mut self, habit_id: &str, now: DateTime<Utc>) {
        self.success.arm(now);
        self.success_target = Some(habit_id.to_string());
    }
}

pub fn completion_summary(completed: usize) -> String {
    match completed {
        0 => "Start with one small habit today".to_string(),
        1 => "Great job completing 1 habit!".to_string(),
        n => format!("Great job completing {n} habits!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-20T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn board() -> HabitBoard {
        HabitBoard::new(&Config::default(), demo::seed_habits())
    }

    #[test]
    fn test_toggle_unknown_habit_is_noop() {
        let mut board = board();
        let before: Vec<HabitRecord> = board.list(None).into_iter().cloned().collect();

        assert!(board.toggle_completion("does-not-exist", now()).is_none());

        let after: Vec<HabitRecord> = board.list(None).into_iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(board.success_target(now()), None);
    }

    #[test]
    fn test_completing_adds_exactly_one_to_streak() {
        let mut board = board();
        let outcome = board.toggle_completion("water", now()).unwrap();

        assert_eq!(outcome.action, ToggleAction::Completed);
        assert_eq!(outcome.streak, 4);
        assert!(board.get("water").unwrap().completed);
        assert_eq!(board.success_target(now()), Some("water"));
    }

    #[test]
    fn test_uncompleting_preserves_streak() {
        let mut board = board();
        // gratitude is seeded completed with a 7-day streak
        let outcome = board.toggle_completion("gratitude", now()).unwrap();

        assert_eq!(outcome.action, ToggleAction::Uncompleted);
        assert_eq!(outcome.streak, 7);
        assert!(!board.get("gratitude").unwrap().completed);
        assert_eq!(board.success_target(now()), None, "Unchecking does not flash");
    }

    #[test]
    fn test_double_toggle_restores_completed_flag() {
        let mut board = board();
        board.toggle_completion("fresh-air", now());
        board.toggle_completion("fresh-air", now());

        let habit = board.get("fresh-air").unwrap();
        assert!(!habit.completed);
        assert_eq!(habit.streak, 2, "Streak keeps the completion it earned");
    }

    #[test]
    fn test_promoting_twice_yields_distinct_fresh_records() {
        let mut board = board();
        let suggestion = &catalog::habit_suggestions(MoodId::Calm)[0];

        let first = board.promote_suggestion(suggestion, now());
        let second = board.promote_suggestion(suggestion, now());

        assert_ne!(first.id, second.id);
        for record in [&first, &second] {
            assert!(record.id.starts_with("mood-meditate-"));
            assert!(!record.completed);
            assert_eq!(record.streak, 0);
        }

        let ids: Vec<&str> = board.list(None).iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids[0], second.id, "Newest promotion is listed first");
        assert_eq!(ids[1], first.id);
        assert_eq!(board.total(), 5);
    }

    #[test]
    fn test_promoted_id_never_collides_with_seed() {
        let mut board = board();
        // The happy "gratitude" template shares its id with a seeded habit
        let suggestion = &catalog::habit_suggestions(MoodId::Happy)[0];
        let record = board.promote_suggestion(suggestion, now());
        assert_ne!(record.id, "gratitude");
        assert_eq!(board.list(None).iter().filter(|h| h.id == "gratitude").count(), 1);
    }

    #[test]
    fn test_completion_rate_of_empty_board_is_zero() {
        let board = HabitBoard::new(&Config::default(), Vec::new());
        assert_eq!(board.completion_rate(), 0.0);
        assert!(!board.completion_rate().is_nan());
        assert_eq!(board.overview().completion_percent, 0);
    }

    #[test]
    fn test_completion_rate_counts_completed_share() {
        let mut board = board();
        assert!((board.completion_rate() - 1.0 / 3.0).abs() < 1e-9);
        board.toggle_completion("water", now());
        assert_eq!(board.overview().completion_percent, 67);
    }

    #[test]
    fn test_category_filter_preserves_order_and_toggles_off() {
        let mut board = board();
        let wellness: Vec<&str> = board
            .list(Some(HabitCategory::Wellness))
            .iter()
            .map(|h| h.id.as_str())
            .collect();
        assert_eq!(wellness, vec!["water", "fresh-air"]);

        assert_eq!(
            board.toggle_category_filter(HabitCategory::Mindfulness),
            Some(HabitCategory::Mindfulness)
        );
        assert_eq!(board.visible().len(), 1);
        assert_eq!(board.toggle_category_filter(HabitCategory::Mindfulness), None);
        assert_eq!(board.visible().len(), 3);
    }

    #[test]
    fn test_completion_does_not_reorder() {
        let mut board = board();
        board.toggle_completion("fresh-air", now());
        let ids: Vec<&str> = board.list(None).iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["water", "gratitude", "fresh-air"]);
    }

    #[test]
    fn test_success_flash_expires() {
        let mut board = board();
        board.toggle_completion("water", now());
        assert_eq!(
            board.success_target(now() + chrono::Duration::milliseconds(1000)),
            None
        );
    }

    #[test]
    fn test_mood_switch_changes_suggestions_and_clears_flash() {
        let mut board = board();
        assert!(board.suggestions().is_empty());

        board.toggle_completion("water", now());
        board.set_mood(Some(MoodId::Sad));
        assert_eq!(board.success_target(now()), None);
        assert_eq!(board.suggestions()[1].id, "connection");
        assert_eq!(board.overview().message, "Be kind to yourself. Small steps matter");
    }

    #[test]
    fn test_completion_summary_pluralizes() {
        assert_eq!(completion_summary(0), "Start with one small habit today");
        assert_eq!(completion_summary(1), "Great job completing 1 habit!");
        assert_eq!(completion_summary(2), "Great job completing 2 habits!");

        let mut board = board();
        // gratitude is seeded completed
        assert_eq!(board.overview().summary, "Great job completing 1 habit!");
        board.toggle_completion("water", now());
        assert_eq!(board.overview().summary, "Great job completing 2 habits!");

        let empty = HabitBoard::new(&Config::default(), Vec::new());
        assert_eq!(empty.overview().summary, "Start with one small habit today");
    }

    #[test]
    fn test_category_chips_cover_every_category() {
        let mut board = board();
        board.toggle_category_filter(HabitCategory::Wellness);
        let chips = board.overview().categories;

        let order: Vec<HabitCategory> = chips.iter().map(|c| c.category).collect();
        assert_eq!(order, HabitCategory::ALL.to_vec());

        let wellness = &chips[0];
        assert_eq!((wellness.total, wellness.completed, wellness.active), (2, 0, true));
        let mindfulness = &chips[1];
        assert_eq!((mindfulness.total, mindfulness.completed, mindfulness.active), (1, 1, false));
        assert_eq!(chips[4].total, 0, "Creativity has no seeded habits");
    }
}
