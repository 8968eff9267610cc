use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Wellness,
    Mindfulness,
    Connection,
    Movement,
    Creativity,
}

impl HabitCategory {
    pub const ALL: [HabitCategory; 5] = [
        HabitCategory::Wellness,
        HabitCategory::Mindfulness,
        HabitCategory::Connection,
        HabitCategory::Movement,
        HabitCategory::Creativity,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HabitIcon {
    Circle,
    Smile,
    Target,
    Trophy,
    TrendingUp,
    Flower,
    Sparkles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: HabitIcon,
    pub category: HabitCategory,
    pub difficulty: Difficulty,
    pub time_estimate: String,
    pub completed: bool,
    pub streak: u32,
}

/// A habit template offered for a particular mood. Promoting one creates a
/// fresh [`HabitRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitSuggestion {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: HabitIcon,
    pub category: HabitCategory,
    pub difficulty: Difficulty,
    pub time_estimate: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    Completed,
    Uncompleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    pub habit_id: String,
    pub action: ToggleAction,
    pub streak: u32,
}
