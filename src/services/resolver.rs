use serde::Serialize;

use crate::catalog;
use crate::models::habit::HabitSuggestion;
use crate::models::mood::{MoodId, MoodIntensity};
use crate::models::theme::Theme;

/// Everything the display layer needs for the currently selected mood.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodContent {
    pub mood: Option<MoodId>,
    pub intensity: Option<MoodIntensity>,
    pub prompts: Vec<&'static str>,
    pub habit_suggestions: Vec<HabitSuggestion>,
    pub theme: Theme,
    pub placeholder: &'static str,
    pub greeting: &'static str,
    pub habit_message: &'static str,
}

impl MoodContent {
    fn neutral(greeting: &'static str) -> Self {
        Self {
            mood: None,
            intensity: None,
            prompts: Vec::new(),
            habit_suggestions: Vec::new(),
            theme: Theme::NEUTRAL,
            placeholder: catalog::GENERIC_PLACEHOLDER,
            greeting,
            habit_message: catalog::DEFAULT_HABIT_MESSAGE,
        }
    }
}

pub fn resolve(mood: Option<MoodId>) -> MoodContent {
    let Some(id) = mood else {
        return MoodContent::neutral(catalog::CHECK_IN_GREETING);
    };

    MoodContent {
        mood: Some(id),
        intensity: Some(catalog::mood(id).intensity_view()),
        prompts: catalog::journal_prompts(id).to_vec(),
        habit_suggestions: catalog::habit_suggestions(id).to_vec(),
        theme: Theme::for_mood(id),
        placeholder: catalog::journal_placeholder(id),
        greeting: catalog::greeting(id),
        habit_message: catalog::habit_message(id),
    }
}

/// String-keyed entry point for the display layer. Unknown ids resolve to
/// empty content with the neutral theme.
pub fn resolve_str(mood: Option<&str>) -> MoodContent {
    match mood {
        None => resolve(None),
        Some(raw) => match raw.parse::<MoodId>() {
            Ok(id) => resolve(Some(id)),
            Err(_) => {
                tracing::debug!(mood = %raw, "Unknown mood id, resolving neutral content");
                MoodContent::neutral(catalog::UNKNOWN_MOOD_GREETING)
            }
        },
    }
}
