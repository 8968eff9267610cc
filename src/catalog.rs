//! Static lookup tables keyed by mood: the mood registry itself plus the
//! prompts, habit templates and messages each mood unlocks.

use crate::models::habit::{Difficulty, HabitCategory, HabitIcon, HabitSuggestion};
use crate::models::mood::{Mood, MoodIcon, MoodId};

static MOODS: [Mood; 5] = [
    Mood {
        id: MoodId::Happy,
        display_name: "Joyful",
        description: "Feeling bright and optimistic",
        prompt_text: "That's wonderful! What's bringing you joy today?",
        intensity: 8,
        icon: MoodIcon::Sun,
        emoji: "🌟",
        color_token: "mood-button-happy",
        suggestions: &[
            "Share your joy with someone",
            "Dance to your favorite song",
            "Write about what made you smile",
        ],
    },
    Mood {
        id: MoodId::Calm,
        display_name: "Peaceful",
        description: "Centered and at ease",
        prompt_text: "Beautiful. Take a deep breath and enjoy this moment of peace.",
        intensity: 6,
        icon: MoodIcon::Smile,
        emoji: "✨",
        color_token: "mood-button-calm",
        suggestions: &[
            "Practice mindful breathing",
            "Take a gentle walk",
            "Listen to calming music",
        ],
    },
    Mood {
        id: MoodId::Sad,
        display_name: "Down",
        description: "Feeling low or melancholic",
        prompt_text: "I'm here with you. It's okay to feel this way sometimes.",
        intensity: 4,
        icon: MoodIcon::CloudRain,
        emoji: "💙",
        color_token: "mood-button-sad",
        suggestions: &[
            "Be gentle with yourself",
            "Reach out to a friend",
            "Do something comforting",
        ],
    },
    Mood {
        id: MoodId::Anxious,
        display_name: "Anxious",
        description: "Worried or restless",
        prompt_text: "Let's take this one step at a time. You're safe right now.",
        intensity: 3,
        icon: MoodIcon::Cloud,
        emoji: "🌸",
        color_token: "mood-button-anxious",
        suggestions: &[
            "Try 4-7-8 breathing",
            "Ground yourself with your senses",
            "Write down your worries",
        ],
    },
    Mood {
        id: MoodId::Energized,
        display_name: "Energized",
        description: "Full of energy and motivation",
        prompt_text: "Amazing energy! How would you like to channel this feeling?",
        intensity: 9,
        icon: MoodIcon::Zap,
        emoji: "⚡",
        color_token: "mood-button-energized",
        suggestions: &[
            "Channel energy into creativity",
            "Move your body",
            "Set new goals",
        ],
    },
];

pub const GENERIC_PLACEHOLDER: &str = "What's on your mind today? Write freely, without judgment...";
pub const CHECK_IN_GREETING: &str = "Take a moment to check in with yourself";
pub const UNKNOWN_MOOD_GREETING: &str = "How are you feeling?";
pub const DEFAULT_HABIT_MESSAGE: &str = "Start with small, manageable habits";

/// All moods in display order.
pub fn moods() -> &'static [Mood] {
    &MOODS
}

pub fn mood(id: MoodId) -> &'static Mood {
    // MOODS is laid out in MoodId::ALL order
    &MOODS[id as usize]
}

/// Looks a mood up by its string id. Unknown ids yield `None`.
pub fn find(id: &str) -> Option<&'static Mood> {
    id.parse::<MoodId>().ok().map(mood)
}

pub fn journal_prompts(id: MoodId) -> &'static [&'static str] {
    match id {
        MoodId::Happy => &[
            "What made you smile today?",
            "Describe a moment of joy you experienced recently",
            "What are you grateful for right now?",
            "Who would you like to share this happiness with?",
            "What does this joy feel like in your body?",
        ],
        MoodId::Calm => &[
            "What helps you feel centered?",
            "Describe the peace you're feeling",
            "What brought you to this calm state?",
            "How can you carry this peace forward?",
            "What does tranquility look like to you?",
        ],
        MoodId::Sad => &[
            "What would comfort you right now?",
            "It's okay to feel sad. What's on your heart?",
            "How can you be gentle with yourself today?",
            "What do you need most in this moment?",
            "What would help you feel less alone?",
        ],
        MoodId::Anxious => &[
            "What's one thing you can control right now?",
            "Take three deep breaths. What do you notice?",
            "What would you tell a friend feeling this way?",
            "What's the smallest step you can take?",
            "What's making you feel unsafe?",
        ],
        MoodId::Energized => &[
            "How do you want to use this energy?",
            "What excites you most right now?",
            "What goals feel within reach today?",
            "What creative project calls to you?",
            "How can you channel this motivation?",
        ],
    }
}

pub fn journal_placeholder(id: MoodId) -> &'static str {
    match id {
        MoodId::Happy => "Share your joy! What's making your heart sing today?",
        MoodId::Calm => "Let your peaceful thoughts flow onto the page...",
        MoodId::Sad => "It's safe to express what's in your heart. Take your time...",
        MoodId::Anxious => "Breathe and write. What's on your mind?",
        MoodId::Energized => "Channel this energy into words! What excites you?",
    }
}

pub fn greeting(id: MoodId) -> &'static str {
    match id {
        MoodId::Happy => "Your joy is contagious! 🌟",
        MoodId::Calm => "Peace flows through you ✨",
        MoodId::Sad => "It's okay to feel this way. You're not alone 💙",
        MoodId::Anxious => "Breathe. You're safe right now 🌸",
        MoodId::Energized => "Channel this energy into something amazing! ⚡",
    }
}

pub fn habit_message(id: MoodId) -> &'static str {
    match id {
        MoodId::Happy => "Great energy! Channel it into positive habits",
        MoodId::Calm => "Perfect time for gentle, mindful practices",
        MoodId::Sad => "Be kind to yourself. Small steps matter",
        MoodId::Anxious => "Focus on grounding and calming activities",
        MoodId::Energized => "Use this momentum to build lasting habits",
    }
}

static HAPPY_HABITS: [HabitSuggestion; 3] = [
    HabitSuggestion {
        id: "gratitude",
        name: "Share Joy",
        description: "Tell someone what made you happy today",
        icon: HabitIcon::Smile,
        category: HabitCategory::Connection,
        difficulty: Difficulty::Easy,
        time_estimate: "2 min",
    },
    HabitSuggestion {
        id: "celebrate",
        name: "Celebrate Small Wins",
        description: "Acknowledge one thing you did well today",
        icon: HabitIcon::Trophy,
        category: HabitCategory::Wellness,
        difficulty: Difficulty::Easy,
        time_estimate: "1 min",
    },
    HabitSuggestion {
        id: "dance",
        name: "Dance Break",
        description: "Move your body to your favorite song",
        icon: HabitIcon::TrendingUp,
        category: HabitCategory::Movement,
        difficulty: Difficulty::Medium,
        time_estimate: "5 min",
    },
];

static CALM_HABITS: [HabitSuggestion; 3] = [
    HabitSuggestion {
        id: "meditate",
        name: "Mindful Moment",
        description: "5 minutes of peaceful breathing",
        icon: HabitIcon::Circle,
        category: HabitCategory::Mindfulness,
        difficulty: Difficulty::Easy,
        time_estimate: "5 min",
    },
    HabitSuggestion {
        id: "nature",
        name: "Nature Connection",
        description: "Step outside or look at plants",
        icon: HabitIcon::Flower,
        category: HabitCategory::Wellness,
        difficulty: Difficulty::Easy,
        time_estimate: "3 min",
    },
    HabitSuggestion {
        id: "gentle-stretch",
        name: "Gentle Stretch",
        description: "Slow, mindful stretching",
        icon: HabitIcon::Target,
        category: HabitCategory::Movement,
        difficulty: Difficulty::Easy,
        time_estimate: "10 min",
    },
];

static SAD_HABITS: [HabitSuggestion; 3] = [
    HabitSuggestion {
        id: "selfcare",
        name: "Gentle Care",
        description: "Do one kind thing for yourself",
        icon: HabitIcon::Smile,
        category: HabitCategory::Wellness,
        difficulty: Difficulty::Easy,
        time_estimate: "5 min",
    },
    HabitSuggestion {
        id: "connection",
        name: "Reach Out",
        description: "Connect with someone who cares about you",
        icon: HabitIcon::Target,
        category: HabitCategory::Connection,
        difficulty: Difficulty::Medium,
        time_estimate: "15 min",
    },
    HabitSuggestion {
        id: "comfort",
        name: "Find Comfort",
        description: "Wrap yourself in a cozy blanket or warm drink",
        icon: HabitIcon::Flower,
        category: HabitCategory::Wellness,
        difficulty: Difficulty::Easy,
        time_estimate: "2 min",
    },
];

static ANXIOUS_HABITS: [HabitSuggestion; 3] = [
    HabitSuggestion {
        id: "breathe",
        name: "Calm Breathing",
        description: "4-7-8 breathing technique",
        icon: HabitIcon::Circle,
        category: HabitCategory::Mindfulness,
        difficulty: Difficulty::Easy,
        time_estimate: "3 min",
    },
    HabitSuggestion {
        id: "grounding",
        name: "Grounding Exercise",
        description: "Name 5 things you can see, hear, touch",
        icon: HabitIcon::Target,
        category: HabitCategory::Mindfulness,
        difficulty: Difficulty::Easy,
        time_estimate: "2 min",
    },
    HabitSuggestion {
        id: "write-worries",
        name: "Write Worries",
        description: "Put your worries on paper",
        icon: HabitIcon::Flower,
        category: HabitCategory::Creativity,
        difficulty: Difficulty::Medium,
        time_estimate: "10 min",
    },
];

static ENERGIZED_HABITS: [HabitSuggestion; 3] = [
    HabitSuggestion {
        id: "move",
        name: "Move Your Body",
        description: "Dance, stretch, or take a walk",
        icon: HabitIcon::TrendingUp,
        category: HabitCategory::Movement,
        difficulty: Difficulty::Medium,
        time_estimate: "15 min",
    },
    HabitSuggestion {
        id: "create",
        name: "Create Something",
        description: "Channel energy into creativity",
        icon: HabitIcon::Sparkles,
        category: HabitCategory::Creativity,
        difficulty: Difficulty::Medium,
        time_estimate: "20 min",
    },
    HabitSuggestion {
        id: "plan",
        name: "Plan Something Fun",
        description: "Make plans for something you're excited about",
        icon: HabitIcon::Target,
        category: HabitCategory::Wellness,
        difficulty: Difficulty::Easy,
        time_estimate: "5 min",
    },
];

pub fn habit_suggestions(id: MoodId) -> &'static [HabitSuggestion] {
    match id {
        MoodId::Happy => &HAPPY_HABITS,
        MoodId::Calm => &CALM_HABITS,
        MoodId::Sad => &SAD_HABITS,
        MoodId::Anxious => &ANXIOUS_HABITS,
        MoodId::Energized => &ENERGIZED_HABITS,
    }
}
