use serde::Serialize;

use crate::models::mood::MoodId;

/// An HSL color, rendered the way CSS custom properties expect it
/// (`"45 100% 65%"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn css_value(&self) -> String {
        format!("{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

impl Serialize for Hsl {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.css_value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: Hsl,
    pub accent: Hsl,
    pub background: Hsl,
    /// Body class the display layer swaps in; `None` for the neutral theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_class: Option<&'static str>,
}

impl Theme {
    pub const NEUTRAL: Theme = Theme {
        primary: Hsl::new(220, 70, 60),
        accent: Hsl::new(220, 70, 95),
        background: Hsl::new(220, 20, 98),
        mood_class: None,
    };

    pub fn for_mood(mood: MoodId) -> Theme {
        match mood {
            MoodId::Happy => Theme {
                primary: Hsl::new(45, 100, 65),
                accent: Hsl::new(45, 100, 95),
                background: Hsl::new(50, 60, 98),
                mood_class: Some("mood-happy"),
            },
            MoodId::Calm => Theme {
                primary: Hsl::new(200, 85, 60),
                accent: Hsl::new(200, 85, 95),
                background: Hsl::new(200, 30, 98),
                mood_class: Some("mood-calm"),
            },
            MoodId::Sad => Theme {
                primary: Hsl::new(250, 40, 65),
                accent: Hsl::new(250, 40, 95),
                background: Hsl::new(250, 20, 98),
                mood_class: Some("mood-sad"),
            },
            MoodId::Anxious => Theme {
                primary: Hsl::new(160, 50, 60),
                accent: Hsl::new(160, 50, 95),
                background: Hsl::new(160, 25, 98),
                mood_class: Some("mood-anxious"),
            },
            MoodId::Energized => Theme {
                primary: Hsl::new(340, 85, 65),
                accent: Hsl::new(340, 85, 95),
                background: Hsl::new(340, 30, 98),
                mood_class: Some("mood-energized"),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
