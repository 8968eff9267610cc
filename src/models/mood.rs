use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodId {
    Happy,
    Calm,
    Sad,
    Anxious,
    Energized,
}

impl MoodId {
    pub const ALL: [MoodId; 5] = [
        MoodId::Happy,
        MoodId::Calm,
        MoodId::Sad,
        MoodId::Anxious,
        MoodId::Energized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodId::Happy => "happy",
            MoodId::Calm => "calm",
            MoodId::Sad => "sad",
            MoodId::Anxious => "anxious",
            MoodId::Energized => "energized",
        }
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownMood(s.to_string()))
    }
}

/// Symbolic icon key, resolved to an actual glyph by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodIcon {
    Sun,
    Smile,
    CloudRain,
    Cloud,
    Zap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityBand {
    Low,
    Moderate,
    Good,
    High,
}

impl IntensityBand {
    pub fn for_intensity(intensity: u8) -> Self {
        match intensity {
            8.. => Self::High,
            6..=7 => Self::Good,
            4..=5 => Self::Moderate,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mood {
    pub id: MoodId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub prompt_text: &'static str,
    /// 0-10
    pub intensity: u8,
    pub icon: MoodIcon,
    pub emoji: &'static str,
    pub color_token: &'static str,
    pub suggestions: &'static [&'static str],
}

/// How a mood's intensity is drawn: band label, filled dots and bar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodIntensity {
    pub value: u8,
    pub band: IntensityBand,
    pub dots: u8,
    pub percent: u8,
}

/// Number of filled dots on the five-dot intensity scale.
pub const INTENSITY_DOTS: u8 = 5;

impl Mood {
    pub fn intensity_band(&self) -> IntensityBand {
        IntensityBand::for_intensity(self.intensity)
    }

    pub fn intensity_dots(&self) -> u8 {
        self.intensity.min(10).div_ceil(2).min(INTENSITY_DOTS)
    }

    /// Intensity as a 0-100 share of the full scale.
    pub fn intensity_percent(&self) -> u8 {
        self.intensity.min(10) * 10
    }

    pub fn intensity_view(&self) -> MoodIntensity {
        MoodIntensity {
            value: self.intensity,
            band: self.intensity_band(),
            dots: self.intensity_dots(),
            percent: self.intensity_percent(),
        }
    }
}
