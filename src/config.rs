use std::env;
use std::str::FromStr;

use validator::Validate;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(range(min = 1, max = 50))]
    pub recent_entries_limit: usize,
    #[validate(range(min = 1, max = 500))]
    pub preview_chars: usize,
    #[validate(range(min = 2, max = 100))]
    pub trend_window: usize,

    // Timer windows, in milliseconds
    #[validate(range(min = 1))]
    pub typing_debounce_ms: u64,
    #[validate(range(min = 1))]
    pub writing_tick_ms: u64,
    pub success_flash_ms: u64,
    pub saved_flash_ms: u64,
    pub suggestion_reveal_ms: u64,

    pub demo_mood: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_entries_limit: 3,
            preview_chars: 50,
            trend_window: 5,
            typing_debounce_ms: 1000,
            writing_tick_ms: 1000,
            success_flash_ms: 1000,
            saved_flash_ms: 3000,
            suggestion_reveal_ms: 500,
            demo_mood: None,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            recent_entries_limit: env_or("RECENT_ENTRIES_LIMIT", defaults.recent_entries_limit)?,
            preview_chars: env_or("PREVIEW_CHARS", defaults.preview_chars)?,
            trend_window: env_or("TREND_WINDOW", defaults.trend_window)?,

            typing_debounce_ms: env_or("TYPING_DEBOUNCE_MS", defaults.typing_debounce_ms)?,
            writing_tick_ms: env_or("WRITING_TICK_MS", defaults.writing_tick_ms)?,
            success_flash_ms: env_or("SUCCESS_FLASH_MS", defaults.success_flash_ms)?,
            saved_flash_ms: env_or("SAVED_FLASH_MS", defaults.saved_flash_ms)?,
            suggestion_reveal_ms: env_or("SUGGESTION_REVEAL_MS", defaults.suggestion_reveal_ms)?,

            demo_mood: env::var("DEMO_MOOD").ok().filter(|s| !s.trim().is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn typing_debounce(&self) -> chrono::Duration {
        millis(self.typing_debounce_ms)
    }

    pub fn success_flash(&self) -> chrono::Duration {
        millis(self.success_flash_ms)
    }

    pub fn saved_flash(&self) -> chrono::Duration {
        millis(self.saved_flash_ms)
    }

    pub fn suggestion_reveal(&self) -> chrono::Duration {
        millis(self.suggestion_reveal_ms)
    }

    pub fn writing_tick(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.writing_tick_ms)
    }

    /// Writing time credited per tick of the writing clock.
    pub fn writing_tick_span(&self) -> chrono::Duration {
        millis(self.writing_tick_ms)
    }
}

fn millis(ms: u64) -> chrono::Duration {
    chrono::Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX))
}

fn env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{key} must be a number, got {raw:?}"))),
        _ => Ok(default),
    }
}
