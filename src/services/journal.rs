use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use crate::catalog;
use crate::config::Config;
use crate::dto::JournalStatus;
use crate::models::journal::{format_writing_time, Encouragement, JournalEntry, JournalEntrySummary};
use crate::models::mood::MoodId;
use crate::scheduler::TransientFlag;

#[derive(Debug, Clone)]
pub struct JournalSession {
    content: String,
    word_count: usize,
    char_count: usize,
    mood: Option<MoodId>,
    selected_prompt: Option<String>,
    writing_time: Duration,
    tick_span: Duration,
    /// Set while a live writing clock is ticking this session
    clock_running: bool,
    typing: TransientFlag,
    saved: TransientFlag,
    recent: VecDeque<JournalEntrySummary>,
    recent_limit: usize,
    preview_chars: usize,
}

impl JournalSession {
    /// `recent` is taken newest-first and trimmed to the configured limit.
    pub fn new(config: &Config, recent: Vec<JournalEntrySummary>) -> Self {
        let mut recent: VecDeque<_> = recent.into();
        recent.truncate(config.recent_entries_limit);
        Self {
            content: String::new(),
            word_count: 0,
            char_count: 0,
            mood: None,
            selected_prompt: None,
            writing_time: Duration::zero(),
            tick_span: config.writing_tick_span(),
            clock_running: false,
            typing: TransientFlag::new(config.typing_debounce()),
            saved: TransientFlag::new(config.saved_flash()),
            recent,
            recent_limit: config.recent_entries_limit,
            preview_chars: config.preview_chars,
        }
    }

    /// Replaces the draft, recounts it, and restarts the typing window.
    pub fn update_content(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.content = text.into();
        self.word_count = count_words(&self.content);
        self.char_count = self.content.chars().count();
        self.typing.arm(now);
        tracing::trace!(words = self.word_count, chars = self.char_count, "Draft updated");
    }

    /// One period of the writing clock. Only accrues while typing.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if !self.typing.is_raised(now) {
            return false;
        }
        self.writing_time = self.writing_time + self.tick_span;
        true
    }

    /// Marks the writing clock as running. Returns false if it already was,
    /// in which case the caller must not start another one.
    pub fn claim_writing_clock(&mut self) -> bool {
        !std::mem::replace(&mut self.clock_running, true)
    }

    pub fn release_writing_clock(&mut self) {
        self.clock_running = false;
    }

    pub fn writing_clock_claimed(&self) -> bool {
        self.clock_running
    }

    pub fn is_typing(&self, now: DateTime<Utc>) -> bool {
        self.typing.is_raised(now)
    }

    pub fn can_save(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Saves the draft into the recent log. Blank drafts are rejected.
    pub fn save(&mut self, now: DateTime<Utc>) -> Option<JournalEntrySummary> {
        if !self.can_save() {
            tracing::debug!("Save ignored, draft is blank");
            return None;
        }

        let entry = JournalEntry {
            content: self.content.clone(),
            mood: self.mood,
            timestamp: now,
            word_count: self.word_count,
            writing_time_secs: self.writing_time_secs(),
        };
        // No storage behind this; the log line is the record
        match serde_json::to_string(&entry) {
            Ok(json) => tracing::info!(entry = %json, "Saving journal entry"),
            Err(e) => tracing::warn!(error = %e, "Could not serialize journal entry"),
        }

        let summary = JournalEntrySummary {
            date: now.date_naive(),
            mood: self.mood,
            preview: preview(&self.content, self.preview_chars),
        };

        self.recent.push_front(summary.clone());
        self.recent.truncate(self.recent_limit);
        self.writing_time = Duration::zero();
        self.saved.arm(now);

        Some(summary)
    }

    /// Newest first.
    pub fn recent_entries(&self) -> impl Iterator<Item = &JournalEntrySummary> {
        self.recent.iter()
    }

    pub fn recent_len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_saved(&self, now: DateTime<Utc>) -> bool {
        self.saved.is_raised(now)
    }

    /// Switches the mood the draft is written under. Pending typing and
    /// saved flags belong to the previous mood and are dropped; the draft
    /// and any chosen prompt carry over.
    pub fn set_mood(&mut self, mood: Option<MoodId>) {
        self.mood = mood;
        self.typing.cancel();
        self.saved.cancel();
    }

    pub fn select_prompt(&mut self, prompt: impl Into<String>) {
        self.selected_prompt = Some(prompt.into());
    }

    pub fn selected_prompt(&self) -> Option<&str> {
        self.selected_prompt.as_deref()
    }

    pub fn prompts(&self) -> &'static [&'static str] {
        self.mood.map(catalog::journal_prompts).unwrap_or(&[])
    }

    pub fn placeholder(&self) -> &'static str {
        self.mood
            .map_or(catalog::GENERIC_PLACEHOLDER, catalog::journal_placeholder)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Whole seconds of active writing since the last save.
    pub fn writing_time_secs(&self) -> u64 {
        u64::try_from(self.writing_time.num_seconds()).unwrap_or(0)
    }

    pub fn status(&self, now: DateTime<Utc>) -> JournalStatus {
        JournalStatus {
            char_count: self.char_count,
            word_count: self.word_count,
            writing_time: format_writing_time(self.writing_time_secs()),
            encouragement: (!self.content.is_empty())
                .then(|| Encouragement::for_word_count(self.word_count).message()),
            is_typing: self.is_typing(now),
            is_saved: self.is_saved(now),
            can_save: self.can_save(),
            selected_prompt: self.selected_prompt.clone(),
            placeholder: self.placeholder(),
            recent: self.recent.iter().cloned().collect(),
        }
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn preview(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
