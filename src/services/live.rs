use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::dto::CheckInSnapshot;
use crate::models::habit::{HabitRecord, HabitSuggestion, ToggleOutcome};
use crate::models::journal::JournalEntrySummary;
use crate::models::mood::MoodId;
use crate::scheduler::{Clock, TimerSlot};
use crate::services::checkin::CheckIn;

/// A check-in session driven by real timers.
///
/// Typing starts the one-second writing clock. The clock stops by itself once
/// the typing window closes, and is cancelled outright on mood switch, save,
/// or close. Whether the clock is running is recorded in the shared state and
/// only changed under its lock, so a keystroke racing the clock's last tick
/// always sees the clock's final decision.
pub struct LiveCheckIn {
    state: Arc<Mutex<CheckIn>>,
    writing_clock: TimerSlot,
    tick: Duration,
    clock: Clock,
}

impl LiveCheckIn {
    pub fn new(config: &Config, mut checkin: CheckIn) -> Self {
        checkin.journal.release_writing_clock();
        Self {
            state: Arc::new(Mutex::new(checkin)),
            writing_clock: TimerSlot::new(),
            tick: config.writing_tick(),
            clock: Clock::start(),
        }
    }

    pub fn state(&self) -> Arc<Mutex<CheckIn>> {
        self.state.clone()
    }

    pub async fn select_mood(&mut self, mood: &str) -> Option<MoodId> {
        let state = self.state.clone();
        let mut checkin = state.lock().await;
        let selected = checkin.select_mood(mood, self.clock.now());
        if selected.is_some() {
            checkin.journal.release_writing_clock();
            self.writing_clock.cancel();
        }
        selected
    }

    pub async fn type_text(&mut self, text: impl Into<String>) {
        let state = self.state.clone();
        let mut checkin = state.lock().await;
        checkin.journal.update_content(text, self.clock.now());
        if checkin.journal.claim_writing_clock() {
            self.start_writing_clock();
        }
    }

    pub async fn save_journal(&mut self) -> Option<JournalEntrySummary> {
        let state = self.state.clone();
        let mut checkin = state.lock().await;
        let summary = checkin.journal.save(self.clock.now());
        if summary.is_some() {
            checkin.journal.release_writing_clock();
            self.writing_clock.cancel();
        }
        summary
    }

    pub async fn toggle_habit(&self, habit_id: &str) -> Option<ToggleOutcome> {
        self.state
            .lock()
            .await
            .habits
            .toggle_completion(habit_id, self.clock.now())
    }

    pub async fn promote_suggestion(&self, suggestion: &HabitSuggestion) -> HabitRecord {
        self.state
            .lock()
            .await
            .habits
            .promote_suggestion(suggestion, self.clock.now())
    }

    pub async fn snapshot(&self) -> CheckInSnapshot {
        self.state.lock().await.snapshot(self.clock.now())
    }

    pub fn is_clock_running(&self) -> bool {
        self.writing_clock.is_pending()
    }

    /// Stops every pending timer, e.g. when the owning view goes away.
    pub fn close(&mut self) {
        self.writing_clock.cancel();
        // The aborted clock can no longer release its claim itself
        match self.state.try_lock() {
            Ok(mut checkin) => checkin.journal.release_writing_clock(),
            Err(_) => tracing::debug!("Session busy on close, clock claim left for the next driver"),
        }
    }

    fn start_writing_clock(&mut self) {
        let state = self.state.clone();
        let clock = self.clock;
        self.writing_clock.schedule_every(self.tick, move || {
            let state = state.clone();
            async move {
                let mut checkin = state.lock().await;
                if checkin.journal.tick(clock.now()) {
                    ControlFlow::Continue(())
                } else {
                    // Typing window closed; the next keystroke restarts the clock
                    checkin.journal.release_writing_clock();
                    tracing::trace!(
                        writing_time_secs = checkin.journal.writing_time_secs(),
                        "Writing clock idle"
                    );
                    ControlFlow::Break(())
                }
            }
        });
    }
}

impl Drop for LiveCheckIn {
    fn drop(&mut self) {
        self.close();
    }
}
