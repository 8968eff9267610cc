//! Timers for transient state.
//!
//! [`TransientFlag`] is the timestamp form: it is raised for a fixed window
//! and re-arming it replaces the pending expiry. [`TimerSlot`] is the task
//! form: it owns at most one tokio task, and scheduling a new one aborts
//! whatever was pending in the slot.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct TransientFlag {
    window: chrono::Duration,
    raised_until: Option<DateTime<Utc>>,
}

impl TransientFlag {
    pub fn new(window: chrono::Duration) -> Self {
        Self {
            window,
            raised_until: None,
        }
    }

    /// Raises the flag until `now + window`, superseding any earlier arming.
    pub fn arm(&mut self, now: DateTime<Utc>) {
        self.raised_until = Some(now + self.window);
    }

    pub fn cancel(&mut self) {
        self.raised_until = None;
    }

    pub fn is_raised(&self, now: DateTime<Utc>) -> bool {
        self.raised_until.is_some_and(|until| now < until)
    }
}

/// Wall-clock time that advances with tokio's monotonic clock, so timers and
/// timestamps agree (and both pause together under test).
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    wall: DateTime<Utc>,
    mono: tokio::time::Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            wall: Utc::now(),
            mono: tokio::time::Instant::now(),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        let elapsed = chrono::Duration::from_std(self.mono.elapsed())
            .unwrap_or_else(|_| chrono::Duration::zero());
        self.wall + elapsed
    }
}

/// Holds a single outstanding tokio task for one concern.
#[derive(Debug, Default)]
pub struct TimerSlot {
    handle: Option<JoinHandle<()>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `callback` every `period`, first firing one period from now,
    /// until it breaks or the slot is cancelled or rescheduled. Any task
    /// already pending in the slot is aborted.
    pub fn schedule_every<F, Fut>(&mut self, period: Duration, mut callback: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if callback().await.is_break() {
                    break;
                }
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
