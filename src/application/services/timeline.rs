//! Tick driven timers for cosmetic UI state.
//!
//! Both timers advance only when fed elapsed time, so the event loop owns the
//! clock and tests can step them deterministically.

use std::time::Duration;

/// One-shot delay that reports when it has run out.
#[derive(Debug, Clone)]
pub struct DelayTimer {
    delay: Duration,
    elapsed: Option<Duration>,
}

impl DelayTimer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: None,
        }
    }

    /// Starts the timer. Restarting while active keeps the running delay.
    pub fn start(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(Duration::ZERO);
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Advances the timer. Returns `true` on the tick it expires.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(elapsed) = self.elapsed else {
            return false;
        };
        let elapsed = elapsed.saturating_add(delta);
        if elapsed >= self.delay {
            self.elapsed = None;
            true
        } else {
            self.elapsed = Some(elapsed);
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadePhase {
    FadeIn,
    Hold,
    FadeOut,
    Done,
}

/// Durations of the three visible fade phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDurations {
    pub fade_in: Duration,
    pub hold: Duration,
    pub fade_out: Duration,
}

impl Default for FadeDurations {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(300),
            hold: Duration::from_millis(2000),
            fade_out: Duration::from_millis(500),
        }
    }
}

impl FadeDurations {
    #[must_use]
    pub fn total(&self) -> Duration {
        self.fade_in + self.hold + self.fade_out
    }
}

/// Fade in, hold, fade out sequence.
#[derive(Debug, Clone)]
pub struct FadeTimeline {
    durations: FadeDurations,
    elapsed: Duration,
}

impl FadeTimeline {
    #[must_use]
    pub const fn new(durations: FadeDurations) -> Self {
        Self {
            durations,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.durations.total());
    }

    fn phase(&self) -> FadePhase {
        let d = self.durations;
        if self.elapsed < d.fade_in {
            FadePhase::FadeIn
        } else if self.elapsed < d.fade_in + d.hold {
            FadePhase::Hold
        } else if self.elapsed < d.total() {
            FadePhase::FadeOut
        } else {
            FadePhase::Done
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase() == FadePhase::Done
    }
}
