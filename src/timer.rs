//! Cancellable scheduled tasks owned by the visibility controller
//!
//! Nothing here sleeps or spawns. Each task records a deadline and the
//! controller polls it with the current time from its `tick`.

use std::time::{Duration, Instant};

/// Debounced hide request
#[derive(Debug, Clone)]
pub struct HideTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl HideTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Start the countdown, replacing any pending one
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the pending hide if its deadline has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Progress of a running fade
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeStep {
    Idle,
    Running { opacity: f64 },
    Finished,
}

/// Linear fade-out from full opacity to zero
#[derive(Debug, Clone)]
pub struct Fade {
    duration: Duration,
    started: Option<Instant>,
}

impl Fade {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
        }
    }

    /// Begin fading; a fade already in progress keeps its start time
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Advance the fade; a finished fade stops itself
    pub fn step(&mut self, now: Instant) -> FadeStep {
        let Some(started) = self.started else {
            return FadeStep::Idle;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.started = None;
            return FadeStep::Finished;
        }

        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        FadeStep::Running {
            opacity: 1.0 - progress,
        }
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod timer_tests;
