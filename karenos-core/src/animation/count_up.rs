//! Count-up — one-shot cubic ease-out from 0 to a target integer.
//!
//! displayed = round(target * (1 - (1 - p)^3)) + suffix, p = elapsed / duration.
//! A run starts at most once per element; re-triggering is ignored.

use std::time::Duration;

use crate::format::round_half_up;

use super::{FrameStep, FrameTime, StepStatus};

/// Cubic ease-out with `p` clamped to [0, 1].
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: i64,
    suffix: String,
    duration: Duration,
    started_at: Option<FrameTime>,
    done: bool,
    display: String,
}

impl CountUp {
    pub fn new(target: i64, suffix: impl Into<String>, duration: Duration) -> Self {
        let suffix = suffix.into();
        let display = format!("0{suffix}");
        Self {
            target,
            suffix,
            duration,
            started_at: None,
            done: false,
            display,
        }
    }

    /// Start the run. Returns false when it was already started or finished.
    pub fn trigger(&mut self, now: FrameTime) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    fn progress(&self, start: FrameTime, now: FrameTime) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

impl FrameStep for CountUp {
    fn step(&mut self, now: FrameTime) -> StepStatus {
        let Some(start) = self.started_at else {
            return StepStatus::Idle;
        };
        if self.done {
            return StepStatus::Finished;
        }

        let p = self.progress(start, now);
        let value = round_half_up(self.target as f64 * ease_out_cubic(p)) as i64;
        self.display = format!("{value}{}", self.suffix);

        if p >= 1.0 {
            self.done = true;
            StepStatus::Finished
        } else {
            StepStatus::Running
        }
    }
}
