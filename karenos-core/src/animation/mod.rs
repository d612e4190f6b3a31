//! Frame-driven animations and the scheduler tick that advances them.
//!
//! Frame time is the elapsed `Duration` since page load, supplied by the host
//! on every display refresh. Each animation is an explicit state object with
//! a `step`; `Animator::tick` steps all of them once per frame.

pub mod count_up;
pub mod glow;
pub mod typewriter;

use std::collections::BTreeMap;
use std::time::Duration;

pub use count_up::{ease_out_cubic, CountUp};
pub use glow::{CursorGlow, Point};
pub use typewriter::Typewriter;

/// Elapsed time since page load.
pub type FrameTime = Duration;

/// Result of one frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Not started (or disabled); nothing changed.
    Idle,
    Running,
    Finished,
}

/// One O(1) interpolation step per frame.
pub trait FrameStep {
    fn step(&mut self, now: FrameTime) -> StepStatus;
}

/// Owns every running animation on the page.
#[derive(Debug, Clone)]
pub struct Animator {
    count_ups: BTreeMap<String, CountUp>,
    glow: CursorGlow,
    typewriter: Option<Typewriter>,
}

impl Animator {
    pub fn new(glow: CursorGlow) -> Self {
        Self {
            count_ups: BTreeMap::new(),
            glow,
            typewriter: None,
        }
    }

    pub fn add_count_up(&mut self, id: impl Into<String>, count_up: CountUp) {
        self.count_ups.insert(id.into(), count_up);
    }

    pub fn set_typewriter(&mut self, typewriter: Typewriter) {
        self.typewriter = Some(typewriter);
    }

    /// Start a count-up. False when the id is unknown or the run already started.
    pub fn trigger_count_up(&mut self, id: &str, now: FrameTime) -> bool {
        match self.count_ups.get_mut(id) {
            Some(c) => c.trigger(now),
            None => false,
        }
    }

    pub fn count_up(&self, id: &str) -> Option<&CountUp> {
        self.count_ups.get(id)
    }

    pub fn glow(&self) -> &CursorGlow {
        &self.glow
    }

    pub fn glow_mut(&mut self) -> &mut CursorGlow {
        &mut self.glow
    }

    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }

    /// Advance every animation by one frame. Returns how many were running.
    pub fn tick(&mut self, now: FrameTime) -> usize {
        let mut running = 0;
        for c in self.count_ups.values_mut() {
            if c.step(now) == StepStatus::Running {
                running += 1;
            }
        }
        if self.glow.step(now) == StepStatus::Running {
            running += 1;
        }
        if let Some(t) = self.typewriter.as_mut() {
            if t.step(now) == StepStatus::Running {
                running += 1;
            }
        }
        running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn tick_advances_count_ups_and_glow() {
        let mut a = Animator::new(CursorGlow::new(0.12, 200.0, 0.35, false));
        a.add_count_up("years", CountUp::new(8, "+", ms(1200)));
        a.glow_mut().set_pointer(Point::new(50.0, 50.0));

        assert_eq!(a.tick(ms(0)), 1); // glow only
        assert!(a.trigger_count_up("years", ms(16)));
        assert!(!a.trigger_count_up("years", ms(32)));
        assert!(!a.trigger_count_up("missing", ms(32)));
        assert_eq!(a.tick(ms(32)), 2);
        a.tick(ms(2000));
        assert_eq!(a.count_up("years").unwrap().display(), "8+");
        assert!(a.glow().position().x > 0.0);
    }
}
