//! Typing line — types a sentence, holds it, clears, repeats.
//!
//! Timeline per cycle: wait `start_delay`, one char every `char_interval`,
//! one more interval after the last char, hold the full text `hold`, clear,
//! wait `restart_delay`, type again. A cycle always lasts at least
//! `char_interval` per char, so catching up on missed frames terminates.

use std::time::Duration;

use super::{FrameStep, FrameTime, StepStatus};

const MIN_CHAR_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting to type the next char (or the first one) at `at`.
    Typing { at: FrameTime },
    /// Full text visible until `until`.
    Holding { until: FrameTime },
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    phase: Phase,
    char_interval: Duration,
    hold: Duration,
    restart_delay: Duration,
}

impl Typewriter {
    pub fn new(
        text: &str,
        start_delay: Duration,
        char_interval: Duration,
        hold: Duration,
        restart_delay: Duration,
    ) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            phase: Phase::Typing { at: start_delay },
            char_interval: char_interval.max(MIN_CHAR_INTERVAL),
            hold,
            restart_delay,
        }
    }

    /// Currently visible prefix.
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.chars.len()
    }
}

impl FrameStep for Typewriter {
    fn step(&mut self, now: FrameTime) -> StepStatus {
        if self.chars.is_empty() {
            return StepStatus::Idle;
        }
        // Catch up on every deadline that passed since the last frame.
        loop {
            let phase = self.phase;
            match phase {
                Phase::Typing { at } if at <= now => {
                    self.shown += 1;
                    self.phase = if self.shown == self.chars.len() {
                        Phase::Holding {
                            until: at + self.char_interval + self.hold,
                        }
                    } else {
                        Phase::Typing {
                            at: at + self.char_interval,
                        }
                    };
                }
                Phase::Holding { until } if until <= now => {
                    self.shown = 0;
                    self.phase = Phase::Typing {
                        at: until + self.restart_delay,
                    };
                }
                _ => break,
            }
        }
        StepStatus::Running
    }
}
