//! Cursor glow — a lagging point chasing the pointer every frame.
//!
//! g += (pointer - g) * smoothing. Never finishes; disabled entirely on
//! touch-primary input.

use serde::{Deserialize, Serialize};

use super::{FrameStep, FrameTime, StepStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorGlow {
    enabled: bool,
    smoothing: f64,
    radius: f64,
    opacity: f64,
    pointer: Point,
    position: Point,
    shown: bool,
}

impl CursorGlow {
    pub fn new(smoothing: f64, radius: f64, opacity: f64, touch_primary: bool) -> Self {
        Self {
            enabled: !touch_primary,
            smoothing,
            radius,
            opacity,
            pointer: Point::default(),
            position: Point::default(),
            shown: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the live pointer position. Ignored when disabled.
    pub fn set_pointer(&mut self, pointer: Point) {
        if self.enabled {
            self.pointer = pointer;
        }
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Smoothed glow centre.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Top-left corner of the glow element (centre minus radius).
    pub fn origin(&self) -> Point {
        Point::new(self.position.x - self.radius, self.position.y - self.radius)
    }

    /// Opacity once the loop has run a frame, zero before that or when disabled.
    pub fn opacity(&self) -> f64 {
        if self.enabled && self.shown {
            self.opacity
        } else {
            0.0
        }
    }
}

impl FrameStep for CursorGlow {
    fn step(&mut self, _now: FrameTime) -> StepStatus {
        if !self.enabled {
            return StepStatus::Idle;
        }
        self.position.x += (self.pointer.x - self.position.x) * self.smoothing;
        self.position.y += (self.pointer.y - self.position.y) * self.smoothing;
        self.shown = true;
        StepStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn approaches_pointer_geometrically() {
        let mut g = CursorGlow::new(0.12, 200.0, 0.35, false);
        g.set_pointer(Point::new(100.0, 50.0));
        g.step(Duration::ZERO);
        assert!((g.position().x - 12.0).abs() < 1e-12);
        assert!((g.position().y - 6.0).abs() < 1e-12);
        g.step(Duration::ZERO);
        // 12 + (100 - 12) * 0.12 = 22.56
        assert!((g.position().x - 22.56).abs() < 1e-12);
        for _ in 0..200 {
            g.step(Duration::ZERO);
        }
        assert!((g.position().x - 100.0).abs() < 1e-6);
        assert_eq!(g.origin().x.round(), -100.0);
        assert_eq!(g.opacity(), 0.35);
    }

    #[test]
    fn touch_primary_suppresses_everything() {
        let mut g = CursorGlow::new(0.12, 200.0, 0.35, true);
        g.set_pointer(Point::new(100.0, 100.0));
        assert_eq!(g.step(Duration::ZERO), StepStatus::Idle);
        assert_eq!(g.position(), Point::default());
        assert_eq!(g.opacity(), 0.0);
    }

    #[test]
    fn never_finishes() {
        let mut g = CursorGlow::new(0.12, 200.0, 0.35, false);
        for i in 0..10 {
            assert_eq!(g.step(Duration::from_millis(i * 16)), StepStatus::Running);
        }
    }
}
