//! Viewport glue: scroll progress, navbar state, mobile nav, tooltip placement.

use serde::{Deserialize, Serialize};

use crate::animation::Point;

/// Scroll state of the page, in the host's length unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_y: f64,
    pub inner_height: f64,
    pub inner_width: f64,
    pub scroll_height: f64,
}

impl Viewport {
    /// Progress bar width in percent; 0 when the page does not scroll.
    pub fn scroll_progress(&self) -> f64 {
        let h = self.scroll_height - self.inner_height;
        if h > 0.0 {
            self.scroll_y / h * 100.0
        } else {
            0.0
        }
    }

    /// Navbar picks up its "scrolled" style past `threshold`.
    pub fn navbar_scrolled(&self, threshold: f64) -> bool {
        self.scroll_y > threshold
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.inner_height).max(0.0)
    }
}

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Anchor navigation closes the drawer.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}

/// Tooltip size used when the host cannot measure it yet.
pub const FALLBACK_TOOLTIP_SIZE: (f64, f64) = (280.0, 60.0);

/// Place a tooltip `margin` below-right of the pointer, kept `margin` inside the viewport.
pub fn place_tooltip(pointer: Point, size: Option<(f64, f64)>, viewport: &Viewport, margin: f64) -> Point {
    let (w, h) = match size {
        Some((w, h)) if w > 0.0 && h > 0.0 => (w, h),
        _ => FALLBACK_TOOLTIP_SIZE,
    };
    Point::new(
        (pointer.x + margin).min(viewport.inner_width - w - margin),
        (pointer.y + margin).min(viewport.inner_height - h - margin),
    )
}
