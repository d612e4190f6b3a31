//! Page layout in terminal rows, and its mapping onto page length units.
//!
//! The core works in pixel-like units (reveal offsets of 80, glow radius of
//! 200). One terminal row counts as `ROW_PX` and one column as `COL_PX`.

use std::collections::BTreeMap;

use ratatui::text::Line;

use karenos_core::animation::Point;
use karenos_core::reveal::ElementGeometry;
use karenos_core::viewport::Viewport;

pub const ROW_PX: f64 = 16.0;
pub const COL_PX: f64 = 8.0;

/// Rendered page: one `Line` per row plus the first row of every anchored element.
#[derive(Debug, Default)]
pub struct PageLayout {
    lines: Vec<Line<'static>>,
    anchors: BTreeMap<String, usize>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// Anchor `id` at the next row to be pushed.
    pub fn anchor(&mut self, id: impl Into<String>) {
        self.anchors.insert(id.into(), self.lines.len());
    }

    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.anchors.get(id).copied()
    }

    /// Anchor whose element covers `row` (the nearest anchor at or above it).
    pub fn anchor_at(&self, row: usize) -> Option<&str> {
        self.anchors
            .iter()
            .filter(|(_, r)| **r <= row)
            .max_by_key(|(_, r)| **r)
            .map(|(id, _)| id.as_str())
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Largest scroll row that still fills a body of `height` rows.
    pub fn max_scroll(&self, height: usize) -> usize {
        self.lines.len().saturating_sub(height)
    }

    /// Element tops relative to a body scrolled to `scroll`.
    pub fn geometry(&self, scroll: usize) -> AnchorGeometry<'_> {
        AnchorGeometry {
            anchors: &self.anchors,
            scroll,
        }
    }

    /// Viewport for a body of `width` x `height` cells scrolled to `scroll`.
    pub fn viewport(&self, scroll: usize, width: u16, height: u16) -> Viewport {
        Viewport {
            scroll_y: scroll as f64 * ROW_PX,
            inner_height: f64::from(height) * ROW_PX,
            inner_width: f64::from(width) * COL_PX,
            scroll_height: self.lines.len().max(usize::from(height)) as f64 * ROW_PX,
        }
    }
}

pub struct AnchorGeometry<'a> {
    anchors: &'a BTreeMap<String, usize>,
    scroll: usize,
}

impl ElementGeometry for AnchorGeometry<'_> {
    fn top(&self, id: &str) -> Option<f64> {
        let row = *self.anchors.get(id)?;
        Some((row as f64 - self.scroll as f64) * ROW_PX)
    }
}

/// Body cell to page point.
pub fn cell_to_point(col: u16, row: u16) -> Point {
    Point::new(f64::from(col) * COL_PX, f64::from(row) * ROW_PX)
}

/// Page point to body cell, `None` when off the body.
pub fn point_to_cell(p: Point, width: u16, height: u16) -> Option<(u16, u16)> {
    if p.x < 0.0 || p.y < 0.0 {
        return None;
    }
    let col = (p.x / COL_PX).floor();
    let row = (p.y / ROW_PX).floor();
    if col >= f64::from(width) || row >= f64::from(height) {
        return None;
    }
    Some((col as u16, row as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        let mut l = PageLayout::new();
        l.anchor("hero");
        l.push(Line::from("KarenOS"));
        l.blank();
        l.anchor("metrics");
        l.push(Line::from("8+"));
        l.push(Line::from("40"));
        l
    }

    #[test]
    fn anchors_record_rows() {
        let l = layout();
        assert_eq!(l.row_of("hero"), Some(0));
        assert_eq!(l.row_of("metrics"), Some(2));
        assert_eq!(l.anchor_at(3), Some("metrics"));
        assert_eq!(l.anchor_at(1), Some("hero"));
        assert_eq!(l.len(), 4);
    }

    #[test]
    fn geometry_is_relative_to_scroll() {
        let l = layout();
        let g = l.geometry(1);
        assert_eq!(g.top("hero"), Some(-ROW_PX));
        assert_eq!(g.top("metrics"), Some(ROW_PX));
        assert_eq!(g.top("missing"), None);
    }

    #[test]
    fn viewport_uses_cell_units() {
        let l = layout();
        let vp = l.viewport(1, 80, 2);
        assert_eq!(vp.scroll_y, 16.0);
        assert_eq!(vp.inner_height, 32.0);
        assert_eq!(vp.inner_width, 640.0);
        assert_eq!(vp.scroll_height, 64.0);
        assert_eq!(l.max_scroll(2), 2);
    }

    #[test]
    fn cells_and_points_convert() {
        let p = cell_to_point(10, 3);
        assert_eq!(point_to_cell(p, 80, 24), Some((10, 3)));
        assert_eq!(point_to_cell(Point::new(-1.0, 0.0), 80, 24), None);
        assert_eq!(point_to_cell(cell_to_point(80, 0), 80, 24), None);
    }
}
