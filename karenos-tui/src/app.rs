//! Application state — single-owner, main-thread only.
//!
//! Wraps the core `Page` with what only a terminal needs: scroll position,
//! keyboard focus, overlays and a status line.

use std::time::Instant;

use karenos_core::animation::{FrameTime, Point};
use karenos_core::controls::{
    OPT_CONV, OPT_EFFICIENCY, OPT_REVENUE, REV_CONV, REV_DURATION, REV_TRAFFIC, REV_UPLIFT,
    RISK_SENSITIVITY, RISK_TOLERANCE,
};
use karenos_core::engines::{ModuleId, Segment};
use karenos_core::expansion::GroupKind;
use karenos_core::Page;

use crate::layout::{cell_to_point, PageLayout, COL_PX, ROW_PX};

/// Top-level page sections, in document order.
pub const SECTIONS: [(&str, &str); 8] = [
    ("hero", "Home"),
    ("metrics", "Impact"),
    ("timeline", "Experience"),
    ("architecture", "Architecture"),
    ("skills", "Skills"),
    ("modules", "Modules"),
    ("optimization", "Optimization"),
    ("contact", "Contact"),
];

/// Anchors for the two selector rows.
pub const SEGMENT_ANCHOR: &str = "rev-segment";
pub const SCALE_ANCHOR: &str = "arch-scale";
pub const ARCH_METRICS_ANCHOR: &str = "arch-metrics";

/// Tooltip width in columns.
pub const TOOLTIP_COLS: u16 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Nav,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Something the keyboard can focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Panel(GroupKind, String),
    ArchBlock(String),
    Control(&'static str),
    Segment,
    Scale,
}

impl Focus {
    /// Layout anchor of the focused row.
    pub fn anchor(&self) -> &str {
        match self {
            Focus::Panel(_, id) | Focus::ArchBlock(id) => id,
            Focus::Control(name) => name,
            Focus::Segment => SEGMENT_ANCHOR,
            Focus::Scale => SCALE_ANCHOR,
        }
    }
}

/// Controls inside a module body, in display order.
pub fn module_controls(module: ModuleId) -> &'static [&'static str] {
    match module {
        ModuleId::Revenue => &[REV_TRAFFIC, REV_CONV, REV_UPLIFT, REV_DURATION],
        ModuleId::Risk => &[RISK_SENSITIVITY, RISK_TOLERANCE],
        ModuleId::Architecture => &[],
        ModuleId::Optimization => &[OPT_CONV, OPT_REVENUE, OPT_EFFICIENCY],
    }
}

pub struct AppState {
    pub page: Page,
    pub running: bool,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,

    // Scrolling and focus
    pub scroll: usize,
    pub focus: Option<usize>,
    pub layout: PageLayout,
    pub body_width: u16,
    pub body_height: u16,
    /// Last pointer position in body cells.
    pub pointer_cell: Option<(u16, u16)>,

    started: Instant,
}

impl AppState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            running: true,
            overlay: Overlay::None,
            status_message: None,
            scroll: 0,
            focus: None,
            layout: PageLayout::new(),
            body_width: 80,
            body_height: 24,
            pointer_cell: None,
            started: Instant::now(),
        }
    }

    /// Frame time since start.
    pub fn now(&self) -> FrameTime {
        self.started.elapsed()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    // ─── Layout and viewport ─────────────────────────────────────────

    /// Install a freshly built layout and report the viewport to the page.
    pub fn apply_layout(&mut self, layout: PageLayout, width: u16, height: u16, now: FrameTime) {
        self.layout = layout;
        self.body_width = width;
        self.body_height = height;
        self.scroll = self.scroll.min(self.layout.max_scroll(usize::from(height)));
        self.sync_viewport(now);
    }

    pub fn sync_viewport(&mut self, now: FrameTime) {
        let vp = self
            .layout
            .viewport(self.scroll, self.body_width, self.body_height);
        let geometry = self.layout.geometry(self.scroll);
        let revealed = self.page.on_viewport(now, vp, &geometry);
        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), "revealed");
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.layout.max_scroll(usize::from(self.body_height));
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    pub fn scroll_to(&mut self, row: usize) {
        let max = self.layout.max_scroll(usize::from(self.body_height));
        self.scroll = row.min(max);
    }

    /// Jump to a section anchor; closes the nav drawer.
    pub fn jump_to(&mut self, anchor: &str) {
        let geometry = self.layout.geometry(self.scroll);
        match self.page.anchor_target(anchor, &geometry) {
            Some(y) => self.scroll_to((y / ROW_PX).round() as usize),
            None => self.set_warning(format!("No section '{anchor}'")),
        }
        if self.overlay == Overlay::Nav {
            self.overlay = Overlay::None;
        }
    }

    fn ensure_visible(&mut self, anchor: &str) {
        let Some(row) = self.layout.row_of(anchor) else {
            return;
        };
        let height = usize::from(self.body_height.max(1));
        if row < self.scroll {
            self.scroll_to(row);
        } else if row >= self.scroll + height {
            self.scroll_to(row + 1 - height);
        }
    }

    // ─── Focus ───────────────────────────────────────────────────────

    /// Focusable items in document order. Controls only exist inside open modules.
    pub fn focus_targets(&self) -> Vec<Focus> {
        let content = self.page.content();
        let mut targets: Vec<Focus> = content
            .timeline
            .iter()
            .map(|t| Focus::Panel(GroupKind::Timeline, t.id.clone()))
            .collect();
        targets.extend(content.architecture.iter().map(|a| Focus::ArchBlock(a.id.clone())));
        targets.extend(
            content
                .skills
                .iter()
                .map(|s| Focus::Panel(GroupKind::Skills, s.id.clone())),
        );

        let modules = self.page.group(GroupKind::Modules);
        for block in &content.modules {
            targets.push(Focus::Panel(GroupKind::Modules, block.id.clone()));
            let open = modules.is_some_and(|g| g.is_expanded(&block.id));
            match block.simulator {
                Some(module) if open => {
                    targets.extend(module_controls(module).iter().copied().map(Focus::Control));
                    match module {
                        ModuleId::Revenue => targets.push(Focus::Segment),
                        ModuleId::Architecture => targets.push(Focus::Scale),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        targets.extend(
            module_controls(ModuleId::Optimization)
                .iter()
                .copied()
                .map(Focus::Control),
        );
        targets
    }

    pub fn focused(&self) -> Option<Focus> {
        let i = self.focus?;
        self.focus_targets().into_iter().nth(i)
    }

    pub fn focus_next(&mut self) {
        let n = self.focus_targets().len();
        if n == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) => (i + 1) % n,
            None => 0,
        });
        self.after_focus_change();
    }

    pub fn focus_prev(&mut self) {
        let n = self.focus_targets().len();
        if n == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) => (i + n - 1) % n,
            None => n - 1,
        });
        self.after_focus_change();
    }

    fn after_focus_change(&mut self) {
        let Some(focus) = self.focused() else {
            return;
        };
        self.ensure_visible(focus.anchor());
        match &focus {
            Focus::ArchBlock(id) => {
                let id = id.clone();
                self.tooltip_for_row(&id);
            }
            _ => self.page.hide_tooltip(),
        }
    }

    /// Open the tooltip of an architecture block next to its row.
    fn tooltip_for_row(&mut self, block_id: &str) {
        let Some(row) = self.layout.row_of(block_id) else {
            return;
        };
        let body_row = row.saturating_sub(self.scroll) as u16;
        let pointer = cell_to_point(2, body_row);
        self.show_tooltip(block_id, pointer);
    }

    fn show_tooltip(&mut self, target_id: &str, pointer: Point) {
        let size = (f64::from(TOOLTIP_COLS) * COL_PX, 4.0 * ROW_PX);
        self.page.show_tooltip(target_id, pointer, Some(size));
    }

    // ─── Activation ──────────────────────────────────────────────────

    /// Enter/Space on the focused item.
    pub fn activate_focused(&mut self) {
        let Some(focus) = self.focused() else {
            return;
        };
        match focus {
            Focus::Panel(kind, id) => {
                if let Some(t) = self.page.activate_panel(kind, &id) {
                    if let Some(module) = t.hook {
                        self.set_status(format!("{} recomputed", module.label()));
                    }
                }
            }
            Focus::ArchBlock(id) => {
                if self.page.tooltip().is_some() {
                    self.page.hide_tooltip();
                } else {
                    self.tooltip_for_row(&id);
                }
            }
            Focus::Segment => self.cycle_segment(1),
            Focus::Scale => self.page.select_scale(self.page.scale().next()),
            Focus::Control(_) => {}
        }
    }

    /// h/l on the focused item.
    pub fn adjust_focused(&mut self, steps: i32) {
        let Some(focus) = self.focused() else {
            return;
        };
        match focus {
            Focus::Control(name) => {
                self.page.nudge_control(name, steps);
            }
            Focus::Segment => self.cycle_segment(steps),
            Focus::Scale => {
                let scale = if steps < 0 {
                    self.page.scale().prev()
                } else {
                    self.page.scale().next()
                };
                self.page.select_scale(scale);
            }
            Focus::Panel(..) | Focus::ArchBlock(_) => {}
        }
    }

    fn cycle_segment(&mut self, steps: i32) {
        let n = Segment::ALL.len() as i32;
        let current = Segment::ALL
            .iter()
            .position(|s| *s == self.page.segment())
            .unwrap_or(0) as i32;
        let next = (current + steps).rem_euclid(n) as usize;
        self.page.select_segment(Segment::ALL[next]);
    }

    // ─── Modes ───────────────────────────────────────────────────────

    pub fn toggle_recruiter(&mut self) {
        if self.page.toggle_recruiter() {
            self.set_status("Recruiter mode on");
        } else {
            self.set_status("Recruiter mode off");
        }
    }

    // ─── Pointer ─────────────────────────────────────────────────────

    /// Mouse moved to a body cell.
    pub fn pointer_moved(&mut self, col: u16, row: u16) {
        self.pointer_cell = Some((col, row));
        let point = cell_to_point(col, row);
        self.page.set_pointer(point);

        let hovered = self
            .layout
            .anchor_at(self.scroll + usize::from(row))
            .map(str::to_string);
        let has_tooltip = hovered
            .as_deref()
            .is_some_and(|id| self.page.tooltip_text(id).is_some());
        match hovered {
            Some(id) if has_tooltip => self.show_tooltip(&id, point),
            _ => {
                if !matches!(self.focused(), Some(Focus::ArchBlock(_))) {
                    self.page.hide_tooltip();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karenos_core::engines::Scale;
    use karenos_core::ui_mode::MemoryStore;
    use karenos_core::KarenConfig;
    use std::time::Duration;

    fn app() -> AppState {
        let page = Page::new(&KarenConfig::default(), Box::new(MemoryStore::new()));
        let mut app = AppState::new(page);
        let layout = crate::ui::page::build(&app);
        app.apply_layout(layout, 100, 30, Duration::ZERO);
        app
    }

    #[test]
    fn controls_appear_only_inside_open_modules() {
        let mut app = app();
        let before = app.focus_targets();
        assert!(!before.contains(&Focus::Control(REV_TRAFFIC)));
        assert!(before.contains(&Focus::Control(OPT_CONV)));

        app.page.activate_panel(GroupKind::Modules, "module-revenue");
        let after = app.focus_targets();
        assert!(after.contains(&Focus::Control(REV_TRAFFIC)));
        assert!(after.contains(&Focus::Segment));
        assert!(!after.contains(&Focus::Scale));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = app();
        app.focus_prev();
        let n = app.focus_targets().len();
        assert_eq!(app.focus, Some(n - 1));
        app.focus_next();
        assert_eq!(app.focus, Some(0));
        assert_eq!(
            app.focused(),
            Some(Focus::Panel(GroupKind::Timeline, "timeline-lead".into()))
        );
    }

    #[test]
    fn enter_toggles_focused_panel() {
        let mut app = app();
        app.focus_next();
        app.activate_focused();
        assert!(app
            .page
            .group(GroupKind::Timeline)
            .unwrap()
            .is_expanded("timeline-lead"));
        app.activate_focused();
        assert!(app.page.group(GroupKind::Timeline).unwrap().expanded().is_none());
    }

    #[test]
    fn adjusting_scale_and_segment_cycles() {
        let mut app = app();
        app.page.activate_panel(GroupKind::Modules, "module-arch");
        let targets = app.focus_targets();
        app.focus = targets.iter().position(|f| *f == Focus::Scale);
        app.adjust_focused(-1);
        assert_eq!(app.page.scale(), Scale::Enterprise);
        app.adjust_focused(1);
        assert_eq!(app.page.scale(), Scale::Startup);

        app.page.activate_panel(GroupKind::Modules, "module-revenue");
        let targets = app.focus_targets();
        app.focus = targets.iter().position(|f| *f == Focus::Segment);
        app.adjust_focused(-1);
        assert_eq!(app.page.segment(), Segment::Returning);
    }

    #[test]
    fn nudging_a_slider_rerenders() {
        let mut app = app();
        let targets = app.focus_targets();
        app.focus = targets.iter().position(|f| *f == Focus::Control(OPT_CONV));
        app.adjust_focused(2);
        assert_eq!(app.page.board().text("conv-value"), "20%");
    }

    #[test]
    fn focusing_an_arch_block_shows_its_tooltip() {
        let mut app = app();
        let targets = app.focus_targets();
        let i = targets
            .iter()
            .position(|f| matches!(f, Focus::ArchBlock(_)))
            .unwrap();
        app.focus = Some(i.saturating_sub(1));
        app.focus_next();
        assert!(app.page.tooltip().is_some());
        app.focus_prev();
        assert!(app.page.tooltip().is_none());
    }

    #[test]
    fn jump_closes_nav() {
        let mut app = app();
        app.overlay = Overlay::Nav;
        app.page.toggle_mobile_nav();
        app.jump_to("#contact");
        assert_eq!(app.overlay, Overlay::None);
        assert!(!app.page.nav().is_open());
        assert!(app.scroll > 0);
    }

    #[test]
    fn unknown_anchor_warns_and_stays_put() {
        let mut app = app();
        app.jump_to("#nowhere");
        assert_eq!(app.scroll, 0);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn hovering_a_simulator_layer_shows_its_tooltip() {
        let mut app = app();
        app.page.activate_panel(GroupKind::Modules, "module-arch");
        let layout = crate::ui::page::build(&app);
        app.apply_layout(layout, 100, 30, Duration::ZERO);
        app.jump_to("arch-layer-2");
        let row = app.layout.row_of("arch-layer-2").unwrap() - app.scroll;
        app.pointer_moved(4, row as u16);
        assert_eq!(
            app.page.tooltip().map(|t| t.text.as_str()),
            Some(karenos_core::engines::Stage::Modeling.tooltip())
        );

        let below = app.layout.row_of(ARCH_METRICS_ANCHOR).unwrap() - app.scroll;
        app.pointer_moved(4, below as u16);
        assert!(app.page.tooltip().is_none());
    }
}
