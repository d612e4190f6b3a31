//! Page — the application-state handle every host event goes through.
//!
//! Built in a single setup pass from `KarenConfig`: controls, display slots,
//! the three exclusivity groups, count-ups and reveal targets are registered
//! once, then operated on by the typed components. Hosts never touch the
//! components directly; they call the operations here.

use std::collections::BTreeMap;

use crate::animation::{Animator, CountUp, CursorGlow, FrameTime, Point, Typewriter};
use crate::config::{KarenConfig, ViewportConfig};
use crate::content::SiteContent;
use crate::controls::ControlSet;
use crate::display::DisplayBoard;
use crate::engines::{self, ModuleId, Scale, ScaleSelector, Segment, SimulationContext, Stage};
use crate::expansion::{ExclusiveGroup, GroupKind, Transition};
use crate::reveal::{in_view, ElementGeometry, RevealObserver};
use crate::ui_mode::{KeyInput, SessionStore, UiMode};
use crate::viewport::{place_tooltip, MobileNav, Viewport};

/// Reveal targets outside the content lists.
pub const HERO_CONTENT: &str = "hero-content";
pub const HERO_VISUAL: &str = "hero-visual";
pub const OPTIMIZATION_PANEL: &str = "optimization-panel";
pub const CONTACT_SUBTITLE: &str = "contact-subtitle";
pub const CONTACT_BUTTONS: &str = "contact-buttons";

/// A visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub position: Point,
}

pub struct Page {
    content: SiteContent,
    viewport_config: ViewportConfig,
    controls: ControlSet,
    board: DisplayBoard,
    groups: BTreeMap<GroupKind, ExclusiveGroup>,
    segment: Segment,
    scale: ScaleSelector,
    animator: Animator,
    reveal: RevealObserver,
    ui: UiMode,
    store: Box<dyn SessionStore>,
    nav: MobileNav,
    viewport: Viewport,
    tooltip: Option<Tooltip>,
}

impl Page {
    pub fn new(config: &KarenConfig, store: Box<dyn SessionStore>) -> Self {
        let content = config.content.clone();
        let anim = &config.animation;

        let mut groups = BTreeMap::new();
        let mut timeline = ExclusiveGroup::new(GroupKind::Timeline);
        for item in &content.timeline {
            timeline.add_panel(item.id.clone(), None);
        }
        let mut skills = ExclusiveGroup::new(GroupKind::Skills);
        for card in &content.skills {
            skills.add_panel(card.id.clone(), None);
        }
        let mut modules = ExclusiveGroup::new(GroupKind::Modules);
        for block in &content.modules {
            modules.add_panel(block.id.clone(), block.simulator);
        }
        groups.insert(GroupKind::Timeline, timeline);
        groups.insert(GroupKind::Skills, skills);
        groups.insert(GroupKind::Modules, modules);

        let glow = CursorGlow::new(
            anim.glow_smoothing,
            anim.glow_radius,
            anim.glow_opacity,
            config.input.touch_primary,
        );
        let mut animator = Animator::new(glow);
        for m in &content.metrics {
            animator.add_count_up(
                m.id.clone(),
                CountUp::new(m.target, m.suffix.clone(), anim.count_up_duration()),
            );
        }
        animator.set_typewriter(Typewriter::new(
            &content.typing_text,
            std::time::Duration::from_millis(anim.typing_start_ms),
            std::time::Duration::from_millis(anim.typing_char_ms),
            std::time::Duration::from_millis(anim.typing_hold_ms),
            std::time::Duration::from_millis(anim.typing_restart_ms),
        ));

        // Metric cards and the slider panel start visible; the rest fade in.
        let mut reveal = RevealObserver::new(config.viewport.reveal_offset);
        for m in &content.metrics {
            reveal.register(m.id.clone(), true);
        }
        reveal.register(OPTIMIZATION_PANEL, true);
        for id in [HERO_CONTENT, HERO_VISUAL, CONTACT_SUBTITLE, CONTACT_BUTTONS] {
            reveal.register(id, false);
        }
        for id in content
            .timeline
            .iter()
            .map(|t| &t.id)
            .chain(content.architecture.iter().map(|a| &a.id))
            .chain(content.skills.iter().map(|s| &s.id))
        {
            reveal.register(id.clone(), false);
        }

        let ui = UiMode::init(store.as_ref());
        tracing::debug!(recruiter = ui.recruiter(), "page initialised");

        let mut page = Self {
            content,
            viewport_config: config.viewport.clone(),
            controls: ControlSet::page_defaults(),
            board: DisplayBoard::with_slots(engines::all_slots()),
            groups,
            segment: Segment::default(),
            scale: ScaleSelector::default(),
            animator,
            reveal,
            ui,
            store,
            nav: MobileNav::default(),
            viewport: Viewport::default(),
            tooltip: None,
        };
        page.recompute(ModuleId::Optimization);
        page
    }

    // ─── Accessors ───────────────────────────────────────────────────

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    pub fn board(&self) -> &DisplayBoard {
        &self.board
    }

    pub fn group(&self, kind: GroupKind) -> Option<&ExclusiveGroup> {
        self.groups.get(&kind)
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn scale(&self) -> Scale {
        self.scale.active()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn ui(&self) -> UiMode {
        self.ui
    }

    pub fn nav(&self) -> MobileNav {
        self.nav
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.reveal.is_revealed(id)
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.reveal.is_hidden(id)
    }

    pub fn scroll_progress(&self) -> f64 {
        self.viewport.scroll_progress()
    }

    pub fn navbar_scrolled(&self) -> bool {
        self.viewport
            .navbar_scrolled(self.viewport_config.navbar_scrolled_after)
    }

    // ─── Panels ──────────────────────────────────────────────────────

    /// Toggle a panel in its group; runs the panel's recompute hook when it opens.
    pub fn activate_panel(&mut self, kind: GroupKind, id: &str) -> Option<Transition> {
        let transition = self.groups.get_mut(&kind)?.activate(id)?;
        if let Some(module) = transition.hook {
            self.recompute(module);
        }
        Some(transition)
    }

    // ─── Controls and selectors ──────────────────────────────────────

    /// Apply raw control text. False when no such control exists.
    pub fn set_control_raw(&mut self, name: &str, raw: &str) -> bool {
        let Some(control) = self.controls.get_mut(name) else {
            return false;
        };
        control.set_raw(raw);
        let owner = control.spec.owner;
        self.recompute(owner);
        true
    }

    pub fn set_control(&mut self, name: &str, value: f64) -> bool {
        let Some(control) = self.controls.get_mut(name) else {
            return false;
        };
        control.set(value);
        let owner = control.spec.owner;
        self.recompute(owner);
        true
    }

    /// Keyboard adjustment by whole steps.
    pub fn nudge_control(&mut self, name: &str, steps: i32) -> bool {
        let Some(control) = self.controls.get_mut(name) else {
            return false;
        };
        control.nudge(steps);
        let owner = control.spec.owner;
        self.recompute(owner);
        true
    }

    pub fn select_segment(&mut self, segment: Segment) {
        self.segment = segment;
        self.recompute(ModuleId::Revenue);
    }

    pub fn select_scale(&mut self, scale: Scale) {
        self.scale.select(scale);
        self.recompute(ModuleId::Architecture);
    }

    /// Recompute one simulator from the current controls.
    pub fn recompute(&mut self, module: ModuleId) {
        let ctx = SimulationContext {
            controls: &self.controls,
            segment: self.segment,
            scale: self.scale.active(),
        };
        engines::recompute(module, &ctx, &mut self.board);
    }

    // ─── Modes ───────────────────────────────────────────────────────

    pub fn toggle_recruiter(&mut self) -> bool {
        self.ui.toggle_recruiter(self.store.as_mut())
    }

    /// Global key handler. Returns true when the key did something.
    pub fn key_press(&mut self, key: KeyInput) -> bool {
        if key.is_neon_shortcut() {
            self.ui.toggle_neon();
            return true;
        }
        false
    }

    pub fn toggle_mobile_nav(&mut self) -> bool {
        self.nav.toggle()
    }

    /// Scroll offset that brings `anchor` to the top; closes the mobile nav.
    /// `None` for an empty or unknown anchor.
    pub fn anchor_target(&mut self, anchor: &str, geometry: &dyn ElementGeometry) -> Option<f64> {
        let id = anchor.trim_start_matches('#');
        if id.is_empty() {
            return None;
        }
        let top = geometry.top(id)?;
        self.nav.close();
        Some((self.viewport.scroll_y + top).clamp(0.0, self.viewport.max_scroll()))
    }

    // ─── Pointer and tooltip ─────────────────────────────────────────

    pub fn set_pointer(&mut self, pointer: Point) {
        self.animator.glow_mut().set_pointer(pointer);
    }

    /// Tooltip text of an architecture block or a simulator layer (`arch-layer-N`).
    pub fn tooltip_text(&self, target_id: &str) -> Option<&str> {
        if let Some(block) = self.content.architecture.iter().find(|b| b.id == target_id) {
            return Some(block.tooltip.as_str());
        }
        Stage::from_slot(target_id).map(Stage::tooltip)
    }

    /// Show the tooltip of `target_id` at the pointer. False when it has none.
    pub fn show_tooltip(&mut self, target_id: &str, pointer: Point, size: Option<(f64, f64)>) -> bool {
        let Some(text) = self.tooltip_text(target_id).map(str::to_string) else {
            return false;
        };
        let position = place_tooltip(pointer, size, &self.viewport, self.viewport_config.tooltip_margin);
        self.tooltip = Some(Tooltip { text, position });
        true
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    // ─── Scroll, resize, load, frames ────────────────────────────────

    /// Scroll/resize/load: update the viewport, reveal what entered it and
    /// start count-ups for metrics near the bottom edge. Returns newly revealed ids.
    pub fn on_viewport(
        &mut self,
        now: FrameTime,
        viewport: Viewport,
        geometry: &dyn ElementGeometry,
    ) -> Vec<String> {
        self.viewport = viewport;
        let revealed = self.reveal.observe(geometry, viewport.inner_height);

        let offset = self.viewport_config.count_up_offset;
        let ids: Vec<String> = self.content.metrics.iter().map(|m| m.id.clone()).collect();
        for id in ids {
            if let Some(top) = geometry.top(&id) {
                if in_view(top, viewport.inner_height, offset) && self.animator.trigger_count_up(&id, now) {
                    tracing::trace!(metric = %id, "count-up started");
                }
            }
        }
        revealed
    }

    /// One display-refresh tick.
    pub fn tick(&mut self, now: FrameTime) -> usize {
        self.animator.tick(now)
    }
}
