//! End-to-end flows through `Page`, the way a host drives it.

use std::collections::BTreeMap;
use std::time::Duration;

use karenos_core::animation::Point;
use karenos_core::controls::{REV_DURATION, REV_TRAFFIC, RISK_SENSITIVITY, RISK_TOLERANCE};
use karenos_core::engines::{Scale, Segment};
use karenos_core::expansion::GroupKind;
use karenos_core::ui_mode::{DisabledStore, KeyInput, MemoryStore};
use karenos_core::viewport::Viewport;
use karenos_core::{KarenConfig, Page};

fn viewport(scroll_y: f64) -> Viewport {
    Viewport {
        scroll_y,
        inner_height: 800.0,
        inner_width: 1280.0,
        scroll_height: 5000.0,
    }
}

#[test]
fn visitor_explores_the_revenue_module() {
    let mut page = Page::new(&KarenConfig::default(), Box::new(MemoryStore::new()));

    page.activate_panel(GroupKind::Modules, "module-revenue");
    assert_eq!(page.board().text("rev-traffic-val"), "50K");
    assert_eq!(page.board().text("rev-decision"), "KILL");
    assert_eq!(
        page.board().get("rev-decision").and_then(|s| s.class.as_deref()),
        Some("decision-badge kill")
    );

    page.nudge_control(REV_DURATION, 1);
    assert_eq!(page.controls().value_or(REV_DURATION, 0.0), 21.0);
    page.set_control(REV_TRAFFIC, 9999.0);
    assert_eq!(page.board().text("rev-traffic-val"), "500K");

    // Segment changes recompute but never move the numbers.
    let before = page.board().text("rev-impact").to_string();
    page.select_segment(Segment::Returning);
    assert_eq!(page.board().text("rev-impact"), before);

    // Closing the panel keeps the last render.
    page.activate_panel(GroupKind::Modules, "module-revenue");
    assert!(page.group(GroupKind::Modules).unwrap().expanded().is_none());
    assert_eq!(page.board().text("rev-impact"), before);
}

#[test]
fn risk_alert_turns_on_past_threshold() {
    let mut page = Page::new(&KarenConfig::default(), Box::new(MemoryStore::new()));
    page.set_control_raw(RISK_SENSITIVITY, "84");
    page.set_control_raw(RISK_TOLERANCE, "30");
    assert_eq!(page.board().text("risk-prob"), "66%");
    assert_eq!(page.board().text("risk-alert"), "ACTIVE");
    assert!(page.board().text("pr-path").starts_with("M10,"));
}

#[test]
fn architecture_scales_and_keeps_monitoring_accent() {
    let mut page = Page::new(&KarenConfig::default(), Box::new(MemoryStore::new()));
    page.activate_panel(GroupKind::Modules, "module-arch");
    page.select_scale(Scale::Enterprise);
    assert_eq!(page.board().text("arch-layer-4"), "Full Observability");
    assert_eq!(
        page.board().get("arch-layer-4").and_then(|s| s.class.as_deref()),
        Some("accent")
    );
    assert_eq!(page.board().get("arch-layer-0").and_then(|s| s.class.clone()), None);
}

#[test]
fn storage_failure_still_toggles_recruiter() {
    let mut page = Page::new(&KarenConfig::default(), Box::new(DisabledStore));
    assert!(!page.ui().recruiter());
    assert!(page.toggle_recruiter());
    assert!(page.ui().recruiter());
}

#[test]
fn touch_devices_get_no_glow() {
    let config: KarenConfig = toml::from_str("[input]\ntouch_primary = true").unwrap();
    let mut page = Page::new(&config, Box::new(MemoryStore::new()));
    page.set_pointer(Point::new(400.0, 300.0));
    page.tick(Duration::from_millis(16));
    assert!(!page.animator().glow().is_enabled());
    assert_eq!(page.animator().glow().opacity(), 0.0);
}

#[test]
fn scrolling_reveals_progressively() {
    let mut page = Page::new(&KarenConfig::default(), Box::new(MemoryStore::new()));
    let mut tops: BTreeMap<String, f64> = BTreeMap::new();
    tops.insert("timeline-lead".into(), 1200.0);
    tops.insert("skill-ml".into(), 2400.0);

    let revealed = page.on_viewport(Duration::ZERO, viewport(0.0), &tops);
    assert!(revealed.is_empty());
    assert!(page.is_revealed("metric-years"));
    assert!(page.is_revealed("optimization-panel"));

    // Host reports tops relative to the viewport after scrolling.
    tops.insert("timeline-lead".into(), 300.0);
    tops.insert("skill-ml".into(), 1500.0);
    let revealed = page.on_viewport(Duration::from_millis(500), viewport(900.0), &tops);
    assert_eq!(revealed, vec!["timeline-lead".to_string()]);
    assert!(!page.is_revealed("skill-ml"));
    assert!(page.navbar_scrolled());
    assert!(page.scroll_progress() > 0.0);
}

#[test]
fn neon_key_ignores_modified_presses() {
    let mut page = Page::new(&KarenConfig::default(), Box::new(MemoryStore::new()));
    let ctrl_k = KeyInput {
        ctrl: true,
        ..KeyInput::plain('k')
    };
    assert!(!page.key_press(ctrl_k));
    assert!(!page.ui().neon());
    assert!(page.key_press(KeyInput::plain('k')));
    assert!(page.ui().neon());
}
