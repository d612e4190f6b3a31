//! Module bodies — the revenue, risk and architecture simulators plus the
//! always-open optimization sliders, laid out from the display board.

use ratatui::text::{Line, Span};

use karenos_core::controls::{
    OPT_CONV, OPT_EFFICIENCY, OPT_REVENUE, REV_CONV, REV_DURATION, REV_TRAFFIC, REV_UPLIFT,
    RISK_SENSITIVITY, RISK_TOLERANCE,
};
use karenos_core::engines::{architecture, optimization, revenue, risk};
use karenos_core::engines::{AlertState, Decision, ModuleId, Scale, Segment, Stage};

use crate::app::{
    module_controls, AppState, Focus, ARCH_METRICS_ANCHOR, SCALE_ANCHOR, SEGMENT_ANCHOR,
};
use crate::layout::PageLayout;
use crate::theme::Theme;
use crate::ui::widgets::{band_bar, fill_bar, parse_path, slider_line, sparkline};

const METER_WIDTH: usize = 30;

/// Readout shown next to a slider.
fn readout(app: &AppState, name: &str) -> String {
    let board = app.page.board();
    let value = app.page.controls().value_or(name, 0.0);
    match name {
        REV_TRAFFIC => board.text(revenue::SLOT_TRAFFIC_VAL).to_string(),
        REV_UPLIFT => board.text(revenue::SLOT_UPLIFT_VAL).to_string(),
        REV_CONV => format!("{value:.1}%"),
        REV_DURATION => format!("{value} days"),
        RISK_SENSITIVITY => board.text(risk::SLOT_SENS_VAL).to_string(),
        RISK_TOLERANCE => board.text(risk::SLOT_TOL_VAL).to_string(),
        OPT_CONV => board.text(optimization::SLOT_CONV).to_string(),
        OPT_REVENUE => board.text(optimization::SLOT_REVENUE).to_string(),
        OPT_EFFICIENCY => board.text(optimization::SLOT_EFFICIENCY).to_string(),
        _ => value.to_string(),
    }
}

fn push_sliders(out: &mut PageLayout, app: &AppState, theme: &Theme, module: ModuleId) {
    let focused = app.focused();
    for &name in module_controls(module) {
        let Some(control) = app.page.controls().get(name) else {
            continue;
        };
        let is_focused = focused == Some(Focus::Control(name));
        out.anchor(name);
        out.push(slider_line(theme, control, &readout(app, name), is_focused));
    }
}

fn stat(theme: &Theme, label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("    {label:>22}: "), theme.muted()),
        Span::styled(value, theme.text()),
    ])
}

/// Render a selector row of options with the active one bracketed.
fn selector(theme: &Theme, label: &str, options: &[&str], active: usize, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("    {label:>22}: "),
        if focused { theme.focused() } else { theme.muted() },
    )];
    for (i, opt) in options.iter().enumerate() {
        if i == active {
            spans.push(Span::styled(format!("[{opt}] "), theme.accent_bold()));
        } else {
            spans.push(Span::styled(format!(" {opt}  "), theme.muted()));
        }
    }
    Line::from(spans)
}

pub fn revenue_body(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    let board = app.page.board();
    push_sliders(out, app, theme, ModuleId::Revenue);

    let segments: Vec<&str> = Segment::ALL.iter().map(|s| s.label()).collect();
    let active = Segment::ALL
        .iter()
        .position(|s| *s == app.page.segment())
        .unwrap_or(0);
    out.anchor(SEGMENT_ANCHOR);
    out.push(selector(theme, "Segment", &segments, active, app.focused() == Some(Focus::Segment)));
    out.blank();

    out.push(Line::from(vec![
        Span::styled(format!("    {:>22}: ", "Projected impact"), theme.muted()),
        Span::styled(board.text(revenue::SLOT_IMPACT).to_string(), theme.accent_bold()),
    ]));
    let band = board
        .get(revenue::SLOT_CI_BAND)
        .and_then(|s| s.band)
        .map(|(a, b)| band_bar(a, b, METER_WIDTH))
        .unwrap_or_default();
    out.push(Line::from(vec![
        Span::styled(format!("    {:>22}: ", "95% CI"), theme.muted()),
        Span::styled(band, theme.neutral()),
        Span::styled(format!(" {}", board.text(revenue::SLOT_CI_RANGE)), theme.text()),
    ]));
    out.push(stat(theme, "Significance", board.text(revenue::SLOT_SIGNIFICANCE).to_string()));
    let fill = board
        .get(revenue::SLOT_RISK_FILL)
        .and_then(|s| s.fill_pct)
        .map(|p| fill_bar(p, METER_WIDTH))
        .unwrap_or_default();
    out.push(Line::from(vec![
        Span::styled(format!("    {:>22}: ", "False-positive risk"), theme.muted()),
        Span::styled(fill, theme.warning()),
        Span::styled(format!(" {}", board.text(revenue::SLOT_RISK_PCT)), theme.text()),
    ]));

    let label = board.text(revenue::SLOT_DECISION);
    let style = Decision::from_label(label)
        .map(|d| theme.decision_style(d))
        .unwrap_or_else(|| theme.muted());
    out.push(Line::from(vec![
        Span::styled(format!("    {:>22}: ", "Decision"), theme.muted()),
        Span::styled(format!(" {label} "), style),
    ]));
}

pub fn risk_body(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    let board = app.page.board();
    push_sliders(out, app, theme, ModuleId::Risk);
    out.blank();

    out.push(Line::from(vec![
        Span::styled(format!("    {:>22}: ", "Fraud probability"), theme.muted()),
        Span::styled(board.text(risk::SLOT_PROB).to_string(), theme.accent_bold()),
    ]));
    let alert = board.text(risk::SLOT_ALERT);
    let style = AlertState::from_label(alert)
        .map(|a| theme.alert_style(a))
        .unwrap_or_else(|| theme.muted());
    out.push(Line::from(vec![
        Span::styled(format!("    {:>22}: ", "Alert"), theme.muted()),
        Span::styled(alert.to_string(), style),
    ]));
    out.push(stat(theme, "Loss avoided", board.text(risk::SLOT_LOSS).to_string()));
    let curve = sparkline(&parse_path(board.text(risk::SLOT_PR_PATH)));
    out.push(Line::from(vec![
        Span::styled(format!("    {:>22}: ", "Precision–recall"), theme.muted()),
        Span::styled(curve, theme.accent()),
    ]));
}

pub fn architecture_body(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    let board = app.page.board();
    let labels: Vec<&str> = Scale::ALL.iter().map(|s| s.label()).collect();
    let active = Scale::ALL
        .iter()
        .position(|s| *s == app.page.scale())
        .unwrap_or(0);
    out.anchor(SCALE_ANCHOR);
    out.push(selector(theme, "Scale", &labels, active, app.focused() == Some(Focus::Scale)));
    out.blank();

    for stage in Stage::ALL {
        let slot = stage.slot();
        let accent = board
            .get(&slot)
            .and_then(|s| s.class.as_deref())
            .is_some_and(|c| c == architecture::ACCENT_CLASS);
        out.anchor(slot.as_str());
        out.push(Line::from(vec![
            Span::styled(format!("    {:>22}: ", stage.label()), theme.muted()),
            Span::styled(
                board.text(&slot).to_string(),
                if accent { theme.accent_bold() } else { theme.text() },
            ),
        ]));
    }
    // Ends the last layer's hover area.
    out.anchor(ARCH_METRICS_ANCHOR);
    out.blank();
    out.push(stat(theme, "Latency", board.text(architecture::SLOT_LATENCY).to_string()));
    out.push(stat(theme, "Cost", board.text(architecture::SLOT_COST).to_string()));
    out.push(stat(theme, "Reliability", board.text(architecture::SLOT_RELIABILITY).to_string()));
    out.push(stat(theme, "Complexity", board.text(architecture::SLOT_COMPLEXITY).to_string()));
}

pub fn optimization_body(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    push_sliders(out, app, theme, ModuleId::Optimization);
}
