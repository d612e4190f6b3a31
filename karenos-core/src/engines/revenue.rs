//! Revenue intelligence — A/B experiment impact estimator.
//!
//! ```text
//! visitors     = traffic * 1000
//! baseline/day = visitors * conv% * ARPU          (ARPU = 100)
//! lift/day     = baseline/day * uplift%
//! revenue lift = lift/day * duration
//! n            = floor(visitors * 0.5 * duration)
//! significance = clamp(50 + sqrt(n) * uplift% * 10, 0, 99.9)
//! risk FP      = clamp(100 - significance * 0.9, 0.1, 15)
//! ```
//!
//! The significance/risk numbers are illustrative heuristics, not inference.

use serde::{Deserialize, Serialize};

use crate::controls::{REV_CONV, REV_DURATION, REV_TRAFFIC, REV_UPLIFT};
use crate::display::DisplayBoard;
use crate::format::{format_currency, format_currency_range, format_percent};

use super::{ModuleId, SimulationContext, Simulator};

/// Average revenue per converted visitor.
pub const ARPU: f64 = 100.0;

pub const SLOT_IMPACT: &str = "rev-impact";
pub const SLOT_CI_BAND: &str = "rev-ci-band";
pub const SLOT_CI_RANGE: &str = "rev-ci-range";
pub const SLOT_SIGNIFICANCE: &str = "rev-significance";
pub const SLOT_RISK_FILL: &str = "rev-risk-fill";
pub const SLOT_RISK_PCT: &str = "rev-risk-pct";
pub const SLOT_DECISION: &str = "rev-decision";
pub const SLOT_TRAFFIC_VAL: &str = "rev-traffic-val";
pub const SLOT_UPLIFT_VAL: &str = "rev-uplift-val";

/// Ship / stop / keep-testing verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Go,
    Kill,
    Iterate,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Go => "go",
            Decision::Kill => "kill",
            Decision::Iterate => "iterate",
        }
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            Decision::Go => "GO",
            Decision::Kill => "KILL",
            Decision::Iterate => "ITERATE",
        }
    }

    pub fn class(self) -> String {
        format!("decision-badge {}", self.as_str())
    }

    /// Inverse of `label`, for hosts styling a rendered badge.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "GO" => Some(Decision::Go),
            "KILL" => Some(Decision::Kill),
            "ITERATE" => Some(Decision::Iterate),
            _ => None,
        }
    }

    /// `go` needs strong significance, low risk and a meaningful uplift;
    /// weak significance or high risk is a `kill`; anything else iterates.
    pub fn decide(significance: f64, risk_fp: f64, uplift_pct: f64) -> Self {
        if significance >= 95.0 && risk_fp < 5.0 && uplift_pct >= 5.0 {
            Decision::Go
        } else if significance < 80.0 || risk_fp > 10.0 {
            Decision::Kill
        } else {
            Decision::Iterate
        }
    }
}

/// Audience segment selector. Changing it recomputes; the formula ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    #[default]
    All,
    New,
    Returning,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::All, Segment::New, Segment::Returning];

    pub fn label(self) -> &'static str {
        match self {
            Segment::All => "All users",
            Segment::New => "New users",
            Segment::Returning => "Returning users",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Segment::All => Segment::New,
            Segment::New => Segment::Returning,
            Segment::Returning => Segment::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueInputs {
    /// Monthly visitors, in thousands.
    pub traffic_k: f64,
    pub conversion_pct: f64,
    pub uplift_pct: f64,
    pub duration_days: f64,
    pub segment: Segment,
}

impl Default for RevenueInputs {
    fn default() -> Self {
        Self {
            traffic_k: 50.0,
            conversion_pct: 3.0,
            uplift_pct: 12.0,
            duration_days: 14.0,
            segment: Segment::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueSnapshot {
    pub daily_baseline: f64,
    pub daily_lift: f64,
    pub revenue_lift: f64,
    pub sample_size: f64,
    pub power: f64,
    pub significance: f64,
    pub risk_of_false_positive: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
    pub decision: Decision,
}

impl RevenueSnapshot {
    /// Gradient stops of the confidence band, in percent.
    pub fn ci_band(&self) -> (f64, f64) {
        (
            30.0 + self.significance * 0.4,
            70.0 - self.significance * 0.4,
        )
    }
}

/// Pure revenue formula.
pub fn simulate(inputs: &RevenueInputs) -> RevenueSnapshot {
    let visitors = inputs.traffic_k * 1000.0;
    let conv = inputs.conversion_pct / 100.0;
    let uplift = inputs.uplift_pct / 100.0;

    let daily_baseline = visitors * conv * ARPU;
    let daily_lift = daily_baseline * uplift;
    let revenue_lift = daily_lift * inputs.duration_days;

    let sample_size = (visitors * 0.5 * inputs.duration_days).floor().max(0.0);
    let power = sample_size.sqrt() * uplift * 10.0;
    let significance = (50.0 + power).clamp(0.0, 99.9);
    let risk_of_false_positive = (100.0 - significance * 0.9).clamp(0.1, 15.0);

    RevenueSnapshot {
        daily_baseline,
        daily_lift,
        revenue_lift,
        sample_size,
        power,
        significance,
        risk_of_false_positive,
        confidence_low: revenue_lift * 0.7,
        confidence_high: revenue_lift * 1.3,
        decision: Decision::decide(significance, risk_of_false_positive, inputs.uplift_pct),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RevenueEngine;

impl Simulator for RevenueEngine {
    type Inputs = RevenueInputs;
    type Snapshot = RevenueSnapshot;

    fn id(&self) -> ModuleId {
        ModuleId::Revenue
    }

    fn slots(&self) -> Vec<String> {
        [
            SLOT_IMPACT,
            SLOT_CI_BAND,
            SLOT_CI_RANGE,
            SLOT_SIGNIFICANCE,
            SLOT_RISK_FILL,
            SLOT_RISK_PCT,
            SLOT_DECISION,
            SLOT_TRAFFIC_VAL,
            SLOT_UPLIFT_VAL,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn read_inputs(&self, ctx: &SimulationContext<'_>) -> RevenueInputs {
        let d = RevenueInputs::default();
        RevenueInputs {
            traffic_k: ctx.controls.value_or(REV_TRAFFIC, d.traffic_k),
            conversion_pct: ctx.controls.value_or(REV_CONV, d.conversion_pct),
            uplift_pct: ctx.controls.value_or(REV_UPLIFT, d.uplift_pct),
            duration_days: ctx.controls.value_or(REV_DURATION, d.duration_days),
            segment: ctx.segment,
        }
    }

    fn simulate(&self, inputs: &RevenueInputs) -> RevenueSnapshot {
        simulate(inputs)
    }

    fn render(&self, inputs: &RevenueInputs, s: &RevenueSnapshot, board: &mut DisplayBoard) {
        board.set_text(SLOT_IMPACT, format_currency(s.revenue_lift));
        let (start, end) = s.ci_band();
        board.set_band(SLOT_CI_BAND, start, end);
        board.set_text(
            SLOT_CI_RANGE,
            format_currency_range(s.confidence_low, s.confidence_high),
        );
        board.set_text(SLOT_SIGNIFICANCE, format_percent(s.significance));
        board.set_fill(SLOT_RISK_FILL, s.risk_of_false_positive);
        board.set_text(SLOT_RISK_PCT, format_percent(s.risk_of_false_positive));
        board.set_text(SLOT_DECISION, s.decision.label());
        board.set_class(SLOT_DECISION, s.decision.class());
        board.set_text(SLOT_TRAFFIC_VAL, format!("{}K", inputs.traffic_k));
        board.set_text(SLOT_UPLIFT_VAL, format!("{}%", inputs.uplift_pct));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn default_scenario_is_killed_by_false_positive_risk() {
        let s = simulate(&RevenueInputs::default());
        assert_approx(s.daily_baseline, 150_000.0);
        assert_approx(s.daily_lift, 18_000.0);
        assert_approx(s.revenue_lift, 252_000.0);
        assert_eq!(s.sample_size, 350_000.0);
        assert!((s.power - 709.93).abs() < 0.01);
        assert_eq!(s.significance, 99.9);
        assert!((s.risk_of_false_positive - 10.09).abs() < 1e-9);
        assert_eq!(s.decision, Decision::Kill);
        assert_eq!(format_currency(s.revenue_lift), "$252.0K");
    }

    #[test]
    fn zero_traffic_clamps_risk() {
        let s = simulate(&RevenueInputs {
            traffic_k: 0.0,
            ..RevenueInputs::default()
        });
        assert_eq!(s.sample_size, 0.0);
        assert_eq!(s.significance, 50.0);
        assert_eq!(s.risk_of_false_positive, 15.0);
        assert_eq!(s.decision, Decision::Kill);
    }

    #[test]
    fn decision_rules() {
        assert_eq!(Decision::decide(96.0, 4.0, 5.0), Decision::Go);
        assert_eq!(Decision::decide(96.0, 4.0, 4.0), Decision::Iterate);
        assert_eq!(Decision::decide(79.9, 4.0, 10.0), Decision::Kill);
        assert_eq!(Decision::decide(90.0, 10.5, 10.0), Decision::Kill);
        assert_eq!(Decision::decide(90.0, 10.0, 10.0), Decision::Iterate);
        assert_eq!(Decision::decide(95.0, 5.0, 10.0), Decision::Iterate);
    }

    #[test]
    fn badge_label_parses_back() {
        for d in [Decision::Go, Decision::Kill, Decision::Iterate] {
            assert_eq!(Decision::from_label(d.label()), Some(d));
        }
        assert_eq!(Decision::from_label(""), None);
    }

    #[test]
    fn go_is_unreachable_with_clamped_significance() {
        // significance <= 99.9 keeps risk >= 10.09, so `go` never fires from the formula.
        let s = simulate(&RevenueInputs {
            traffic_k: 500.0,
            conversion_pct: 10.0,
            uplift_pct: 50.0,
            duration_days: 28.0,
            segment: Segment::New,
        });
        assert!(s.risk_of_false_positive > 10.0);
        assert_ne!(s.decision, Decision::Go);
    }

    #[test]
    fn render_writes_all_slots() {
        let engine = RevenueEngine;
        let mut board = DisplayBoard::with_slots(engine.slots());
        let inputs = RevenueInputs::default();
        let s = engine.simulate(&inputs);
        engine.render(&inputs, &s, &mut board);

        assert_eq!(board.text(SLOT_IMPACT), "$252.0K");
        assert_eq!(board.text(SLOT_CI_RANGE), "$176400 – $327600");
        assert_eq!(board.text(SLOT_SIGNIFICANCE), "99.9%");
        assert_eq!(board.text(SLOT_RISK_PCT), "10.1%");
        assert_eq!(board.text(SLOT_DECISION), "KILL");
        assert_eq!(
            board.get(SLOT_DECISION).unwrap().class.as_deref(),
            Some("decision-badge kill")
        );
        assert_eq!(board.text(SLOT_TRAFFIC_VAL), "50K");
        assert_eq!(board.text(SLOT_UPLIFT_VAL), "12%");
        let fill = board.get(SLOT_RISK_FILL).unwrap().fill_pct.unwrap();
        assert!((fill - 10.09).abs() < 1e-9);
        let (start, end) = board.get(SLOT_CI_BAND).unwrap().band.unwrap();
        assert!((start - 69.96).abs() < 1e-9);
        assert!((end - 30.04).abs() < 1e-9);
    }

    #[test]
    fn segment_does_not_change_numbers() {
        let a = simulate(&RevenueInputs::default());
        let b = simulate(&RevenueInputs {
            segment: Segment::Returning,
            ..RevenueInputs::default()
        });
        assert_eq!(a, b);
    }

    #[test]
    fn small_lift_renders_whole_dollars() {
        let s = simulate(&RevenueInputs {
            traffic_k: 1.0,
            conversion_pct: 0.5,
            uplift_pct: 1.0,
            duration_days: 7.0,
            segment: Segment::All,
        });
        // 1000 * 0.005 * 100 * 0.01 * 7 = 35
        assert_approx(s.revenue_lift, 35.0);
        assert_eq!(format_currency(s.revenue_lift), "$35");
    }
}
