//! Risk intelligence — alerting threshold estimator with a precision/recall curve.
//!
//! Sensitivity `s` and tolerance `t` are fractions of their 0–100 sliders.
//! Probability = clamp(round((0.3 + 0.5s - 0.2t) * 100), 5, 95); the alert
//! fires at 60 and above.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::controls::{RISK_SENSITIVITY, RISK_TOLERANCE};
use crate::display::DisplayBoard;
use crate::format::{format_currency, round_half_up};

use super::{ModuleId, SimulationContext, Simulator};

pub const ALERT_THRESHOLD: i64 = 60;
pub const CURVE_POINTS: usize = 21;

pub const SLOT_SENS_VAL: &str = "risk-sens-val";
pub const SLOT_TOL_VAL: &str = "risk-tol-val";
pub const SLOT_PROB: &str = "risk-prob";
pub const SLOT_ALERT: &str = "risk-alert";
pub const SLOT_LOSS: &str = "risk-loss";
pub const SLOT_PR_PATH: &str = "pr-path";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertState {
    Active,
    Inactive,
}

impl AlertState {
    pub fn from_probability(probability: i64) -> Self {
        if probability >= ALERT_THRESHOLD {
            AlertState::Active
        } else {
            AlertState::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == AlertState::Active
    }

    pub fn label(self) -> &'static str {
        match self {
            AlertState::Active => "ACTIVE",
            AlertState::Inactive => "INACTIVE",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            AlertState::Active => "risk-alert active",
            AlertState::Inactive => "risk-alert inactive",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ACTIVE" => Some(AlertState::Active),
            "INACTIVE" => Some(AlertState::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInputs {
    pub sensitivity_pct: f64,
    pub tolerance_pct: f64,
}

impl Default for RiskInputs {
    fn default() -> Self {
        Self {
            sensitivity_pct: 70.0,
            tolerance_pct: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSnapshot {
    /// Clamped to [5, 95].
    pub probability: i64,
    pub alert: AlertState,
    pub loss_avoided: f64,
    pub precision: f64,
    pub recall: f64,
    /// Precision/recall curve in a 200×120 view box.
    pub curve: Vec<(f64, f64)>,
}

impl RiskSnapshot {
    /// SVG path through the curve points: `M x,y L x,y ...`.
    pub fn curve_path(&self) -> String {
        let points: Vec<String> = self.curve.iter().map(|(x, y)| format!("{x},{y}")).collect();
        format!("M{}", points.join(" L"))
    }
}

/// Pure risk formula.
pub fn simulate(inputs: &RiskInputs) -> RiskSnapshot {
    let s = inputs.sensitivity_pct / 100.0;
    let t = inputs.tolerance_pct / 100.0;

    let raw = round_half_up((0.3 + s * 0.5 - t * 0.2) * 100.0) as i64;
    let probability = raw.clamp(5, 95);
    let loss_avoided = round_half_up(probability as f64 * 1200.0 * s);

    let precision = 0.5 + s * 0.4;
    let recall = 0.6 + s * 0.35 - t * 0.2;

    RiskSnapshot {
        probability,
        alert: AlertState::from_probability(probability),
        loss_avoided,
        precision,
        recall,
        curve: sample_curve(precision, recall),
    }
}

/// 21 evenly spaced points over t ∈ [0, 1].
pub fn sample_curve(precision: f64, recall: f64) -> Vec<(f64, f64)> {
    let last = (CURVE_POINTS - 1) as f64;
    (0..CURVE_POINTS)
        .map(|i| {
            let t = i as f64 / last;
            let x = 10.0 + t * 180.0;
            let y = 110.0 - (recall * 0.3 + precision * 0.5 * (t * PI).sin()) * 80.0;
            (x, y)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine;

impl Simulator for RiskEngine {
    type Inputs = RiskInputs;
    type Snapshot = RiskSnapshot;

    fn id(&self) -> ModuleId {
        ModuleId::Risk
    }

    fn slots(&self) -> Vec<String> {
        [
            SLOT_SENS_VAL,
            SLOT_TOL_VAL,
            SLOT_PROB,
            SLOT_ALERT,
            SLOT_LOSS,
            SLOT_PR_PATH,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn read_inputs(&self, ctx: &SimulationContext<'_>) -> RiskInputs {
        let d = RiskInputs::default();
        RiskInputs {
            sensitivity_pct: ctx.controls.value_or(RISK_SENSITIVITY, d.sensitivity_pct),
            tolerance_pct: ctx.controls.value_or(RISK_TOLERANCE, d.tolerance_pct),
        }
    }

    fn simulate(&self, inputs: &RiskInputs) -> RiskSnapshot {
        simulate(inputs)
    }

    fn render(&self, inputs: &RiskInputs, s: &RiskSnapshot, board: &mut DisplayBoard) {
        board.set_text(SLOT_SENS_VAL, format!("{}%", inputs.sensitivity_pct));
        board.set_text(SLOT_TOL_VAL, format!("{}%", inputs.tolerance_pct));
        board.set_text(SLOT_PROB, format!("{}%", s.probability));
        board.set_text(SLOT_ALERT, s.alert.label());
        board.set_class(SLOT_ALERT, s.alert.class());
        board.set_text(SLOT_LOSS, format_currency(s.loss_avoided));
        board.set_text(SLOT_PR_PATH, s.curve_path());
    }
}
