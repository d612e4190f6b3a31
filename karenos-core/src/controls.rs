//! Controls — named numeric inputs (sliders and selects) feeding the simulators.
//!
//! A control owns its current value and nothing else; simulators read the
//! value at recompute time. Raw input goes through [`Control::set_raw`], which
//! falls back to the control's documented default when the text is not a
//! number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engines::ModuleId;

// ─── Names ───────────────────────────────────────────────────────────

pub const REV_TRAFFIC: &str = "rev-traffic";
pub const REV_CONV: &str = "rev-conv";
pub const REV_UPLIFT: &str = "rev-uplift";
pub const REV_DURATION: &str = "rev-duration";
pub const RISK_SENSITIVITY: &str = "risk-sensitivity";
pub const RISK_TOLERANCE: &str = "risk-tolerance";
pub const OPT_CONV: &str = "conv-slider";
pub const OPT_REVENUE: &str = "revenue-slider";
pub const OPT_EFFICIENCY: &str = "efficiency-slider";

/// How raw text is parsed into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Leading integer part only (`"12.7"` reads as 12).
    Integer,
    Decimal,
}

/// Which event recomputes the owner: continuous drag or discrete change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    Input,
    Change,
}

/// Static description of a control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSpec {
    pub name: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub kind: ValueKind,
    pub trigger: Trigger,
    pub owner: ModuleId,
}

impl ControlSpec {
    #[allow(clippy::too_many_arguments)]
    fn new(
        name: &str,
        label: &str,
        (min, max, step): (f64, f64, f64),
        default: f64,
        kind: ValueKind,
        trigger: Trigger,
        owner: ModuleId,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            min,
            max,
            step,
            default,
            kind,
            trigger,
            owner,
        }
    }
}

/// A control and its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub spec: ControlSpec,
    value: f64,
}

impl Control {
    pub fn new(spec: ControlSpec) -> Self {
        let value = spec.default;
        Self { spec, value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set from a number, clamped to the range and snapped to the step grid.
    pub fn set(&mut self, value: f64) {
        if !value.is_finite() {
            self.value = self.spec.default;
            return;
        }
        let clamped = value.clamp(self.spec.min, self.spec.max);
        self.value = self.snap(clamped);
    }

    /// Set from raw text. Unparseable or empty text means the default.
    pub fn set_raw(&mut self, raw: &str) {
        match parse_value(raw, self.spec.kind) {
            Some(v) => self.set(v),
            None => {
                tracing::debug!(control = %self.spec.name, raw, "unparseable control value, using default");
                self.value = self.spec.default;
            }
        }
    }

    /// Move by a whole number of steps (keyboard adjustment).
    pub fn nudge(&mut self, steps: i32) {
        self.set(self.value + f64::from(steps) * self.spec.step);
    }

    /// Position within the range as a fraction in [0, 1].
    pub fn fraction(&self) -> f64 {
        let span = self.spec.max - self.spec.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.spec.min) / span).clamp(0.0, 1.0)
    }

    fn snap(&self, value: f64) -> f64 {
        if self.spec.step <= 0.0 {
            return value;
        }
        let steps = ((value - self.spec.min) / self.spec.step).round();
        let snapped = self.spec.min + steps * self.spec.step;
        // Trim float noise from decimal steps (0.1 * 29 = 2.9000000000000004).
        let snapped = (snapped * 1e9).round() / 1e9;
        snapped.clamp(self.spec.min, self.spec.max)
    }
}

/// Parse raw control text the way a range input reports it.
///
/// Integer controls keep only the leading integer part; decimal controls
/// accept any float. Empty or non-numeric text yields `None`.
pub fn parse_value(raw: &str, kind: ValueKind) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(match kind {
        ValueKind::Integer => parsed.trunc(),
        ValueKind::Decimal => parsed,
    })
}

/// Registry of every control on the page, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    controls: BTreeMap<String, Control>,
}

impl ControlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every control the simulators and optimization sliders read.
    pub fn page_defaults() -> Self {
        use Trigger::{Change, Input};
        use ValueKind::{Decimal, Integer};

        let specs = [
            ControlSpec::new(REV_TRAFFIC, "Traffic (K/mo)", (1.0, 500.0, 1.0), 50.0, Integer, Input, ModuleId::Revenue),
            ControlSpec::new(REV_CONV, "Baseline conv.", (0.5, 10.0, 0.1), 3.0, Decimal, Input, ModuleId::Revenue),
            ControlSpec::new(REV_UPLIFT, "Uplift", (1.0, 50.0, 1.0), 12.0, Integer, Input, ModuleId::Revenue),
            ControlSpec::new(REV_DURATION, "Duration (days)", (7.0, 28.0, 7.0), 14.0, Integer, Change, ModuleId::Revenue),
            ControlSpec::new(RISK_SENSITIVITY, "Sensitivity", (0.0, 100.0, 1.0), 70.0, Integer, Input, ModuleId::Risk),
            ControlSpec::new(RISK_TOLERANCE, "Tolerance", (0.0, 100.0, 1.0), 30.0, Integer, Input, ModuleId::Risk),
            ControlSpec::new(OPT_CONV, "Conversion lift", (0.0, 50.0, 1.0), 18.0, Integer, Input, ModuleId::Optimization),
            ControlSpec::new(OPT_REVENUE, "Revenue impact", (0.1, 10.0, 0.1), 2.4, Decimal, Input, ModuleId::Optimization),
            ControlSpec::new(OPT_EFFICIENCY, "Efficiency gain", (0.0, 100.0, 1.0), 35.0, Integer, Input, ModuleId::Optimization),
        ];

        let mut set = Self::new();
        for spec in specs {
            set.insert(Control::new(spec));
        }
        set
    }

    pub fn insert(&mut self, control: Control) {
        self.controls.insert(control.spec.name.clone(), control);
    }

    pub fn get(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls.get_mut(name)
    }

    /// Current value, or `fallback` when the control is not registered.
    pub fn value_or(&self, name: &str, fallback: f64) -> f64 {
        self.get(name).map(Control::value).unwrap_or(fallback)
    }

    /// Controls owned by one simulator, in name order.
    pub fn owned_by(&self, owner: ModuleId) -> impl Iterator<Item = &Control> {
        self.controls.values().filter(move |c| c.spec.owner == owner)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traffic() -> Control {
        ControlSet::page_defaults().get(REV_TRAFFIC).cloned().unwrap()
    }

    #[test]
    fn defaults_match_documented_values() {
        let set = ControlSet::page_defaults();
        assert_eq!(set.value_or(REV_TRAFFIC, 0.0), 50.0);
        assert_eq!(set.value_or(REV_CONV, 0.0), 3.0);
        assert_eq!(set.value_or(REV_UPLIFT, 0.0), 12.0);
        assert_eq!(set.value_or(REV_DURATION, 0.0), 14.0);
        assert_eq!(set.value_or(RISK_SENSITIVITY, 0.0), 70.0);
        assert_eq!(set.value_or(RISK_TOLERANCE, 0.0), 30.0);
    }

    #[test]
    fn malformed_input_falls_back_to_default() {
        let mut c = traffic();
        c.set(200.0);
        c.set_raw("lots");
        assert_eq!(c.value(), 50.0);
        c.set(200.0);
        c.set_raw("");
        assert_eq!(c.value(), 50.0);
    }

    #[test]
    fn integer_controls_truncate() {
        let mut c = traffic();
        c.set_raw("120.9");
        assert_eq!(c.value(), 120.0);
    }

    #[test]
    fn set_clamps_to_range() {
        let mut c = traffic();
        c.set(10_000.0);
        assert_eq!(c.value(), 500.0);
        c.set(-3.0);
        assert_eq!(c.value(), 1.0);
        c.set(f64::NAN);
        assert_eq!(c.value(), 50.0);
    }

    #[test]
    fn decimal_steps_snap_cleanly() {
        let mut set = ControlSet::page_defaults();
        let conv = set.get_mut(REV_CONV).unwrap();
        conv.set_raw("2.93");
        assert_eq!(conv.value(), 2.9);
        conv.nudge(1);
        assert_eq!(conv.value(), 3.0);
    }

    #[test]
    fn duration_moves_in_weeks() {
        let mut set = ControlSet::page_defaults();
        let d = set.get_mut(REV_DURATION).unwrap();
        d.nudge(1);
        assert_eq!(d.value(), 21.0);
        d.nudge(5);
        assert_eq!(d.value(), 28.0);
        d.nudge(-10);
        assert_eq!(d.value(), 7.0);
    }

    #[test]
    fn missing_control_uses_fallback() {
        let set = ControlSet::new();
        assert_eq!(set.value_or(REV_TRAFFIC, 50.0), 50.0);
        assert!(set.is_empty());
    }

    #[test]
    fn owned_by_filters_per_module() {
        let set = ControlSet::page_defaults();
        let risk: Vec<&str> = set
            .owned_by(ModuleId::Risk)
            .map(|c| c.spec.name.as_str())
            .collect();
        assert_eq!(risk, vec![RISK_SENSITIVITY, RISK_TOLERANCE]);
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn fraction_spans_range() {
        let mut c = traffic();
        c.set(1.0);
        assert_eq!(c.fraction(), 0.0);
        c.set(500.0);
        assert_eq!(c.fraction(), 1.0);
    }
}
