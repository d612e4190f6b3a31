//! Product optimization sliders — display-only echo of three sliders.

use serde::{Deserialize, Serialize};

use crate::controls::{OPT_CONV, OPT_EFFICIENCY, OPT_REVENUE};
use crate::display::DisplayBoard;
use crate::format::format_millions;

use super::{ModuleId, SimulationContext, Simulator};

pub const SLOT_CONV: &str = "conv-value";
pub const SLOT_REVENUE: &str = "revenue-value";
pub const SLOT_EFFICIENCY: &str = "efficiency-value";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationInputs {
    pub conversion_pct: f64,
    /// Revenue impact in millions.
    pub revenue_m: f64,
    pub efficiency_pct: f64,
}

impl Default for OptimizationInputs {
    fn default() -> Self {
        Self {
            conversion_pct: 18.0,
            revenue_m: 2.4,
            efficiency_pct: 35.0,
        }
    }
}

/// Formatted slider readouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationReadout {
    pub conversion: String,
    pub revenue: String,
    pub efficiency: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizationEngine;

impl Simulator for OptimizationEngine {
    type Inputs = OptimizationInputs;
    type Snapshot = OptimizationReadout;

    fn id(&self) -> ModuleId {
        ModuleId::Optimization
    }

    fn slots(&self) -> Vec<String> {
        vec![
            SLOT_CONV.to_string(),
            SLOT_REVENUE.to_string(),
            SLOT_EFFICIENCY.to_string(),
        ]
    }

    fn read_inputs(&self, ctx: &SimulationContext<'_>) -> OptimizationInputs {
        let d = OptimizationInputs::default();
        OptimizationInputs {
            conversion_pct: ctx.controls.value_or(OPT_CONV, d.conversion_pct),
            revenue_m: ctx.controls.value_or(OPT_REVENUE, d.revenue_m),
            efficiency_pct: ctx.controls.value_or(OPT_EFFICIENCY, d.efficiency_pct),
        }
    }

    fn simulate(&self, inputs: &OptimizationInputs) -> OptimizationReadout {
        OptimizationReadout {
            conversion: format!("{}%", inputs.conversion_pct),
            revenue: format_millions(inputs.revenue_m),
            efficiency: format!("{}%", inputs.efficiency_pct),
        }
    }

    fn render(&self, _inputs: &OptimizationInputs, r: &OptimizationReadout, board: &mut DisplayBoard) {
        board.set_text(SLOT_CONV, r.conversion.as_str());
        board.set_text(SLOT_REVENUE, r.revenue.as_str());
        board.set_text(SLOT_EFFICIENCY, r.efficiency.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readouts_follow_slider_units() {
        let r = OptimizationEngine.simulate(&OptimizationInputs::default());
        assert_eq!(r.conversion, "18%");
        assert_eq!(r.revenue, "$2.4M");
        assert_eq!(r.efficiency, "35%");

        let small = OptimizationEngine.simulate(&OptimizationInputs {
            revenue_m: 0.5,
            ..OptimizationInputs::default()
        });
        assert_eq!(small.revenue, "$500K");
    }
}
