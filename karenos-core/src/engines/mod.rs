//! Simulation engines — the "what-if" calculators behind the module blocks.
//!
//! Every engine follows the same three steps on each recompute:
//! 1. read its inputs from the current controls/selectors,
//! 2. compute a snapshot with a pure formula,
//! 3. render the snapshot into display slots.
//!
//! Snapshots are never stored between recomputes.

pub mod architecture;
pub mod optimization;
pub mod revenue;
pub mod risk;

use serde::{Deserialize, Serialize};

use crate::controls::ControlSet;
use crate::display::DisplayBoard;

pub use architecture::{ArchProfile, ArchitectureEngine, Scale, ScaleSelector, Stage};
pub use optimization::{OptimizationEngine, OptimizationInputs};
pub use revenue::{Decision, RevenueEngine, RevenueInputs, RevenueSnapshot, Segment};
pub use risk::{AlertState, RiskEngine, RiskInputs, RiskSnapshot};

/// Logical identity of a simulator (also the recompute hook a module panel carries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    Revenue,
    Risk,
    #[serde(alias = "arch")]
    Architecture,
    Optimization,
}

impl ModuleId {
    pub fn label(self) -> &'static str {
        match self {
            ModuleId::Revenue => "Revenue Intelligence",
            ModuleId::Risk => "Risk Intelligence",
            ModuleId::Architecture => "Architecture Simulator",
            ModuleId::Optimization => "Product Optimization",
        }
    }
}

/// Everything an engine may read when recomputing.
#[derive(Debug, Clone, Copy)]
pub struct SimulationContext<'a> {
    pub controls: &'a ControlSet,
    pub segment: Segment,
    pub scale: Scale,
}

/// A deterministic calculator from inputs to a rendered snapshot.
pub trait Simulator {
    type Inputs;
    type Snapshot;

    fn id(&self) -> ModuleId;

    /// Display slots this engine writes.
    fn slots(&self) -> Vec<String>;

    fn read_inputs(&self, ctx: &SimulationContext<'_>) -> Self::Inputs;

    fn simulate(&self, inputs: &Self::Inputs) -> Self::Snapshot;

    fn render(&self, inputs: &Self::Inputs, snapshot: &Self::Snapshot, board: &mut DisplayBoard);

    /// Read, compute, render. Returns the snapshot for callers that want it.
    fn recompute(&self, ctx: &SimulationContext<'_>, board: &mut DisplayBoard) -> Self::Snapshot {
        let inputs = self.read_inputs(ctx);
        let snapshot = self.simulate(&inputs);
        self.render(&inputs, &snapshot, board);
        snapshot
    }
}

/// Recompute one module by id.
pub fn recompute(module: ModuleId, ctx: &SimulationContext<'_>, board: &mut DisplayBoard) {
    tracing::trace!(?module, "recompute");
    match module {
        ModuleId::Revenue => {
            RevenueEngine.recompute(ctx, board);
        }
        ModuleId::Risk => {
            RiskEngine.recompute(ctx, board);
        }
        ModuleId::Architecture => {
            ArchitectureEngine.recompute(ctx, board);
        }
        ModuleId::Optimization => {
            OptimizationEngine.recompute(ctx, board);
        }
    }
}

/// Every slot written by any engine.
pub fn all_slots() -> Vec<String> {
    let mut slots = RevenueEngine.slots();
    slots.extend(RiskEngine.slots());
    slots.extend(ArchitectureEngine.slots());
    slots.extend(OptimizationEngine.slots());
    slots
}
