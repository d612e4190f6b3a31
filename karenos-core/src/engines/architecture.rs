//! Architecture scale comparator — discrete lookup over three fixed profiles.
//!
//! No interpolation: the active scale picks one profile and every stage label
//! and summary metric comes from that profile alone.

use serde::{Deserialize, Serialize};

use crate::display::DisplayBoard;

use super::{ModuleId, SimulationContext, Simulator};

pub const SLOT_LATENCY: &str = "arch-latency";
pub const SLOT_COST: &str = "arch-cost";
pub const SLOT_RELIABILITY: &str = "arch-reliability";
pub const SLOT_COMPLEXITY: &str = "arch-complexity";

/// Class carried by the emphasised stage.
pub const ACCENT_CLASS: &str = "accent";

/// Operating scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Startup,
    Growth,
    Enterprise,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Startup, Scale::Growth, Scale::Enterprise];

    pub fn label(self) -> &'static str {
        match self {
            Scale::Startup => "Startup",
            Scale::Growth => "Growth",
            Scale::Enterprise => "Enterprise",
        }
    }

    /// Parse a button's data value; unknown values are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "startup" | "small" => Some(Scale::Startup),
            "growth" | "medium" => Some(Scale::Growth),
            "enterprise" | "large" => Some(Scale::Enterprise),
            _ => None,
        }
    }

    pub fn profile(self) -> &'static ArchProfile {
        match self {
            Scale::Startup => &STARTUP,
            Scale::Growth => &GROWTH,
            Scale::Enterprise => &ENTERPRISE,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Scale::Startup => Scale::Growth,
            Scale::Growth => Scale::Enterprise,
            Scale::Enterprise => Scale::Startup,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Scale::Startup => Scale::Enterprise,
            Scale::Growth => Scale::Startup,
            Scale::Enterprise => Scale::Growth,
        }
    }
}

/// Pipeline stage, in diagram order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Storage,
    Processing,
    Modeling,
    Deployment,
    Monitoring,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Storage,
        Stage::Processing,
        Stage::Modeling,
        Stage::Deployment,
        Stage::Monitoring,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Storage => "Storage",
            Stage::Processing => "Processing",
            Stage::Modeling => "Modeling",
            Stage::Deployment => "Deployment",
            Stage::Monitoring => "Monitoring",
        }
    }

    /// Hover text of the stage's layer in the diagram.
    pub fn tooltip(self) -> &'static str {
        match self {
            Stage::Storage => "Where raw and modeled data lives, sized to the query load.",
            Stage::Processing => "Transforms that turn raw events into clean tables and features.",
            Stage::Modeling => "How models are trained and refreshed as new data lands.",
            Stage::Deployment => "How a trained model reaches production traffic.",
            Stage::Monitoring => "Health, drift and cost signals watched after release.",
        }
    }

    /// Stage whose layer slot is `slot`.
    pub fn from_slot(slot: &str) -> Option<Self> {
        Stage::ALL.into_iter().find(|s| s.slot() == slot)
    }

    /// Monitoring is highlighted under every profile.
    pub fn is_accent(self) -> bool {
        self == Stage::Monitoring
    }

    /// Display slot of the stage's layer in the diagram.
    pub fn slot(self) -> String {
        let index = Stage::ALL.iter().position(|s| *s == self).unwrap_or(0);
        format!("arch-layer-{index}")
    }
}

/// One scale's fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchProfile {
    pub storage: &'static str,
    pub processing: &'static str,
    pub modeling: &'static str,
    pub deployment: &'static str,
    pub monitoring: &'static str,
    pub latency: &'static str,
    pub cost: &'static str,
    pub reliability: &'static str,
    pub complexity: &'static str,
}

impl ArchProfile {
    pub fn stage(&self, stage: Stage) -> &'static str {
        match stage {
            Stage::Storage => self.storage,
            Stage::Processing => self.processing,
            Stage::Modeling => self.modeling,
            Stage::Deployment => self.deployment,
            Stage::Monitoring => self.monitoring,
        }
    }
}

const STARTUP: ArchProfile = ArchProfile {
    storage: "Postgres",
    processing: "Python ETL",
    modeling: "Batch Retraining",
    deployment: "Simple Cron",
    monitoring: "Basic Logs",
    latency: "2–4 hrs",
    cost: "$500/mo",
    reliability: "92%",
    complexity: "Low",
};

const GROWTH: ArchProfile = ArchProfile {
    storage: "Snowflake",
    processing: "dbt + Airflow",
    modeling: "ML Pipeline",
    deployment: "CI/CD",
    monitoring: "Metrics + Alerts",
    latency: "15–60 min",
    cost: "$8K/mo",
    reliability: "97%",
    complexity: "Medium",
};

const ENTERPRISE: ArchProfile = ArchProfile {
    storage: "Kafka + Data Lake",
    processing: "Spark + Feature Store",
    modeling: "Real-time Inference",
    deployment: "K8s + Observability",
    monitoring: "Full Observability",
    latency: "< 100ms",
    cost: "$45K/mo",
    reliability: "99.9%",
    complexity: "High",
};

/// Three-way exclusive button group. Exactly one scale is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaleSelector {
    active: Scale,
}

impl ScaleSelector {
    pub fn new(active: Scale) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Scale {
        self.active
    }

    pub fn is_active(&self, scale: Scale) -> bool {
        self.active == scale
    }

    /// Activate `scale`, deactivating the others. Returns true when it changed.
    pub fn select(&mut self, scale: Scale) -> bool {
        let changed = self.active != scale;
        self.active = scale;
        changed
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArchitectureEngine;

impl Simulator for ArchitectureEngine {
    type Inputs = Scale;
    type Snapshot = &'static ArchProfile;

    fn id(&self) -> ModuleId {
        ModuleId::Architecture
    }

    fn slots(&self) -> Vec<String> {
        let mut slots: Vec<String> = Stage::ALL.iter().map(|s| s.slot()).collect();
        slots.extend(
            [SLOT_LATENCY, SLOT_COST, SLOT_RELIABILITY, SLOT_COMPLEXITY]
                .iter()
                .map(|s| s.to_string()),
        );
        slots
    }

    fn read_inputs(&self, ctx: &SimulationContext<'_>) -> Scale {
        ctx.scale
    }

    fn simulate(&self, scale: &Scale) -> &'static ArchProfile {
        scale.profile()
    }

    fn render(&self, _scale: &Scale, profile: &&'static ArchProfile, board: &mut DisplayBoard) {
        for stage in Stage::ALL {
            let slot = stage.slot();
            board.set_text(&slot, profile.stage(stage));
            if stage.is_accent() {
                board.set_class(&slot, ACCENT_CLASS);
            } else {
                board.clear_class(&slot);
            }
        }
        board.set_text(SLOT_LATENCY, profile.latency);
        board.set_text(SLOT_COST, profile.cost);
        board.set_text(SLOT_RELIABILITY, profile.reliability);
        board.set_text(SLOT_COMPLEXITY, profile.complexity);
    }
}
