//! KarenOS CLI — run the page's simulators without the page.
//!
//! Commands:
//! - `revenue` — A/B experiment impact for a traffic/conversion/uplift scenario
//! - `risk` — fraud probability and alert state for a sensitivity/tolerance pair
//! - `arch` — the architecture profile of one operating scale
//! - `optimize` — formatted readouts of the three optimization sliders
//! - `config` — print the effective configuration as TOML

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use karenos_core::controls::{
    ControlSet, OPT_CONV, OPT_EFFICIENCY, OPT_REVENUE, REV_CONV, REV_DURATION, REV_TRAFFIC,
    REV_UPLIFT, RISK_SENSITIVITY, RISK_TOLERANCE,
};
use karenos_core::display::DisplayBoard;
use karenos_core::engines::{
    ArchitectureEngine, ModuleId, OptimizationEngine, RevenueEngine, RiskEngine, Scale,
    Segment, SimulationContext, Simulator,
};
use karenos_core::KarenConfig;

#[derive(Parser)]
#[command(
    name = "karenos",
    about = "KarenOS CLI — what-if simulators from the portfolio page"
)]
struct Cli {
    /// Config file. Defaults to <config dir>/karenos/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the revenue impact of an A/B experiment.
    Revenue {
        /// Monthly visitors, in thousands (1–500).
        #[arg(long, default_value_t = 50.0)]
        traffic: f64,

        /// Baseline conversion rate in percent (0.5–10).
        #[arg(long, default_value_t = 3.0)]
        conv: f64,

        /// Expected uplift in percent (1–50).
        #[arg(long, default_value_t = 12.0)]
        uplift: f64,

        /// Experiment duration in days (7–28, weekly steps).
        #[arg(long, default_value_t = 14.0)]
        duration: f64,

        /// Audience segment.
        #[arg(long, value_enum, default_value_t = SegmentArg::All)]
        segment: SegmentArg,

        /// Print the raw snapshot as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Estimate fraud probability and alert state.
    Risk {
        /// Model sensitivity in percent (0–100).
        #[arg(long, default_value_t = 70.0)]
        sensitivity: f64,

        /// False-positive tolerance in percent (0–100).
        #[arg(long, default_value_t = 30.0)]
        tolerance: f64,

        /// Print the raw snapshot as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the architecture profile for an operating scale.
    Arch {
        #[arg(long, value_enum, default_value_t = ScaleArg::Startup)]
        scale: ScaleArg,

        /// Print the raw profile as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Format the product optimization slider readouts.
    Optimize {
        /// Conversion lift in percent (0–50).
        #[arg(long, default_value_t = 18.0)]
        conv: f64,

        /// Revenue impact in millions (0.1–10).
        #[arg(long, default_value_t = 2.4)]
        revenue: f64,

        /// Efficiency gain in percent (0–100).
        #[arg(long, default_value_t = 35.0)]
        efficiency: f64,

        /// Print the readouts as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the effective configuration as TOML.
    Config {
        /// Only print the config file path that would be used.
        #[arg(long, default_value_t = false)]
        path: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SegmentArg {
    All,
    New,
    Returning,
}

impl From<SegmentArg> for Segment {
    fn from(arg: SegmentArg) -> Self {
        match arg {
            SegmentArg::All => Segment::All,
            SegmentArg::New => Segment::New,
            SegmentArg::Returning => Segment::Returning,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScaleArg {
    Startup,
    Growth,
    Enterprise,
}

impl From<ScaleArg> for Scale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Startup => Scale::Startup,
            ScaleArg::Growth => Scale::Growth,
            ScaleArg::Enterprise => Scale::Enterprise,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config);

    match cli.command {
        Commands::Revenue {
            traffic,
            conv,
            uplift,
            duration,
            segment,
            json,
        } => {
            let controls = controls_with(&[
                (REV_TRAFFIC, traffic),
                (REV_CONV, conv),
                (REV_UPLIFT, uplift),
                (REV_DURATION, duration),
            ]);
            run_engine(&RevenueEngine, &controls, segment.into(), Scale::default(), json)
        }
        Commands::Risk {
            sensitivity,
            tolerance,
            json,
        } => {
            let controls =
                controls_with(&[(RISK_SENSITIVITY, sensitivity), (RISK_TOLERANCE, tolerance)]);
            run_engine(&RiskEngine, &controls, Segment::default(), Scale::default(), json)
        }
        Commands::Arch { scale, json } => {
            let controls = ControlSet::page_defaults();
            run_engine(&ArchitectureEngine, &controls, Segment::default(), scale.into(), json)
        }
        Commands::Optimize {
            conv,
            revenue,
            efficiency,
            json,
        } => {
            let controls = controls_with(&[
                (OPT_CONV, conv),
                (OPT_REVENUE, revenue),
                (OPT_EFFICIENCY, efficiency),
            ]);
            run_engine(&OptimizationEngine, &controls, Segment::default(), Scale::default(), json)
        }
        Commands::Config { path } => run_config(config_path, path),
    }
}

/// `RUST_LOG` when set and valid, else `info`.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Explicit path, else the per-user config file when it exists.
fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        dirs::config_dir()
            .map(|d| d.join("karenos").join("config.toml"))
            .filter(|p| p.exists())
    })
}

/// Page-default controls with the given values applied (clamped and snapped).
fn controls_with(values: &[(&str, f64)]) -> ControlSet {
    let mut controls = ControlSet::page_defaults();
    for &(name, value) in values {
        if let Some(control) = controls.get_mut(name) {
            control.set(value);
            if control.value() != value {
                tracing::warn!(
                    control = name,
                    requested = value,
                    used = control.value(),
                    "value adjusted to control range"
                );
            }
        }
    }
    controls
}

fn run_engine<E>(
    engine: &E,
    controls: &ControlSet,
    segment: Segment,
    scale: Scale,
    json: bool,
) -> Result<()>
where
    E: Simulator,
    E::Snapshot: Serialize,
{
    let ctx = SimulationContext {
        controls,
        segment,
        scale,
    };
    let mut board = DisplayBoard::with_slots(engine.slots());
    let snapshot = engine.recompute(&ctx, &mut board);

    if json {
        let out = serde_json::to_string_pretty(&snapshot).context("failed to serialize snapshot")?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", engine.id().label());
    println!("{}", "-".repeat(48));
    for control in controls.owned_by(engine.id()) {
        println!("  {:<20} {}", control.spec.label, control.value());
    }
    if engine.id() == ModuleId::Architecture {
        println!("  {:<20} {}", "Scale", scale.label());
    }
    println!();
    for slot in engine.slots() {
        let text = board.text(&slot);
        if !text.is_empty() {
            println!("  {slot:<20} {text}");
        }
    }
    Ok(())
}

fn run_config(config_path: Option<PathBuf>, path_only: bool) -> Result<()> {
    if path_only {
        match &config_path {
            Some(p) => println!("{}", p.display()),
            None => println!("(defaults, no config file)"),
        }
        return Ok(());
    }
    let config = KarenConfig::load_or_default(config_path.as_deref())?;
    print!("{}", config.to_toml().context("failed to render config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use karenos_core::engines::{revenue, Decision};

    #[test]
    fn rust_log_overrides_the_default_filter() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter().to_string(), "info");
        std::env::set_var("RUST_LOG", "karenos_core=debug");
        assert_eq!(log_filter().to_string(), "karenos_core=debug");
        std::env::remove_var("RUST_LOG");
    }

    #[test]
    fn out_of_range_flags_are_clamped() {
        let controls = controls_with(&[(REV_TRAFFIC, 9000.0), (REV_DURATION, 20.0)]);
        assert_eq!(controls.value_or(REV_TRAFFIC, 0.0), 500.0);
        assert_eq!(controls.value_or(REV_DURATION, 0.0), 21.0);
    }

    #[test]
    fn default_revenue_scenario_renders() {
        let controls = controls_with(&[]);
        let ctx = SimulationContext {
            controls: &controls,
            segment: Segment::New,
            scale: Scale::default(),
        };
        let mut board = DisplayBoard::with_slots(RevenueEngine.slots());
        let snapshot = RevenueEngine.recompute(&ctx, &mut board);
        assert_eq!(snapshot.decision, Decision::Kill);
        assert_eq!(board.text(revenue::SLOT_TRAFFIC_VAL), "50K");
    }

    #[test]
    fn cli_parses_revenue_flags() {
        let cli = Cli::parse_from([
            "karenos", "revenue", "--traffic", "120", "--segment", "returning", "--json",
        ]);
        match cli.command {
            Commands::Revenue {
                traffic,
                segment,
                json,
                ..
            } => {
                assert_eq!(traffic, 120.0);
                assert!(matches!(segment, SegmentArg::Returning));
                assert!(json);
            }
            _ => panic!("expected revenue command"),
        }
    }
}
