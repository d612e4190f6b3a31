//! KarenOS Core — the interaction layer of the portfolio page.
//!
//! This crate holds every behaviour the page has, independent of any host:
//! - Metric formatting (currency, percent, count)
//! - Exclusive expansion groups (timeline, skills, modules)
//! - Simulation engines: revenue, risk, architecture, optimization readouts
//! - Frame-driven animations: count-up, cursor glow, typing line
//! - Reveal-on-scroll and viewport glue
//! - Recruiter/neon UI modes with session persistence
//! - `Page`, the single state handle hosts drive

pub mod animation;
pub mod config;
pub mod content;
pub mod controls;
pub mod display;
pub mod engines;
pub mod error;
pub mod expansion;
pub mod format;
pub mod page;
pub mod reveal;
pub mod ui_mode;
pub mod viewport;

pub use config::KarenConfig;
pub use error::{ConfigError, StorageError};
pub use page::Page;
