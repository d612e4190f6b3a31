//! Reusable line widgets for the page body.

pub mod meter;
pub mod slider;

pub use meter::{band_bar, fill_bar, parse_path, sparkline};
pub use slider::{slider_bar, slider_line};
