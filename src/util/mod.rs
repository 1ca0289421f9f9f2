//! Utility functions.
//!
//! This module provides layout constants and the marker color cycle.

mod colormaps;
mod layout_config;

pub use colormaps::marker_color;
pub use layout_config::{LayoutConfig, LegendLayoutConfig, PlotLayoutConfig};
