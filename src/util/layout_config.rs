//! Layout configuration constants for the scatter chart.

/// Configuration for the plot surface and axes.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor applied to each side of the data extent (0.1 = 10% margin).
    pub axis_padding_factor: f64,
    /// Number of grid cells along each axis.
    pub grid_divisions: usize,
    /// Terminal columns per row, for aspect ratio correction.
    pub cell_aspect: u16,
    /// Width of the headless surface in cells.
    pub surface_width: u16,
    /// Height of the headless surface in cells.
    pub surface_height: u16,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            axis_padding_factor: 0.1, // 10% margin for visual clearance
            grid_divisions: 5,
            cell_aspect: 2, // 2:1 aspect ratio correction
            surface_width: 100,
            surface_height: 50,
        }
    }
}

/// Configuration for the legend panel.
#[derive(Debug, Clone)]
pub struct LegendLayoutConfig {
    /// Glyph drawn in front of each label.
    pub glyph: &'static str,
    /// Columns per entry besides the label: glyph and the gaps around it.
    pub entry_padding: u16,
}

impl Default for LegendLayoutConfig {
    fn default() -> Self {
        Self {
            glyph: "●",
            entry_padding: 3,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the plot area.
    pub plot: PlotLayoutConfig,
    /// Configuration for the legend panel.
    pub legend: LegendLayoutConfig,
}
