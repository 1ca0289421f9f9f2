//! Figure construction and presentation.
//!
//! [`PointPlotter`] turns a [`PointSet`] into a [`Figure`], a plain description
//! of everything that ends up on screen, and hands it to the viewer.

use std::io::IsTerminal;

use ratatui::style::Color;

use crate::error::Result;
use crate::points::PointSet;
use crate::util::{marker_color, LayoutConfig, PlotLayoutConfig};
use crate::viewer;

/// Figure title.
pub const TITLE: &str = "Grid Representation of Coordinates";
/// Horizontal axis title.
pub const X_TITLE: &str = "X Coordinate";
/// Vertical axis title.
pub const Y_TITLE: &str = "Y Coordinate";

/// A labeled marker placed at one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index of the source coordinate.
    pub index: usize,
    /// Legend label.
    pub label: String,
    /// Position in data space.
    pub position: (f64, f64),
    /// Marker color.
    pub color: Color,
}

/// One line of the legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Label of the marker.
    pub label: String,
    /// Color of the marker.
    pub color: Color,
}

/// Everything needed to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Figure title.
    pub title: String,
    /// Horizontal axis title.
    pub x_title: String,
    /// Vertical axis title.
    pub y_title: String,
    /// Horizontal axis range.
    pub x_bounds: [f64; 2],
    /// Vertical axis range.
    pub y_bounds: [f64; 2],
    /// Grid and tick positions along x, bounds included.
    pub x_ticks: Vec<f64>,
    /// Grid and tick positions along y, bounds included.
    pub y_ticks: Vec<f64>,
    /// Whether the reference grid is drawn.
    pub grid: bool,
    /// Markers in source order.
    pub markers: Vec<Marker>,
    /// Legend entries in marker order.
    pub legend: Vec<LegendEntry>,
}

impl Figure {
    /// Build the figure for `points`.
    pub fn from_points(points: &PointSet<'_>, layout: &PlotLayoutConfig) -> Self {
        let markers: Vec<Marker> = points
            .labeled()
            .enumerate()
            .map(|(index, (label, coord))| Marker {
                index,
                label,
                position: coord.position(),
                color: marker_color(index),
            })
            .collect();

        let legend = markers
            .iter()
            .map(|m| LegendEntry {
                label: m.label.clone(),
                color: m.color,
            })
            .collect();

        let x_bounds = axis_bounds(
            points.x_extent().map(|(lo, hi)| (f64::from(lo), f64::from(hi))),
            layout.axis_padding_factor,
        );
        let y_bounds = axis_bounds(
            points.y_extent().map(|(lo, hi)| (f64::from(lo), f64::from(hi))),
            layout.axis_padding_factor,
        );

        tracing::debug!(
            markers = markers.len(),
            ?x_bounds,
            ?y_bounds,
            "Built figure"
        );

        Self {
            title: TITLE.to_string(),
            x_title: X_TITLE.to_string(),
            y_title: Y_TITLE.to_string(),
            x_bounds,
            y_bounds,
            x_ticks: ticks(x_bounds, layout.grid_divisions),
            y_ticks: ticks(y_bounds, layout.grid_divisions),
            grid: true,
            markers,
            legend,
        }
    }
}

/// Padded axis range for a data extent.
fn axis_bounds(extent: Option<(f64, f64)>, padding: f64) -> [f64; 2] {
    let Some((lo, hi)) = extent else {
        return [0.0, 1.0];
    };
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * padding
    } else {
        (lo.abs() * padding).max(1.0)
    };
    [lo - pad, hi + pad]
}

/// `divisions + 1` evenly spaced values from `bounds[0]` to `bounds[1]`.
fn ticks(bounds: [f64; 2], divisions: usize) -> Vec<f64> {
    let divisions = divisions.max(1);
    let step = (bounds[1] - bounds[0]) / divisions as f64;
    (0..=divisions)
        .map(|i| {
            if i == divisions {
                bounds[1]
            } else {
                bounds[0] + step * i as f64
            }
        })
        .collect()
}

/// Renders a fixed point set as a scatter chart.
#[derive(Debug, Clone)]
pub struct PointPlotter<'a> {
    points: PointSet<'a>,
    layout: LayoutConfig,
}

impl PointPlotter<'static> {
    /// Plotter for the hardcoded coordinates.
    pub fn fixed() -> Self {
        Self::new(PointSet::fixed())
    }
}

impl<'a> PointPlotter<'a> {
    /// Create a plotter with the default layout.
    pub fn new(points: PointSet<'a>) -> Self {
        Self {
            points,
            layout: LayoutConfig::default(),
        }
    }

    /// Describe the chart without drawing it.
    pub fn figure(&self) -> Figure {
        Figure::from_points(&self.points, &self.layout.plot)
    }

    /// Present the figure.
    ///
    /// On a terminal this blocks until the user closes the view. Otherwise
    /// the chart is rendered once at the default surface size and written to
    /// stdout as text, colored with ANSI escapes so markers and legend
    /// entries still pair up.
    pub fn render(&self) -> Result<()> {
        let figure = self.figure();
        let stdout = std::io::stdout();
        if stdout.is_terminal() {
            tracing::info!("Presenting figure interactively");
            viewer::show(&figure, &self.layout)
        } else {
            tracing::info!("Stdout is not a terminal, writing text rendering");
            let text = viewer::render_to_ansi(
                &figure,
                &self.layout,
                self.layout.plot.surface_width,
                self.layout.plot.surface_height,
            )?;
            viewer::write_text(stdout.lock(), &text)
        }
    }

    /// Render the figure onto an in-memory surface of `width` × `height`
    /// cells and return it as text.
    pub fn render_to_string(&self, width: u16, height: u16) -> Result<String> {
        viewer::render_to_string(&self.figure(), &self.layout, width, height)
    }
}

impl Default for PointPlotter<'static> {
    fn default() -> Self {
        Self::fixed()
    }
}
