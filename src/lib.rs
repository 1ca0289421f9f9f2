//! Pointplot - a terminal scatter plot of a fixed set of grid coordinates.
//!
//! The coordinates are compiled in. Each one becomes a marker labeled
//! `Point {index}` on a chart with axis titles, a legend and a reference
//! grid. On a terminal the chart stays up until dismissed; otherwise a text
//! rendering is written to stdout.
//!
//! # Example
//!
//! ```no_run
//! use pointplot::PointPlotter;
//!
//! let plotter = PointPlotter::fixed();
//! let figure = plotter.figure();
//! assert_eq!(figure.markers.len(), 24);
//!
//! plotter.render()?;
//! # Ok::<(), pointplot::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod error;
pub mod plot;
pub mod points;
pub mod ui;
pub mod util;
pub mod viewer;

pub use error::{PlotError, Result};
pub use plot::{Figure, LegendEntry, Marker, PointPlotter};
pub use points::{Coordinate, PointSet, COORDINATES};
