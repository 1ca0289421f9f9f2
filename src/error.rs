//! Error types for pointplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for pointplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while presenting a figure.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The terminal could not be prepared for drawing.
    #[error("Rendering surface unavailable: {reason}")]
    SurfaceUnavailable {
        /// What failed during set-up.
        reason: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl PlotError {
    /// Create a SurfaceUnavailable error.
    pub fn surface_unavailable(reason: impl Into<String>, source: std::io::Error) -> Self {
        Self::SurfaceUnavailable {
            reason: reason.into(),
            source,
        }
    }
}
