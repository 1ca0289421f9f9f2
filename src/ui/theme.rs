//! Color theme for the UI.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Figure title color.
    pub heading: Color,
    /// Axis line and tick label color.
    pub axis: Color,
    /// Reference grid color.
    pub grid: Color,
    /// Border color.
    pub border: Color,
    /// Key hint bar foreground color.
    pub status_fg: Color,
    /// Key hint bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Gruvbox dark palette.
    pub fn gruvbox_dark() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),
            text: Color::Rgb(235, 219, 178),
            heading: Color::Rgb(251, 184, 108),
            axis: Color::Rgb(213, 196, 161),
            grid: Color::Rgb(80, 73, 69),
            border: Color::Rgb(102, 92, 84),
            status_fg: Color::Rgb(235, 219, 178),
            status_bg: Color::Rgb(60, 56, 54),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}
