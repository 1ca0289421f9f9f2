//! Marker colors for scatter series.

use ratatui::style::Color;

/// Ten-color qualitative cycle used for consecutive markers.
const MARKER_CYCLE: [Color; 10] = [
    Color::Rgb(31, 119, 180),  // blue
    Color::Rgb(255, 127, 14),  // orange
    Color::Rgb(44, 160, 44),   // green
    Color::Rgb(214, 39, 40),   // red
    Color::Rgb(148, 103, 189), // purple
    Color::Rgb(140, 86, 75),   // brown
    Color::Rgb(227, 119, 194), // pink
    Color::Rgb(127, 127, 127), // gray
    Color::Rgb(188, 189, 34),  // olive
    Color::Rgb(23, 190, 207),  // cyan
];

/// Color of the marker at `index`; the cycle repeats.
pub fn marker_color(index: usize) -> Color {
    MARKER_CYCLE[index % MARKER_CYCLE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_repeats_after_ten() {
        assert_eq!(marker_color(0), marker_color(10));
        assert_eq!(marker_color(3), marker_color(23));
        assert_ne!(marker_color(0), marker_color(1));
    }
}
