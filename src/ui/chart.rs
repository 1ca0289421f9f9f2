//! Scatter chart rendering.

use super::{format_axis_label, ThemeColors};
use crate::plot::Figure;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Largest rectangle inside `area` that looks square, centered.
///
/// `cell_aspect` is the number of columns that match one row in height.
pub(super) fn square_rect(area: Rect, cell_aspect: u16) -> Rect {
    let aspect = cell_aspect.max(1);
    let height = area.height.min(area.width / aspect);
    let width = height * aspect;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Grid line segments at every interior tick of both axes.
fn grid_lines(figure: &Figure) -> Vec<[(f64, f64); 2]> {
    if !figure.grid {
        return Vec::new();
    }
    let [x_min, x_max] = figure.x_bounds;
    let [y_min, y_max] = figure.y_bounds;
    let interior = |ticks: &[f64]| -> Vec<f64> {
        ticks
            .iter()
            .copied()
            .skip(1)
            .take(ticks.len().saturating_sub(2))
            .collect()
    };

    let vertical = interior(figure.x_ticks.as_slice())
        .into_iter()
        .map(|x| [(x, y_min), (x, y_max)]);
    let horizontal = interior(figure.y_ticks.as_slice())
        .into_iter()
        .map(|y| [(x_min, y), (x_max, y)]);
    vertical.chain(horizontal).collect()
}

/// Tick labels for an axis with `span` cells along it.
///
/// Every tick is labeled when the labels fit; otherwise the bounds and the
/// midpoint, then the bounds alone. `cell_extent` is the room one label
/// needs, its width on a horizontal axis.
fn tick_labels(ticks: &[f64], span: u16, cell_extent: impl Fn(&str) -> usize) -> Vec<String> {
    let all: Vec<String> = ticks.iter().map(|v| format_axis_label(*v)).collect();
    let (Some(&first), Some(&last)) = (ticks.first(), ticks.last()) else {
        return all;
    };

    let candidates = [
        all,
        vec![
            format_axis_label(first),
            format_axis_label((first + last) / 2.0),
            format_axis_label(last),
        ],
        vec![format_axis_label(first), format_axis_label(last)],
    ];
    let fits = |labels: &[String]| {
        let widest = labels.iter().map(|l| cell_extent(l.as_str())).max().unwrap_or(0);
        labels.len() * (widest + 1) <= usize::from(span)
    };

    let mut candidates = candidates.into_iter();
    let mut chosen = candidates.next().unwrap_or_default();
    for fallback in candidates {
        if fits(&chosen) {
            break;
        }
        chosen = fallback;
    }
    chosen
}

/// Draw the scatter chart with grid, axes and title.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, figure: &Figure, colors: &ThemeColors) {
    let grid = grid_lines(figure);

    // Grid first so markers are drawn on top of it
    let mut datasets: Vec<Dataset<'_>> = grid
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.grid))
                .data(segment)
        })
        .collect();

    datasets.extend(figure.markers.iter().map(|marker| {
        Dataset::default()
            .name(marker.label.as_str())
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(marker.color))
            .data(std::slice::from_ref(&marker.position))
    }));

    // Borders, the y axis line and the y labels take room from the x axis
    let y_labels = tick_labels(&figure.y_ticks, area.height.saturating_sub(4), |_| 1);
    let y_label_width = y_labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let x_span = area
        .width
        .saturating_sub(3)
        .saturating_sub(u16::try_from(y_label_width).unwrap_or(u16::MAX));
    let x_labels = tick_labels(&figure.x_ticks, x_span, |l| l.width());

    let x_axis = Axis::default()
        .title(figure.x_title.as_str())
        .style(Style::default().fg(colors.axis))
        .bounds(figure.x_bounds)
        .labels(x_labels);

    let y_axis = Axis::default()
        .title(figure.y_title.as_str())
        .style(Style::default().fg(colors.axis))
        .bounds(figure.y_bounds)
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" {} ", figure.title))
                .title_alignment(Alignment::Center)
                .title_style(
                    Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(None);

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::PointPlotter;
    use crate::points::PointSet;

    #[test]
    fn square_rect_corrects_for_cell_aspect() {
        let area = Rect::new(0, 0, 87, 49);
        let square = square_rect(area, 2);
        assert_eq!(square, Rect::new(0, 3, 86, 43));
    }

    #[test]
    fn square_rect_in_tall_area() {
        let area = Rect::new(10, 0, 20, 40);
        let square = square_rect(area, 2);
        assert_eq!(square, Rect::new(10, 15, 20, 10));
    }

    #[test]
    fn grid_covers_interior_ticks() {
        let figure = PointPlotter::fixed().figure();
        let lines = grid_lines(&figure);
        // 5 divisions leave 4 interior ticks per axis
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0][0].0, figure.x_ticks[1]);
        assert_eq!(lines[0][0].1, figure.y_bounds[0]);
        assert_eq!(lines[4][1].0, figure.x_bounds[1]);
    }

    #[test]
    fn all_tick_labels_when_they_fit() {
        let ticks = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
        let labels = tick_labels(&ticks, 40, |l| l.width());
        assert_eq!(labels, vec!["0", "2", "4", "6", "8", "10"]);
    }

    #[test]
    fn crowded_axis_keeps_bounds_and_midpoint() {
        let figure = PointPlotter::fixed().figure();
        let labels = tick_labels(&figure.x_ticks, 36, |l| l.width());
        assert_eq!(labels, vec!["13,000", "235,000", "457,000"]);

        let labels = tick_labels(&figure.x_ticks, 20, |l| l.width());
        assert_eq!(labels, vec!["13,000", "457,000"]);
    }

    #[test]
    fn no_grid_lines_when_disabled() {
        let mut figure = PointPlotter::new(PointSet::new(&[])).figure();
        figure.grid = false;
        assert!(grid_lines(&figure).is_empty());
    }
}
