//! User interface rendering.

mod chart;
mod formatters;
mod keymap_bar;
mod legend;
mod theme;

use crate::plot::Figure;
use crate::util::LayoutConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use formatters::{format_axis_label, format_number};
pub use theme::ThemeColors;

/// Draw the figure over the whole frame.
///
/// The key hint bar is only drawn when `show_keymap` is set, i.e. when a
/// user can actually press those keys.
pub fn draw(f: &mut Frame<'_>, figure: &Figure, layout: &LayoutConfig, show_keymap: bool) {
    let colors = ThemeColors::default();
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), area);

    let (content, footer) = if show_keymap && area.height > 1 {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        (rows[0], Some(rows[1]))
    } else {
        (area, None)
    };

    let legend_width = legend::panel_width(figure, &layout.legend, content.height);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(legend_width)])
        .split(content);

    let plot_area = chart::square_rect(columns[0], layout.plot.cell_aspect);
    chart::draw_chart(f, plot_area, figure, &colors);
    legend::draw_legend(f, columns[1], figure, &layout.legend, &colors);

    if let Some(footer) = footer {
        keymap_bar::draw_keymap(f, footer, &colors);
    }
}
