//! Legend panel.

use super::ThemeColors;
use crate::plot::Figure;
use crate::util::LegendLayoutConfig;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const LEGEND_TITLE: &str = " Legend ";

/// Width of one legend column: glyph, gap, label and trailing gap.
fn entry_width(figure: &Figure, config: &LegendLayoutConfig) -> u16 {
    let widest = figure
        .legend
        .iter()
        .map(|e| e.label.width())
        .max()
        .unwrap_or(0);
    u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(config.entry_padding)
}

/// Rows available for entries in a panel of `height` rows.
fn rows_per_column(height: u16) -> usize {
    usize::from(height.saturating_sub(2)).max(1)
}

/// Number of columns needed to list every entry within `height` rows.
fn column_count(figure: &Figure, height: u16) -> u16 {
    let columns = figure.legend.len().div_ceil(rows_per_column(height));
    u16::try_from(columns).unwrap_or(u16::MAX)
}

/// Columns needed to show every label in full when the panel is `height`
/// rows tall.
pub(super) fn panel_width(figure: &Figure, config: &LegendLayoutConfig, height: u16) -> u16 {
    let entries = column_count(figure, height)
        .saturating_mul(entry_width(figure, config))
        .saturating_add(2);
    let title = u16::try_from(LEGEND_TITLE.width()).unwrap_or(u16::MAX) + 2;
    entries.max(title)
}

/// Draw the legend, one line per marker, wrapping into further columns
/// when the entries do not fit vertically.
pub(super) fn draw_legend(
    f: &mut Frame<'_>,
    area: Rect,
    figure: &Figure,
    config: &LegendLayoutConfig,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(LEGEND_TITLE)
        .title_style(Style::default().fg(colors.heading));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let column_width = entry_width(figure, config);
    let mut x = inner.x;
    for column in figure.legend.chunks(rows_per_column(area.height)) {
        if x >= inner.right() {
            break;
        }
        let items: Vec<ListItem<'_>> = column
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(config.glyph, Style::default().fg(entry.color)),
                    Span::raw(" "),
                    Span::styled(entry.label.as_str(), Style::default().fg(colors.text)),
                ]))
            })
            .collect();

        let rect = Rect {
            x,
            y: inner.y,
            width: column_width.min(inner.right() - x),
            height: inner.height,
        };
        f.render_widget(List::new(items), rect);
        x = x.saturating_add(column_width);
    }
}
