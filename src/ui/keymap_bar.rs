//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Keys that close the viewer.
const KEYMAP_TEXT: &str = "q/Esc:close";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP_TEXT)
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
