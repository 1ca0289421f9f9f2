//! Terminal session and headless rendering.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self as term_style, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend, TestBackend},
    buffer::Buffer,
    style::Color,
    Terminal,
};

use crate::error::{PlotError, Result};
use crate::plot::Figure;
use crate::ui;
use crate::util::LayoutConfig;

/// Show the figure on the terminal until the user closes it.
pub fn show(figure: &Figure, layout: &LayoutConfig) -> Result<()> {
    enable_raw_mode().map_err(|e| PlotError::surface_unavailable("enable raw mode", e))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(PlotError::surface_unavailable("enter alternate screen", e));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(PlotError::surface_unavailable("create terminal", e));
        }
    };

    tracing::info!("Viewer opened");
    let res = run_viewer(&mut terminal, figure, layout);

    // Restore terminal
    let restored = restore(&mut terminal);
    tracing::info!("Viewer closed");

    res?;
    restored
}

fn restore(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_viewer<B: Backend>(
    terminal: &mut Terminal<B>,
    figure: &Figure,
    layout: &LayoutConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, figure, layout, true))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if is_dismiss(&key) => return Ok(()),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "Terminal resized");
                }
                _ => {}
            }
        }
    }
}

/// Whether a key press closes the viewer.
fn is_dismiss(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(
        (key.modifiers, key.code),
        (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c'))
    )
}

/// Render the figure on an in-memory surface and return it as plain text.
///
/// Trailing blanks are trimmed from every row.
pub fn render_to_string(
    figure: &Figure,
    layout: &LayoutConfig,
    width: u16,
    height: u16,
) -> Result<String> {
    let terminal = render_headless(figure, layout, width, height)?;
    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// Like [`render_to_string`], with each cell's foreground color kept as
/// ANSI escape sequences so markers still match their legend entries.
pub fn render_to_ansi(
    figure: &Figure,
    layout: &LayoutConfig,
    width: u16,
    height: u16,
) -> Result<String> {
    let terminal = render_headless(figure, layout, width, height)?;
    buffer_to_ansi(terminal.backend().buffer())
}

fn render_headless(
    figure: &Figure,
    layout: &LayoutConfig,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    if width == 0 || height == 0 {
        return Err(PlotError::Terminal(format!(
            "surface must be at least 1x1 cells, got {}x{}",
            width, height
        )));
    }

    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| ui::draw(f, figure, layout, false))?;
    tracing::debug!(width, height, "Rendered headless frame");
    Ok(terminal)
}

fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..row_end(buffer, y) {
            row.push_str(buffer[(x, y)].symbol());
        }
        text.push_str(&row);
        text.push('\n');
    }
    text
}

fn buffer_to_ansi(buffer: &Buffer) -> Result<String> {
    let area = buffer.area;
    let mut out: Vec<u8> = Vec::new();
    for y in area.top()..area.bottom() {
        let mut current = None;
        for x in area.left()..row_end(buffer, y) {
            let cell = &buffer[(x, y)];
            let fg = term_color(cell.fg);
            if current != Some(fg) {
                queue!(out, SetForegroundColor(fg))?;
                current = Some(fg);
            }
            out.extend_from_slice(cell.symbol().as_bytes());
        }
        if current.is_some() {
            queue!(out, ResetColor)?;
        }
        out.push(b'\n');
    }
    String::from_utf8(out).map_err(|e| PlotError::Terminal(e.to_string()))
}

/// Column just past the last non-blank cell of row `y`.
fn row_end(buffer: &Buffer, y: u16) -> u16 {
    let area = buffer.area;
    (area.left()..area.right())
        .rev()
        .find(|&x| !buffer[(x, y)].symbol().trim().is_empty())
        .map_or(area.left(), |x| x + 1)
}

fn term_color(color: Color) -> term_style::Color {
    use term_style::Color as Term;
    match color {
        Color::Reset => Term::Reset,
        Color::Black => Term::Black,
        Color::Red => Term::DarkRed,
        Color::Green => Term::DarkGreen,
        Color::Yellow => Term::DarkYellow,
        Color::Blue => Term::DarkBlue,
        Color::Magenta => Term::DarkMagenta,
        Color::Cyan => Term::DarkCyan,
        Color::Gray => Term::Grey,
        Color::DarkGray => Term::DarkGrey,
        Color::LightRed => Term::Red,
        Color::LightGreen => Term::Green,
        Color::LightYellow => Term::Yellow,
        Color::LightBlue => Term::Blue,
        Color::LightMagenta => Term::Magenta,
        Color::LightCyan => Term::Cyan,
        Color::White => Term::White,
        Color::Rgb(r, g, b) => Term::Rgb { r, g, b },
        Color::Indexed(i) => Term::AnsiValue(i),
    }
}

/// Write a text rendering to `out`.
///
/// A reader that goes away early (`pointplot | head`) is not an error.
pub fn write_text(mut out: impl Write, text: &str) -> Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed early");
            Ok(())
        }
        other => other.map_err(PlotError::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::PointPlotter;
    use crate::points::{Coordinate, PointSet};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn dismiss_keys() {
        assert!(is_dismiss(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_dismiss(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_dismiss(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_dismiss(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_dismiss(&press(KeyCode::Enter, KeyModifiers::NONE)));

        let mut release = press(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!is_dismiss(&release));
    }

    #[test]
    fn headless_render_shows_titles_and_legend() {
        let text = PointPlotter::fixed().render_to_string(100, 50).unwrap();
        assert!(text.contains("Grid Representation of Coordinates"));
        assert!(text.contains("X Coordinate"));
        assert!(text.contains("Y Coordinate"));
        assert!(text.contains("Legend"));
        for i in 0..24 {
            let label = format!("Point {}", i);
            assert_eq!(
                text.matches(&format!("● {} ", label)).count(),
                1,
                "missing legend line for {}",
                label
            );
        }
        assert!(!text.contains(ui_keymap()));
        assert_eq!(text.lines().count(), 50);
    }

    #[test]
    fn headless_render_is_repeatable() {
        let plotter = PointPlotter::fixed();
        let first = plotter.render_to_string(100, 50).unwrap();
        let second = plotter.render_to_string(100, 50).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn headless_render_of_empty_set() {
        let text = PointPlotter::new(PointSet::new(&[]))
            .render_to_string(100, 50)
            .unwrap();
        assert!(text.contains("Grid Representation of Coordinates"));
        assert!(text.contains("X Coordinate"));
        assert!(text.contains("Legend"));
        assert!(!text.contains("Point 0"));
    }

    #[test]
    fn two_point_legend() {
        let coords = [Coordinate::new(50000, 510000), Coordinate::new(320000, 510000)];
        let text = PointPlotter::new(PointSet::new(&coords))
            .render_to_string(100, 50)
            .unwrap();
        assert!(text.contains("Point 0"));
        assert!(text.contains("Point 1"));
        assert!(!text.contains("Point 2"));
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let err = PointPlotter::fixed().render_to_string(0, 10).unwrap_err();
        assert!(matches!(err, PlotError::Terminal(_)));
    }

    #[test]
    fn interactive_frame_has_key_hints() {
        let figure = PointPlotter::fixed().figure();
        let layout = LayoutConfig::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        terminal
            .draw(|f| ui::draw(f, &figure, &layout, true))
            .unwrap();
        let text = buffer_to_text(terminal.backend().buffer());
        assert!(text.lines().last().unwrap_or("").starts_with(ui_keymap()));
    }

    #[test]
    fn write_text_writes_everything() {
        let mut out = Vec::new();
        write_text(&mut out, "abc\n").unwrap();
        assert_eq!(out, b"abc\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_reader_ends_quietly() {
        assert!(write_text(ClosedPipe, "chart\n").is_ok());
        assert!(matches!(write_text(Full, "chart\n"), Err(PlotError::Io(_))));
    }

    #[test]
    fn headless_render_draws_every_marker() {
        let text = PointPlotter::fixed().render_to_string(100, 50).unwrap();
        assert_eq!(text.matches('•').count(), 24);
    }

    #[test]
    fn equal_y_markers_share_a_row() {
        let coords = [Coordinate::new(50000, 510000), Coordinate::new(320000, 510000)];
        let text = PointPlotter::new(PointSet::new(&coords))
            .render_to_string(100, 50)
            .unwrap();

        let rows: Vec<(usize, Vec<usize>)> = text
            .lines()
            .enumerate()
            .map(|(row, line)| {
                let cols = line
                    .chars()
                    .enumerate()
                    .filter(|(_, c)| *c == '•')
                    .map(|(col, _)| col)
                    .collect();
                (row, cols)
            })
            .filter(|(_, cols): &(usize, Vec<usize>)| !cols.is_empty())
            .collect();

        assert_eq!(rows.len(), 1, "markers spread over rows: {:?}", rows);
        let (_, cols) = &rows[0];
        assert_eq!(cols.len(), 2);
        // Padding puts the two x values at 1/12 and 11/12 of the axis
        let span = cols[1] - cols[0];
        assert!(span > 50, "markers too close: {:?}", cols);
    }

    #[test]
    fn standard_terminal_size_lists_every_label() {
        let text = PointPlotter::fixed().render_to_string(80, 24).unwrap();
        for i in 0..24 {
            let label = format!("Point {}", i);
            assert_eq!(
                text.matches(&format!("● {} ", label)).count(),
                1,
                "missing legend entry for {}",
                label
            );
        }
        assert_eq!(text.matches('•').count(), 24);
    }

    #[test]
    fn standard_terminal_size_keeps_x_labels_readable() {
        let text = PointPlotter::fixed().render_to_string(80, 24).unwrap();
        assert!(text.contains("13,000"));
        assert!(text.contains("235,000"));
        assert!(text.contains("457,000"));
        assert!(!text.contains("101,800"));
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    fn fg_sequence(color: Color) -> String {
        let mut seq: Vec<u8> = Vec::new();
        queue!(seq, SetForegroundColor(term_color(color))).unwrap();
        String::from_utf8(seq).unwrap()
    }

    #[test]
    fn ansi_render_colors_markers_like_their_legend_entries() {
        let plotter = PointPlotter::fixed();
        let figure = plotter.figure();
        let layout = LayoutConfig::default();
        let ansi = render_to_ansi(&figure, &layout, 100, 50).unwrap();

        for marker in &figure.markers {
            let seq = fg_sequence(marker.color);
            assert!(ansi.contains(&format!("{}•", seq)), "{} marker uncolored", marker.label);
            assert!(ansi.contains(&format!("{}●", seq)), "{} legend uncolored", marker.label);
        }

        assert_eq!(strip_ansi(&ansi), plotter.render_to_string(100, 50).unwrap());
    }

    fn ui_keymap() -> &'static str {
        "q/Esc:close"
    }
}
