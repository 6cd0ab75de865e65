//! Off-screen rendering of a whole frame.
//!
//! Draws the app into a `TestBackend` buffer and returns it as text, one
//! line per terminal row with trailing spaces trimmed. Used by the CLI's
//! `render` command and by tests that compare frames.

use std::io;

use ratatui::{Terminal, backend::TestBackend};

use crate::App;

/// Renders one frame of `app` at `width` x `height` and returns its rows.
pub fn render_rows(app: &App, width: u16, height: u16) -> io::Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| app.render(f))?;

    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width.max(1));
    Ok(buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect())
}

/// Renders one frame of `app` as a single newline-joined string.
pub fn render_to_string(app: &App, width: u16, height: u16) -> io::Result<String> {
    Ok(render_rows(app, width, height)?.join("\n"))
}
