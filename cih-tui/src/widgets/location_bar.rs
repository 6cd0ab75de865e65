//! Location bar shown on the last terminal row.
//!
//! Idle, it shows the current path and key hints. Editing, it shows the
//! `go to:` prompt followed by the input buffer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;
use crate::input::LocationInput;

const PROMPT: &str = "go to: ";
const HINTS: &str = "tab: next link  enter: open  g: go to  backspace: back  q: quit ";

/// Widget for rendering the location bar.
pub struct LocationBarWidget;

impl LocationBarWidget {
    /// Render the idle bar: current path on the left, hints on the right.
    pub fn render_idle(frame: &mut Frame, area: Rect, path: &str, theme: &Theme) {
        let hint_width = HINTS.len() as u16;
        let show_hints = usize::from(area.width) > HINTS.len() + path.chars().count() + 2;

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(if show_hints { hint_width } else { 0 }),
            ])
            .split(area);

        let location = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(path.to_string(), theme.text_style()),
        ]));
        frame.render_widget(location, chunks[0]);

        if show_hints {
            let hints = Paragraph::new(Line::from(Span::styled(HINTS, theme.muted_style())))
                .alignment(Alignment::Right);
            frame.render_widget(hints, chunks[1]);
        }
    }

    /// Render the editing bar and place the cursor inside the input.
    pub fn render_editing(frame: &mut Frame, area: Rect, input: &LocationInput, theme: &Theme) {
        let line = Line::from(vec![
            Span::styled(PROMPT, theme.bold),
            Span::styled(input.buffer.clone(), theme.text_style()),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let offset = u16::try_from(PROMPT.len() + input.cursor).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(offset);
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}
