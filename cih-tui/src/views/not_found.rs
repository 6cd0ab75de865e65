//! Fallback view for paths no route matches.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::traits::ViewRenderer;
use crate::Theme;

pub const NOT_FOUND_HEADING: &str = "404 - Not Found";
pub const NOT_FOUND_MESSAGE: &str = "The page you are looking for does not exist.";

/// Centered "not found" notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundView;

impl ViewRenderer for NotFoundView {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .split(area);

        let lines = vec![
            Line::from(Span::styled(NOT_FOUND_HEADING, theme.heading)),
            Line::default(),
            Line::from(Span::styled(NOT_FOUND_MESSAGE, theme.muted_style())),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[1],
        );
    }

    fn title(&self) -> &str {
        "Not Found"
    }
}
