//! About view.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::Theme;

const INTRO: &str = "This project was designed by a senior developer to provide a solid \
foundation for building modern terminal applications.";

const MISSION: &str = "To simplify the development process by providing a pre-configured, \
batteries-included starter kit that follows best practices in safety, scalability, and \
performance.";

/// Tech stack entries: (label, description).
const TECH_STACK: [(&str, &str); 4] = [
    ("Frontend", "ratatui, crossterm"),
    ("Backend", "clap, serde, toml, tracing"),
    ("Tools", "cargo, clippy, rustfmt"),
    ("Standards", "Typed errors, Layered config, Keyboard navigation"),
];

/// Project background, mission and tech stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct AboutView;

impl ViewRenderer for AboutView {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled("About the Project", theme.heading)),
            Line::default(),
            Line::from(Span::styled(INTRO, theme.muted_style())),
            Line::default(),
            Line::from(Span::styled("Our Mission", theme.bold)),
            Line::default(),
            Line::from(Span::styled(MISSION, theme.muted_style())),
            Line::default(),
            Line::from(Span::styled("Tech Stack", theme.bold)),
            Line::default(),
        ];

        lines.extend(TECH_STACK.iter().map(|(label, items)| {
            Line::from(vec![
                Span::styled("  - ", theme.muted_style()),
                Span::styled(format!("{label}:"), theme.bold),
                Span::styled(format!(" {items}"), theme.muted_style()),
            ])
        }));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn title(&self) -> &str {
        "About"
    }
}
