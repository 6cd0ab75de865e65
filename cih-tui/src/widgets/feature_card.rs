//! Feature card widget for the landing page.

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::Theme;

/// A titled card with a short description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

impl FeatureCard {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }

    /// Converts the card to a bordered, wrapping paragraph.
    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'static> {
        let lines = vec![
            Line::from(Span::styled(self.title, theme.heading)),
            Line::default(),
            Line::from(Span::styled(self.description, theme.muted_style())),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style());

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_title_and_wrapped_description() {
        let theme = crate::cih_default();
        let card = FeatureCard::new("Beautiful UI", "Themed widgets for clean screens.");

        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                f.render_widget(card.to_paragraph(&theme), area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(content.contains("Beautiful UI"), "got: {content}");
        assert!(content.contains("Themed widgets"), "got: {content}");
        assert!(content.contains("screens."), "got: {content}");
    }
}
