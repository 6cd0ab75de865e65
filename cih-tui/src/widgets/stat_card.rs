//! Stat card widget for the dashboard.
//!
//! Shows a metric name, its value and a colored change badge.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::Theme;

/// Direction of a metric change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
}

/// A single dashboard metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

impl StatCard {
    pub const fn new(
        name: &'static str,
        value: &'static str,
        change: &'static str,
        trend: Trend,
    ) -> Self {
        Self {
            name,
            value,
            change,
            trend,
        }
    }

    /// Converts the card to a bordered paragraph.
    ///
    /// Layout: name on the first line, value and badge on the second.
    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'static> {
        let badge_color = match self.trend {
            Trend::Increase => theme.positive,
            Trend::Decrease => theme.negative,
        };

        let lines = vec![
            Line::from(Span::styled(self.name, theme.muted_style())),
            Line::from(vec![
                Span::styled(self.value, theme.bold),
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", self.change),
                    Style::default()
                        .fg(badge_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style());

        Paragraph::new(lines).block(block)
    }
}
