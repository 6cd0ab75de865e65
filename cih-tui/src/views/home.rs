//! Home view - the landing page.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::Theme;
use crate::widgets::{Button, ButtonSize, ButtonVariant, FeatureCard};

/// Feature highlights shown under the hero.
pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard::new(
        "Fast Development",
        "Built with cargo for fast incremental builds and quick feedback.",
    ),
    FeatureCard::new(
        "Beautiful UI",
        "Themed ratatui widgets for clean, consistent terminal screens.",
    ),
    FeatureCard::new(
        "Scalable Backend",
        "A workspace layout with a clean architecture ready for production.",
    ),
];

const ACTIONS: [Button; 2] = [
    Button::new("Documentation").size(ButtonSize::Large),
    Button::new("GitHub")
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Large),
];

/// Landing page: hero heading, tagline, inert actions and feature cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeView;

impl ViewRenderer for HomeView {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let heading = Paragraph::new(Line::from(Span::styled("Welcome to CIH App", theme.heading)))
            .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[1]);

        let tagline = Paragraph::new(Line::from(Span::styled(
            "A production-ready starter template built with Rust, ratatui and crossterm.",
            theme.muted_style(),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(tagline, chunks[2]);

        let mut buttons = Vec::with_capacity(ACTIONS.len() * 2);
        for (i, button) in ACTIONS.iter().enumerate() {
            if i > 0 {
                buttons.push(Span::raw("  "));
            }
            buttons.push(button.to_span(theme));
        }
        frame.render_widget(
            Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
            chunks[4],
        );

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[6]);
        for (card, card_area) in FEATURES.iter().zip(cards.iter()) {
            frame.render_widget(card.to_paragraph(theme), *card_area);
        }
    }

    fn title(&self) -> &str {
        "Home"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::render_page;
    use crate::views::Page;

    #[test]
    fn home_view_has_correct_title() {
        assert_eq!(HomeView.title(), "Home");
    }

    #[test]
    fn renders_hero_and_inert_actions() {
        let content = render_page(Page::Home, 96, 33);

        assert!(content.contains("Welcome to CIH App"));
        assert!(content.contains("starter template"));
        assert!(content.contains("Documentation"));
        assert!(content.contains("[   GitHub   ]"));
    }

    #[test]
    fn renders_all_feature_cards() {
        let content = render_page(Page::Home, 96, 33);

        for feature in FEATURES {
            assert!(content.contains(feature.title), "missing {}", feature.title);
        }
    }
}
