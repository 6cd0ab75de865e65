//! Dashboard view - summary metrics, recent activity and quick actions.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::traits::ViewRenderer;
use crate::Theme;
use crate::widgets::{
    ActivityEvent, ActivityFeedWidget, Button, ButtonSize, ButtonVariant, StatCard, Trend,
};

/// Summary metrics, left to right.
pub const DASHBOARD_STATS: [StatCard; 4] = [
    StatCard::new("Total Users", "2,543", "+12.5%", Trend::Increase),
    StatCard::new("Active Sessions", "432", "+18.2%", Trend::Increase),
    StatCard::new("Revenue", "$12,402", "-3.2%", Trend::Decrease),
    StatCard::new("Conversion Rate", "4.8%", "+2.4%", Trend::Increase),
];

/// Quick action buttons. None of them has a handler.
pub const QUICK_ACTIONS: [Button; 4] = [
    Button::new("Create New Project")
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Small),
    Button::new("Invite Team Member")
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Small),
    Button::new("Generate Report")
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Small),
    Button::new("System Settings")
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Small),
];

const ACTIVITY_ENTRIES: usize = 5;

/// The placeholder activity feed: five connections, all "2 minutes ago".
pub fn recent_activity() -> Vec<ActivityEvent> {
    (1..=ACTIVITY_ENTRIES)
        .map(|n| ActivityEvent {
            initials: "JD".into(),
            description: format!("User #{n} connected"),
            time: "2 minutes ago".into(),
        })
        .collect()
}

/// The dashboard summary page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardView;

impl DashboardView {
    fn render_quick_actions(frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Vec::with_capacity(QUICK_ACTIONS.len() * 2);
        for button in QUICK_ACTIONS {
            lines.push(Line::from(button.to_span(theme)));
            lines.push(Line::default());
        }

        let block = Block::default()
            .title(Span::styled(" Quick Actions ", theme.heading))
            .borders(Borders::ALL)
            .border_style(theme.border_style());

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl ViewRenderer for DashboardView {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Heading, subtitle, stat cards, then activity and quick actions
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Dashboard", theme.heading))),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Welcome back to your dashboard summary.",
                theme.muted_style(),
            ))),
            chunks[1],
        );

        let stat_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[3]);
        for (card, card_area) in DASHBOARD_STATS.iter().zip(stat_areas.iter()) {
            frame.render_widget(card.to_paragraph(theme), *card_area);
        }

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(4, 7), Constraint::Ratio(3, 7)])
            .split(chunks[5]);

        let feed = ActivityFeedWidget::with_events(recent_activity());
        frame.render_widget(feed.to_list(theme), panels[0]);
        Self::render_quick_actions(frame, panels[1], theme);
    }

    fn title(&self) -> &str {
        "Dashboard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Page;
    use crate::views::test_support::render_page;

    #[test]
    fn dashboard_view_has_correct_title() {
        assert_eq!(DashboardView.title(), "Dashboard");
    }

    // Intentional changes to these figures must update this test.
    #[test]
    fn stat_literals_are_unchanged() {
        let values: Vec<&str> = DASHBOARD_STATS.iter().map(|s| s.value).collect();
        let changes: Vec<&str> = DASHBOARD_STATS.iter().map(|s| s.change).collect();
        let trends: Vec<Trend> = DASHBOARD_STATS.iter().map(|s| s.trend).collect();

        assert_eq!(values, ["2,543", "432", "$12,402", "4.8%"]);
        assert_eq!(changes, ["+12.5%", "+18.2%", "-3.2%", "+2.4%"]);
        assert_eq!(
            trends,
            [Trend::Increase, Trend::Increase, Trend::Decrease, Trend::Increase]
        );
    }

    #[test]
    fn renders_every_stat_card() {
        let content = render_page(Page::Dashboard, 96, 33);

        for stat in DASHBOARD_STATS {
            assert!(content.contains(stat.name), "missing {}", stat.name);
            assert!(content.contains(stat.value), "missing {}", stat.value);
            assert!(content.contains(stat.change), "missing {}", stat.change);
        }
    }

    #[test]
    fn recent_activity_has_five_numbered_entries() {
        let events = recent_activity();

        assert_eq!(events.len(), 5);
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.description, format!("User #{} connected", i + 1));
            assert_eq!(event.time, "2 minutes ago");
            assert_eq!(event.initials, "JD");
        }
    }

    #[test]
    fn renders_activity_and_quick_actions() {
        let content = render_page(Page::Dashboard, 96, 33);

        assert!(content.contains("Welcome back to your dashboard summary."));
        assert!(content.contains("Recent Activity"));
        assert!(content.contains("User #5 connected"));
        assert!(content.contains("Quick Actions"));
        for action in QUICK_ACTIONS {
            assert!(content.contains(action.label), "missing {}", action.label);
        }
    }
}
