//! Activity feed widget for the dashboard.
//!
//! Displays recent activity entries with an avatar, a description, a
//! relative time and an inert "View" button.

use ratatui::{
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
};

use super::button::{Button, ButtonSize, ButtonVariant};
use crate::Theme;

/// Button drawn next to each entry.
const VIEW_BUTTON: Button = Button::new("View")
    .variant(ButtonVariant::Ghost)
    .size(ButtonSize::Small);

/// An activity entry for display in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    /// Avatar initials (e.g., "JD").
    pub initials: String,
    /// What happened (e.g., "User #1 connected").
    pub description: String,
    /// Relative time (e.g., "2 minutes ago").
    pub time: String,
}

/// Widget displaying a list of activity entries.
#[derive(Debug, Clone, Default)]
pub struct ActivityFeedWidget {
    pub events: Vec<ActivityEvent>,
}

impl ActivityFeedWidget {
    /// Creates a new empty activity feed widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an activity feed widget with the given events.
    pub fn with_events(events: Vec<ActivityEvent>) -> Self {
        Self { events }
    }

    /// Converts the widget to a renderable List with the given theme.
    pub fn to_list(&self, theme: &Theme) -> List<'static> {
        let items: Vec<ListItem> = if self.events.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No recent activity",
                theme.muted_style(),
            )))]
        } else {
            self.events
                .iter()
                .map(|event| Self::event_to_item(event, theme))
                .collect()
        };

        let block = Block::default()
            .title(Span::styled(" Recent Activity ", theme.heading))
            .borders(Borders::ALL)
            .border_style(theme.border_style());

        List::new(items).block(block)
    }

    /// Converts an event to a two-line list item.
    fn event_to_item(event: &ActivityEvent, theme: &Theme) -> ListItem<'static> {
        let headline = Line::from(vec![
            Span::styled(
                format!(" {} ", event.initials),
                Style::default().fg(theme.fg).bg(theme.border),
            ),
            Span::raw("  "),
            Span::styled(event.description.clone(), theme.text_style()),
            Span::raw("  "),
            VIEW_BUTTON.to_span(theme),
        ]);
        let detail = Line::from(vec![
            Span::raw("      "),
            Span::styled(event.time.clone(), theme.muted_style()),
        ]);

        ListItem::new(Text::from(vec![headline, detail]))
    }
}
