//! The set of routable pages.

use ratatui::{Frame, layout::Rect};
use serde::Serialize;

use super::{AboutView, DashboardView, HomeView, NotFoundView, ViewRenderer};
use crate::Theme;

/// Every page a route can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    About,
    Dashboard,
    NotFound,
}

impl Page {
    /// Stable lowercase name, used by the CLI's route listing.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Dashboard => "dashboard",
            Self::NotFound => "not_found",
        }
    }

    fn renderer(self) -> &'static dyn ViewRenderer {
        match self {
            Self::Home => &HomeView,
            Self::About => &AboutView,
            Self::Dashboard => &DashboardView,
            Self::NotFound => &NotFoundView,
        }
    }

    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        self.renderer().title()
    }

    /// Draws the page into the content region.
    pub fn render(self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.renderer().render(frame, area, theme);
    }
}
