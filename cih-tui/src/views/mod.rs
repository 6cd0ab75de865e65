//! Pages for the cih TUI.
//!
//! This module provides:
//! - `Page` enum naming every routable page
//! - `ViewRenderer` trait for page rendering
//! - The page implementations (Home, About, Dashboard, NotFound)

mod about;
mod dashboard;
mod home;
mod not_found;
mod page;
mod traits;

pub use about::AboutView;
pub use dashboard::{DASHBOARD_STATS, DashboardView, QUICK_ACTIONS, recent_activity};
pub use home::{FEATURES, HomeView};
pub use not_found::{NOT_FOUND_HEADING, NOT_FOUND_MESSAGE, NotFoundView};
pub use page::Page;
pub use traits::ViewRenderer;

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Terminal, backend::TestBackend};

    use super::Page;

    /// Draws `page` alone into a `width` x `height` buffer and returns every
    /// cell symbol, row after row.
    pub fn render_page(page: Page, width: u16, height: u16) -> String {
        let theme = crate::cih_default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                page.render(f, area, &theme);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }
}
