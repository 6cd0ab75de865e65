//! Traits for view rendering in the cih TUI.

use ratatui::{Frame, layout::Rect};

use crate::Theme;

/// Trait for pages that can render themselves.
///
/// Pages take no input beyond the theme: the same theme always draws the
/// same output.
pub trait ViewRenderer {
    /// Render the page into the content region.
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Get the page's title for display.
    fn title(&self) -> &str;
}
