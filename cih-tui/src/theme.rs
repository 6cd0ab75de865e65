//! Theme system for the cih terminal app.

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

/// Names accepted by [`theme_by_name`].
pub const THEME_NAMES: [&str; 2] = ["cih", "light"];

/// Raised when a theme name is not one of [`THEME_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (available: cih, light)")]
pub struct ThemeError(pub String);

/// Theme configuration for the TUI.
///
/// Contains all colors and styles needed to render the chrome and pages.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub primary: Color,
    pub on_primary: Color,

    // Trend badges
    pub positive: Color,
    pub negative: Color,

    // UI element colors
    pub border: Color,
    pub card: Color,

    // Text styles
    pub heading: Style,
    pub bold: Style,
    pub dim: Style,
}

impl Theme {
    /// Style for secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for plain body text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for card and section borders.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

/// Creates the default dark theme.
///
/// Neutral slate background with a single indigo accent:
/// - Slate 950 (#020617) background
/// - Slate 50 (#f8fafc) text, slate 400 (#94a3b8) muted text
/// - Indigo 400 (#818cf8) primary
pub fn cih_default() -> Theme {
    let fg = Color::Rgb(248, 250, 252); // #f8fafc

    Theme {
        name: "cih".into(),

        bg: Color::Rgb(2, 6, 23), // #020617
        fg,
        muted: Color::Rgb(148, 163, 184),     // #94a3b8
        primary: Color::Rgb(129, 140, 248),   // #818cf8
        on_primary: Color::Rgb(2, 6, 23),     // #020617
        positive: Color::Rgb(74, 222, 128),   // #4ade80
        negative: Color::Rgb(248, 113, 113),  // #f87171
        border: Color::Rgb(51, 65, 85),       // #334155
        card: Color::Rgb(15, 23, 42),         // #0f172a

        heading: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}

/// Creates the light theme.
pub fn cih_light() -> Theme {
    let fg = Color::Rgb(15, 23, 42); // #0f172a

    Theme {
        name: "light".into(),

        bg: Color::Rgb(255, 255, 255),
        fg,
        muted: Color::Rgb(100, 116, 139),     // #64748b
        primary: Color::Rgb(79, 70, 229),     // #4f46e5
        on_primary: Color::Rgb(255, 255, 255),
        positive: Color::Rgb(22, 101, 52),    // #166534
        negative: Color::Rgb(153, 27, 27),    // #991b1b
        border: Color::Rgb(226, 232, 240),    // #e2e8f0
        card: Color::Rgb(248, 250, 252),      // #f8fafc

        heading: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}

/// Looks up a built-in theme by name.
pub fn theme_by_name(name: &str) -> Result<Theme, ThemeError> {
    match name {
        "cih" => Ok(cih_default()),
        "light" => Ok(cih_light()),
        other => Err(ThemeError(other.to_string())),
    }
}
