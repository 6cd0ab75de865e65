//! Static button rendering.
//!
//! Buttons are drawn, never focused: none of the buttons in the app carry a
//! handler, so the type has nothing to invoke.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::Theme;

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled with the primary color.
    #[default]
    Primary,
    /// Bracketed outline in the text color.
    Outline,
    /// Bare label in the muted color.
    Ghost,
}

/// Horizontal padding around the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn padding(self) -> usize {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }
}

/// A labelled, inert button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
}

impl Button {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
        }
    }

    pub const fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub const fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// The text drawn for this button, e.g. `[ GitHub ]`.
    pub fn text(&self) -> String {
        let pad = " ".repeat(self.size.padding());
        match self.variant {
            ButtonVariant::Primary | ButtonVariant::Ghost => {
                format!("{pad}{}{pad}", self.label)
            }
            ButtonVariant::Outline => format!("[{pad}{}{pad}]", self.label),
        }
    }

    /// Display width in cells.
    pub fn width(&self) -> u16 {
        self.text().chars().count() as u16
    }

    /// Converts the button to a styled span.
    pub fn to_span(&self, theme: &Theme) -> Span<'static> {
        let style = match self.variant {
            ButtonVariant::Primary => Style::default()
                .fg(theme.on_primary)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Outline => Style::default().fg(theme.fg),
            ButtonVariant::Ghost => Style::default().fg(theme.muted),
        };

        Span::styled(self.text(), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_pads_label() {
        let button = Button::new("Get Started").size(ButtonSize::Small);
        assert_eq!(button.text(), " Get Started ");
        assert_eq!(button.width(), 13);
    }

    #[test]
    fn outline_button_is_bracketed() {
        let button = Button::new("GitHub")
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Large);
        assert_eq!(button.text(), "[   GitHub   ]");
    }

    #[test]
    fn ghost_button_uses_muted_color() {
        let theme = crate::cih_default();
        let span = Button::new("View")
            .variant(ButtonVariant::Ghost)
            .to_span(&theme);

        assert_eq!(span.style.fg, Some(theme.muted));
        assert_eq!(span.content, "  View  ");
    }

    #[test]
    fn primary_button_fills_with_primary_color() {
        let theme = crate::cih_default();
        let span = Button::new("Documentation").to_span(&theme);

        assert_eq!(span.style.bg, Some(theme.primary));
        assert_eq!(span.style.fg, Some(theme.on_primary));
    }
}
