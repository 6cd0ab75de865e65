//! Persistent chrome around the content region.
//!
//! The chrome (header with brand and navigation links, footer) is built once
//! per app from the theme and then only painted; navigation never touches
//! it. [`split`] carves the screen into the regions the app draws into.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::Theme;
use crate::widgets::{Button, ButtonSize};

const HEADER_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 2;
const BRAND_GAP: &str = "    ";
const LINK_GAP: &str = "   ";

/// A chrome link to an in-app path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: &'static str,
}

/// The screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub location_bar: Rect,
}

/// Splits the frame area into header, content, footer and location bar.
pub fn split(area: Rect) -> Regions {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let page = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(outer[0]);

    Regions {
        header: page[0],
        content: page[1].inner(Margin {
            horizontal: 2,
            vertical: 1,
        }),
        footer: page[2],
        location_bar: outer[1],
    }
}

/// Header and footer, pre-styled for one theme.
#[derive(Debug, Clone)]
pub struct Chrome {
    brand: NavLink,
    links: Vec<NavLink>,
    cta: Button,
    header_line: Line<'static>,
    cta_span: Span<'static>,
    footer_line: Line<'static>,
    link_offsets: Vec<u16>,
}

impl Chrome {
    /// Builds the app's chrome: brand, Home and About links, the inert
    /// "Get Started" button and the footer note.
    pub fn build(theme: &Theme) -> Self {
        let brand = NavLink {
            label: "CIH App",
            to: "/",
        };
        let links = vec![
            NavLink {
                label: "Home",
                to: "/",
            },
            NavLink {
                label: "About",
                to: "/about",
            },
        ];
        let cta = Button::new("Get Started").size(ButtonSize::Small);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(brand.label, theme.heading.fg(theme.primary)),
        ];
        let mut link_offsets = vec![1];
        let mut x = 1 + brand.label.len() as u16;

        for (i, link) in links.iter().enumerate() {
            let gap = if i == 0 { BRAND_GAP } else { LINK_GAP };
            spans.push(Span::raw(gap));
            x += gap.len() as u16;

            link_offsets.push(x);
            spans.push(Span::styled(link.label, theme.muted_style()));
            x += link.label.len() as u16;
        }

        let footer_line = Line::from(vec![
            Span::styled(
                "Built by Your Team. The source code is available on ",
                theme.muted_style(),
            ),
            Span::styled(
                "GitHub",
                theme
                    .text_style()
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::styled(".", theme.muted_style()),
        ]);

        tracing::debug!(theme = %theme.name, "built layout chrome");

        Self {
            brand,
            links,
            cta,
            header_line: Line::from(spans),
            cta_span: cta.to_span(theme),
            footer_line,
            link_offsets,
        }
    }

    /// Number of focusable targets: the brand mark plus every link.
    pub fn target_count(&self) -> usize {
        1 + self.links.len()
    }

    /// Focusable target by index; 0 is the brand mark.
    pub fn target(&self, idx: usize) -> Option<NavLink> {
        match idx {
            0 => Some(self.brand),
            n => self.links.get(n - 1).copied(),
        }
    }

    /// Cell position of a focusable target inside the header.
    pub fn target_position(&self, idx: usize, header: Rect) -> Option<(u16, u16)> {
        self.link_offsets
            .get(idx)
            .map(|offset| (header.x + offset, header.y))
    }

    /// Paints the header into its region.
    pub fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(self.cta.width() + 1)])
            .split(inner);

        frame.render_widget(Paragraph::new(self.header_line.clone()), chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::from(self.cta_span.clone())).alignment(Alignment::Left),
            chunks[1],
        );
    }

    /// Paints the footer into its region.
    pub fn render_footer(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        frame.render_widget(
            Paragraph::new(self.footer_line.clone()).alignment(Alignment::Center),
            inner,
        );
    }
}
