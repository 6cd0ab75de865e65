//! Terminal UI for the CIH starter app.
//!
//! A router shell, a layout with persistent navigation chrome, and the
//! Home, About and Dashboard pages plus a 404 fallback, built on ratatui
//! and crossterm.

mod app;
mod input;
mod keybindings;
mod layout;
mod navigation;
mod routes;
mod snapshot;
mod terminal;
mod theme;
mod views;
mod widgets;

pub use app::{App, Mode};
pub use input::LocationInput;
pub use keybindings::{Action, KeyBindings};
pub use layout::{Chrome, NavLink, Regions, split};
pub use navigation::{Location, NavigationState};
pub use routes::{RegistryError, Route, RoutePattern, ViewRegistry, ViewRegistryBuilder, WILDCARD};
pub use snapshot::{render_rows, render_to_string};
pub use terminal::{CihTerminal, TerminalSession, install_panic_hook};
pub use theme::{THEME_NAMES, Theme, ThemeError, cih_default, cih_light, theme_by_name};
pub use views::{
    DASHBOARD_STATS, FEATURES, NOT_FOUND_HEADING, NOT_FOUND_MESSAGE, Page, QUICK_ACTIONS,
    ViewRenderer, recent_activity,
};
pub use widgets::{ActivityEvent, Button, ButtonSize, ButtonVariant, FeatureCard, StatCard, Trend};
