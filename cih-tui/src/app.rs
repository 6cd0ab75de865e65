//! Main application struct and event loop for the cih TUI.
//!
//! `App` is the layout composer. It owns the navigation state, the route
//! table, the chrome and the page currently shown in the content region.
//! The chrome is built once in the constructor; the content region is
//! recomputed on every navigation event and at no other time.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::input::LocationInput;
use crate::keybindings::{Action, KeyBindings};
use crate::layout::{self, Chrome};
use crate::navigation::{Location, NavigationState};
use crate::routes::ViewRegistry;
use crate::views::Page;
use crate::widgets::LocationBarWidget;
use crate::{CihTerminal, TerminalSession, Theme, cih_default};

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys go through the keybinding tables.
    #[default]
    Normal,
    /// Keys edit the location bar.
    Location,
}

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub mode: Mode,
    pub location: LocationInput,
    /// Index of the focused chrome target (0 is the brand mark).
    pub focus: usize,
    pub running: bool,
    navigation: NavigationState,
    registry: ViewRegistry,
    chrome: Chrome,
    content: Page,
    chrome_builds: u32,
    content_builds: u32,
}

impl App {
    /// Creates an app at `/` with the standard routes and default theme.
    pub fn new() -> Self {
        Self::with_options(ViewRegistry::standard(), cih_default(), "/")
    }

    /// Creates an app with the standard routes, starting at `location`.
    pub fn at(location: &str) -> Self {
        Self::with_options(ViewRegistry::standard(), cih_default(), location)
    }

    /// Creates an app from an explicit route table, theme and initial location.
    pub fn with_options(registry: ViewRegistry, theme: Theme, location: &str) -> Self {
        let initial = Location::parse(location).into_path();
        let chrome = Chrome::build(&theme);

        let mut app = Self {
            keybindings: KeyBindings::default(),
            theme,
            mode: Mode::Normal,
            location: LocationInput::default(),
            focus: 0,
            running: true,
            navigation: NavigationState::new(initial),
            registry,
            chrome,
            content: Page::default(),
            chrome_builds: 1,
            content_builds: 0,
        };
        app.refresh_content();
        tracing::info!(path = %app.navigation.current_path(), "app started");
        app
    }

    /// The page in the content region.
    pub fn page(&self) -> Page {
        self.content
    }

    pub fn current_path(&self) -> &str {
        self.navigation.current_path()
    }


    /// How many times the chrome was built. Always 1.
    pub fn chrome_builds(&self) -> u32 {
        self.chrome_builds
    }

    /// How many times the content region was recomputed.
    pub fn content_builds(&self) -> u32 {
        self.content_builds
    }

    /// Navigates to a location and recomputes the content region.
    pub fn navigate(&mut self, location: &str) {
        let path = Location::parse(location).into_path();
        tracing::debug!(from = %self.navigation.current_path(), to = %path, "navigate");
        self.navigation.navigate(path);
        self.refresh_content();
    }

    /// Steps back in history. Returns false if there is no history.
    pub fn back(&mut self) -> bool {
        let moved = self.navigation.back();
        if moved {
            self.refresh_content();
        }
        moved
    }

    /// Steps forward in history. Returns false if there is nothing ahead.
    pub fn forward(&mut self) -> bool {
        let moved = self.navigation.forward();
        if moved {
            self.refresh_content();
        }
        moved
    }

    fn refresh_content(&mut self) {
        self.content = self.registry.resolve(self.navigation.current_path());
        self.content_builds += 1;
        tracing::debug!(
            path = %self.navigation.current_path(),
            page = self.content.name(),
            "content region updated"
        );
    }

    /// Handles a key event.
    ///
    /// Ctrl-C always quits. In location mode keys edit the location bar;
    /// otherwise they are resolved through the keybindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.mode {
            Mode::Location => self.handle_location_key(key),
            Mode::Normal => {
                if let Some(action) = self.keybindings.resolve(key) {
                    self.execute_action(action);
                }
            }
        }
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusNext => {
                self.focus = (self.focus + 1) % self.chrome.target_count();
            }
            Action::FocusPrev => {
                let count = self.chrome.target_count();
                self.focus = (self.focus + count - 1) % count;
            }
            Action::Activate => self.activate(self.focus),
            Action::JumpToLink(n) => {
                if n >= 1 && n <= self.chrome.target_count() {
                    self.focus = n - 1;
                    self.activate(self.focus);
                }
            }
            Action::Back => {
                self.back();
            }
            Action::Forward => {
                self.forward();
            }
            Action::OpenLocation => {
                self.location = LocationInput::with_text(self.navigation.current_path());
                self.mode = Mode::Location;
            }
        }
    }

    /// Follows the chrome target at `idx`.
    fn activate(&mut self, idx: usize) {
        if let Some(link) = self.chrome.target(idx) {
            tracing::debug!(label = link.label, to = link.to, "link activated");
            self.navigate(link.to);
        }
    }

    fn handle_location_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.location.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                let target = std::mem::take(&mut self.location.buffer);
                self.location.clear();
                self.mode = Mode::Normal;
                self.navigate(&target);
            }
            KeyCode::Tab => {
                let registry = &self.registry;
                self.location.complete(registry.paths());
            }
            KeyCode::Backspace => self.location.backspace(),
            KeyCode::Delete => self.location.delete(),
            KeyCode::Left => self.location.move_left(),
            KeyCode::Right => self.location.move_right(),
            KeyCode::Home => self.location.move_to_start(),
            KeyCode::End => self.location.move_to_end(),
            KeyCode::Char(c) => self.location.insert(c),
            _ => {}
        }
    }

    /// Renders the application to the terminal frame.
    ///
    /// Paints the cached chrome, the current page into the content region,
    /// and the location bar.
    pub fn render(&self, frame: &mut Frame) {
        let regions = layout::split(frame.area());

        self.chrome.render_header(frame, regions.header, &self.theme);
        self.content.render(frame, regions.content, &self.theme);
        self.chrome.render_footer(frame, regions.footer, &self.theme);

        match self.mode {
            Mode::Normal => {
                LocationBarWidget::render_idle(
                    frame,
                    regions.location_bar,
                    self.navigation.current_path(),
                    &self.theme,
                );
                if let Some(position) = self.chrome.target_position(self.focus, regions.header) {
                    frame.set_cursor_position(position);
                }
            }
            Mode::Location => {
                LocationBarWidget::render_editing(
                    frame,
                    regions.location_bar,
                    &self.location,
                    &self.theme,
                );
            }
        }
    }

    /// Runs the main event loop.
    ///
    /// The terminal is restored when the session ends, whether the loop
    /// returned normally or with an error.
    pub fn run(&mut self) -> io::Result<()> {
        let mut session = TerminalSession::enter()?;

        let result = self.event_loop(session.terminal_mut());
        let restored = session.close();

        result.and(restored)
    }

    fn event_loop(&mut self, terminal: &mut CihTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
