//! Navigation state: the active path plus browser-style history.
//!
//! Provides the "back and forward" model a browser gives a client-side
//! router. Resolution never looks at the history; it only reads
//! [`NavigationState::current_path`].

/// A location supplied from outside the app (command line, location bar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
}

impl Location {
    /// Parses a raw location into the path the router resolves.
    ///
    /// Trims surrounding whitespace and drops any `?query` or `#fragment`.
    /// An empty path becomes `/`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let end = trimmed.find(['?', '#']).unwrap_or(trimmed.len());
        let path = &trimmed[..end];

        Self {
            path: if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            },
        }
    }

    pub fn into_path(self) -> String {
        self.path
    }
}

/// The app's single navigation state.
#[derive(Debug, Clone)]
pub struct NavigationState {
    current_path: String,
    back: Vec<String>,
    forward: Vec<String>,
}

impl NavigationState {
    /// Creates navigation state positioned at `initial_path` with no history.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            current_path: initial_path.into(),
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// The path the content region shows.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Moves to `path`, saving the current path for `back`.
    ///
    /// Clears forward history. Navigating to the current path leaves
    /// history untouched.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path == self.current_path {
            return;
        }

        self.back
            .push(std::mem::replace(&mut self.current_path, path));
        self.forward.clear();
    }

    /// Steps back in history, returns false if there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        if let Some(prev) = self.back.pop() {
            self.forward
                .push(std::mem::replace(&mut self.current_path, prev));
            true
        } else {
            false
        }
    }

    /// Steps forward in history, returns false if there is nothing ahead.
    pub fn forward(&mut self) -> bool {
        if let Some(next) = self.forward.pop() {
            self.back
                .push(std::mem::replace(&mut self.current_path, next));
            true
        } else {
            false
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new("/")
    }
}
