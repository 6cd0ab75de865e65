//! Keybindings for the cih TUI.
//!
//! One table applies on every page while the app is in normal mode.
//! Location-bar editing is handled by the app directly and does not go
//! through this table.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Chrome focus
    FocusNext,
    FocusPrev,
    Activate,

    // History
    Back,
    Forward,

    // Location bar
    OpenLocation,

    // Jump straight to the n-th chrome target (1-based)
    JumpToLink(usize),
}

/// Normal-mode keybindings shared by every page.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    /// Resolve a key press to an action.
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        self.global.get(&key).cloned()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        // Focus - vim style and arrows
        global.insert(key('l'), Action::FocusNext);
        global.insert(key('h'), Action::FocusPrev);
        global.insert(key_code(KeyCode::Right), Action::FocusNext);
        global.insert(key_code(KeyCode::Left), Action::FocusPrev);
        global.insert(key_code(KeyCode::Tab), Action::FocusNext);
        global.insert(key_code(KeyCode::BackTab), Action::FocusPrev);
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::FocusPrev,
        );
        global.insert(key_code(KeyCode::Enter), Action::Activate);

        // History
        global.insert(key_code(KeyCode::Backspace), Action::Back);
        global.insert(key_code(KeyCode::Esc), Action::Back);
        global.insert(key('['), Action::Back);
        global.insert(key(']'), Action::Forward);

        // Location bar
        global.insert(key('g'), Action::OpenLocation);
        global.insert(key(':'), Action::OpenLocation);

        global.insert(key('q'), Action::Quit);

        // Jump to chrome targets (1-9)
        for n in 1..=9u8 {
            global.insert(key(char::from(b'0' + n)), Action::JumpToLink(n as usize));
        }

        Self { global }
    }
}

/// Helper to create a KeyEvent from a character.
fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Helper to create a KeyEvent from a KeyCode.
fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_is_clone_and_eq() {
        let action = Action::JumpToLink(2);
        assert_eq!(action.clone(), action);
    }

    #[test]
    fn keybindings_default_has_focus_keys() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.resolve(key('l')), Some(Action::FocusNext));
        assert_eq!(bindings.resolve(key('h')), Some(Action::FocusPrev));
        assert_eq!(
            bindings.resolve(key_code(KeyCode::Tab)),
            Some(Action::FocusNext)
        );
        assert_eq!(
            bindings.resolve(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::FocusPrev)
        );
        assert_eq!(
            bindings.resolve(key_code(KeyCode::Enter)),
            Some(Action::Activate)
        );
    }

    #[test]
    fn keybindings_default_has_history_keys() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.resolve(key_code(KeyCode::Backspace)),
            Some(Action::Back)
        );
        assert_eq!(
            bindings.resolve(key_code(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(bindings.resolve(key(']')), Some(Action::Forward));
    }

    #[test]
    fn keybindings_default_has_location_and_quit_keys() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.resolve(key('g')), Some(Action::OpenLocation));
        assert_eq!(bindings.resolve(key(':')), Some(Action::OpenLocation));
        assert_eq!(bindings.resolve(key('q')), Some(Action::Quit));
    }

    #[test]
    fn keybindings_default_has_jump_keys() {
        let bindings = KeyBindings::default();

        for n in 1..=9u8 {
            let c = char::from(b'0' + n);
            assert_eq!(
                bindings.resolve(key(c)),
                Some(Action::JumpToLink(n as usize))
            );
        }
    }

    #[test]
    fn keybindings_resolve_returns_none_for_unmapped_keys() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.resolve(key('z')), None);
        assert_eq!(bindings.resolve(key('0')), None);
        assert_eq!(bindings.resolve(key_code(KeyCode::F(1))), None);
    }
}
