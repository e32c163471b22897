//! Keybindings for sidenav TUI.
//!
//! Global bindings apply everywhere; view-specific bindings override them
//! while that view is mounted.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::message::{Message, SettingsAction};
use crate::navigation::ViewId;

/// Keybindings with global and view-specific layers.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Global keybindings that apply to all views.
    pub global: HashMap<KeyEvent, Message>,
    /// View-specific keybindings that override global bindings.
    pub view_specific: HashMap<ViewId, HashMap<KeyEvent, Message>>,
}

impl KeyBindings {
    /// Resolve a key press using global bindings only.
    pub fn resolve_global(&self, key: KeyEvent) -> Option<Message> {
        self.global.get(&normalize(key)).copied()
    }

    /// Resolve a key press, view-specific takes precedence over global.
    pub fn resolve(&self, key: KeyEvent, active: Option<ViewId>) -> Option<Message> {
        let key = normalize(key);

        if let Some(view) = active
            && let Some(bindings) = self.view_specific.get(&view)
            && let Some(message) = bindings.get(&key)
        {
            return Some(*message);
        }

        self.global.get(&key).copied()
    }

    /// Add a view-specific keybinding.
    pub fn add_view_binding(&mut self, view: ViewId, key: KeyEvent, message: Message) {
        self.view_specific
            .entry(view)
            .or_default()
            .insert(key, message);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        // Focus - vim style and arrows
        global.insert(key('j'), Message::FocusNext);
        global.insert(key('k'), Message::FocusPrev);
        global.insert(key_code(KeyCode::Down), Message::FocusNext);
        global.insert(key_code(KeyCode::Up), Message::FocusPrev);
        global.insert(key_code(KeyCode::Tab), Message::FocusNext);
        global.insert(key_code(KeyCode::BackTab), Message::FocusPrev);
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Message::FocusPrev,
        );

        // Buttons
        global.insert(key_code(KeyCode::Enter), Message::Press);
        global.insert(key(' '), Message::Press);

        // Quit
        global.insert(key('q'), Message::Quit);
        global.insert(key_code(KeyCode::Esc), Message::Quit);

        // Jump to views (1-3)
        for (i, view) in ViewId::ALL.into_iter().enumerate() {
            if let Some(c) = char::from_digit(i as u32 + 1, 10) {
                global.insert(key(c), Message::Navigate(view));
            }
        }

        let mut bindings = Self {
            global,
            view_specific: HashMap::new(),
        };

        bindings.add_view_binding(
            ViewId::Settings,
            key('u'),
            Message::Settings(SettingsAction::Update),
        );
        bindings.add_view_binding(
            ViewId::Settings,
            key('c'),
            Message::Settings(SettingsAction::ChangeLabel),
        );

        bindings
    }
}

/// Drops event kind and state so lookups only compare code and modifiers.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

/// Helper to create a KeyEvent from a character.
fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Helper to create a KeyEvent from a KeyCode.
fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
