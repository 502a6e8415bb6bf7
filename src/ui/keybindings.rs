// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions derived from key events outside the path editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Up,
    Down,
    Activate,
    Select,
    Parent,
    EditPath,
    Refresh,
    ToggleDrives,
    Analyze,
    ToggleExcludeTests,
    ToggleExcludeDocs,
    ToggleExcludeDependencies,
    ToggleTheme,
    Quit,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: &KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Down => Action::Down,
        KeyCode::Up => Action::Up,
        KeyCode::Enter | KeyCode::Right => Action::Activate,
        KeyCode::Char(' ') => Action::Select,
        KeyCode::Left | KeyCode::Backspace => Action::Parent,
        KeyCode::Char('e') => Action::EditPath,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('d') => Action::ToggleDrives,
        KeyCode::Char('a') => Action::Analyze,
        KeyCode::Char('1') => Action::ToggleExcludeTests,
        KeyCode::Char('2') => Action::ToggleExcludeDocs,
        KeyCode::Char('3') => Action::ToggleExcludeDependencies,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}
