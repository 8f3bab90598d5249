use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use git_recent_core::{action::Action, state::Mode};

/// Resolve a key event into an Action based on current mode
pub fn resolve_action(key: KeyEvent, mode: &Mode) -> Option<Action> {
    match mode {
        Mode::Browsing => resolve_browsing_key(key),
        Mode::Filtering => resolve_filtering_key(key),
        Mode::Terminated(_) => None,
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn resolve_browsing_key(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if has_command_modifier(key) {
        return None;
    }
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Char('/') => Some(Action::StartFilter),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Confirm),
        _ => None,
    }
}

fn resolve_filtering_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace => Some(Action::FilterPop),
        KeyCode::Char(c) if !has_command_modifier(key) => Some(Action::FilterPush(c)),
        _ => None,
    }
}
