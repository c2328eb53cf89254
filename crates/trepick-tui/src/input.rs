use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use trepick_core::action::Action;
use trepick_core::config::keymap::Keymap;

/// What a key press asks the prompt to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Run a bound action.
    Action(Action),
    /// Abort the session without an answer (Ctrl+C, not remappable).
    Abort,
    /// No action for this key.
    None,
}

/// Maps a key event to an [`InputAction`].
///
/// Ctrl+C always aborts. Every other key is named with [`key_name`] and
/// resolved through the `Keymap`. Release and repeat events are ignored so
/// each physical press moves the cursor once.
pub fn handle_key(key: KeyEvent, keymap: &Keymap) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Abort;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return InputAction::None;
    }

    key_name(key.code)
        .and_then(|name| keymap.action_for_key(&name))
        .map_or(InputAction::None, InputAction::Action)
}

/// Returns the keymap name of a key code, e.g. `"Space"`, `"Esc"` or `"j"`.
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        _ => return None,
    };
    Some(name)
}
