use crossterm::event::{KeyCode, KeyModifiers};

use super::state::App;

/// Actions the TUI can perform in response to input.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Guest,
    Load,
    Save,
    Input(char),
    Backspace,
    Focus,
    Unfocus,
    ToggleHelp,
}

/// Map a key press to an Action.
pub fn handle_key(app: &App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // Help overlay captures all keys except close
    if app.show_help {
        return match code {
            KeyCode::Char('?') | KeyCode::Esc => Action::ToggleHelp,
            _ => Action::None,
        };
    }

    // Address box focused: printable keys are text.
    if app.editing {
        return match code {
            KeyCode::Enter => Action::Load,
            KeyCode::Esc | KeyCode::Tab => Action::Unfocus,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        };
    }

    match code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('g') => Action::Guest,
        KeyCode::Enter => Action::Load,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Tab => Action::Focus,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}
