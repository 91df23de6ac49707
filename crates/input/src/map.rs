//! Key mapping from terminal events to session actions.

use crate::types::{PanDirection, SimAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to session actions.
///
/// Lower-case `l` reloads the config, so vi-style panning uses upper-case
/// `H`/`J`/`K`/`L` next to the arrow keys.
pub fn handle_key_event(key: KeyEvent) -> Option<SimAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(SimAction::Quit),

        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
            Some(SimAction::TogglePause)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SimAction::Randomize),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(SimAction::SaveConfig),
        KeyCode::Char('l') => Some(SimAction::ReloadConfig),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(SimAction::RegenerateConfig),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(SimAction::ToggleBorders),

        // Camera
        KeyCode::Left | KeyCode::Char('H') => Some(SimAction::Pan(PanDirection::Left)),
        KeyCode::Right | KeyCode::Char('L') => Some(SimAction::Pan(PanDirection::Right)),
        KeyCode::Up | KeyCode::Char('K') => Some(SimAction::Pan(PanDirection::Up)),
        KeyCode::Down | KeyCode::Char('J') => Some(SimAction::Pan(PanDirection::Down)),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || handle_key_event(key) == Some(SimAction::Quit)
}
