use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::ActionId;
use crate::panel::Direction;

use super::events::Intent;

pub fn map_key_to_intent(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::MoveSelection(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::MoveSelection(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::MoveSelection(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Intent::MoveSelection(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::PressSelected),
        KeyCode::Char('p') => Some(Intent::Trigger(ActionId::PlayPause)),
        KeyCode::Char(',') => Some(Intent::Trigger(ActionId::SeekBack10s)),
        KeyCode::Char('.') => Some(Intent::Trigger(ActionId::SeekForward10s)),
        KeyCode::Char('m') => Some(Intent::Trigger(ActionId::Mute)),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Intent::Trigger(ActionId::VolumeUp5)),
        KeyCode::Char('-') => Some(Intent::Trigger(ActionId::VolumeDown5)),
        KeyCode::Char('f') => Some(Intent::Trigger(ActionId::ToggleFullscreen)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}
