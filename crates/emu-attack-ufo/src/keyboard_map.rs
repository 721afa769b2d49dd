//! Host keyboard and mouse → cabinet button mapping.
//!
//! Several keys reach each button so the common arcade-panel layouts and
//! plain keyboards both work.

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::input::Button;

/// Map a host key to a cabinet button.
///
/// Returns `None` for unmapped keys.
#[must_use]
pub fn map_keycode(key: KeyCode) -> Option<Button> {
    match key {
        KeyCode::Numpad0
        | KeyCode::Numpad1
        | KeyCode::Numpad8
        | KeyCode::Space
        | KeyCode::ArrowUp
        | KeyCode::KeyW
        | KeyCode::KeyP
        | KeyCode::Insert
        | KeyCode::Digit1
        | KeyCode::Digit8 => Some(Button::Fire),

        KeyCode::Numpad5
        | KeyCode::Numpad3
        | KeyCode::KeyC
        | KeyCode::Digit3
        | KeyCode::Digit5
        | KeyCode::PageDown
        | KeyCode::NumpadAdd
        | KeyCode::Equal
        | KeyCode::F1
        | KeyCode::AltLeft
        | KeyCode::AltRight => Some(Button::Coin),

        KeyCode::Numpad4 | KeyCode::KeyA | KeyCode::KeyL | KeyCode::ArrowLeft => {
            Some(Button::Left)
        }

        KeyCode::Numpad6 | KeyCode::KeyD | KeyCode::Quote | KeyCode::ArrowRight => {
            Some(Button::Right)
        }

        KeyCode::Enter
        | KeyCode::NumpadEnter
        | KeyCode::KeyS
        | KeyCode::ArrowDown
        | KeyCode::Numpad2
        | KeyCode::Digit2 => Some(Button::Start),

        _ => None,
    }
}

/// Map a mouse button: left inserts a coin, right presses start.
#[must_use]
pub fn map_mouse_button(button: MouseButton) -> Option<Button> {
    match button {
        MouseButton::Left => Some(Button::Coin),
        MouseButton::Right => Some(Button::Start),
        _ => None,
    }
}
