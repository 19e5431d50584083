use anyhow::{Result, anyhow};
use macroquad::prelude::{KeyCode, MouseButton};
use serde::{Deserialize, Serialize};

/// Resolved identity of a tracked input: a keyboard key or a mouse
/// button, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    Key(KeyCode),
    Mouse(MouseButton),
}

/// Input binding as written in the config file, using string names
/// ("Z", "Space", "MouseLeft"; "M1"/"M2"/"M3" are accepted aliases for
/// the mouse buttons).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct InputBinding(pub String);

impl InputBinding {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Resolve to a concrete key or mouse button. Unknown names are a
    /// configuration error and must fail initialization.
    pub fn resolve(&self) -> Result<InputId> {
        if let Some(button) = string_to_mouse_button(&self.0) {
            return Ok(InputId::Mouse(button));
        }
        string_to_keycode(&self.0)
            .map(InputId::Key)
            .ok_or_else(|| anyhow!("unknown input binding '{}'", self.0))
    }
}

fn string_to_mouse_button(name: &str) -> Option<MouseButton> {
    match name {
        "MouseLeft" | "M1" => Some(MouseButton::Left),
        "MouseRight" | "M2" => Some(MouseButton::Right),
        "MouseMiddle" | "M3" => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Convert a string name to a KeyCode.
fn string_to_keycode(name: &str) -> Option<KeyCode> {
    let key = match name {
        "Space" => KeyCode::Space,
        "Apostrophe" => KeyCode::Apostrophe,
        "Comma" => KeyCode::Comma,
        "Minus" => KeyCode::Minus,
        "Period" => KeyCode::Period,
        "Slash" => KeyCode::Slash,
        "Key0" | "0" => KeyCode::Key0,
        "Key1" | "1" => KeyCode::Key1,
        "Key2" | "2" => KeyCode::Key2,
        "Key3" | "3" => KeyCode::Key3,
        "Key4" | "4" => KeyCode::Key4,
        "Key5" | "5" => KeyCode::Key5,
        "Key6" | "6" => KeyCode::Key6,
        "Key7" | "7" => KeyCode::Key7,
        "Key8" | "8" => KeyCode::Key8,
        "Key9" | "9" => KeyCode::Key9,
        "Semicolon" => KeyCode::Semicolon,
        "Equal" => KeyCode::Equal,
        "A" => KeyCode::A,
        "B" => KeyCode::B,
        "C" => KeyCode::C,
        "D" => KeyCode::D,
        "E" => KeyCode::E,
        "F" => KeyCode::F,
        "G" => KeyCode::G,
        "H" => KeyCode::H,
        "I" => KeyCode::I,
        "J" => KeyCode::J,
        "K" => KeyCode::K,
        "L" => KeyCode::L,
        "M" => KeyCode::M,
        "N" => KeyCode::N,
        "O" => KeyCode::O,
        "P" => KeyCode::P,
        "Q" => KeyCode::Q,
        "R" => KeyCode::R,
        "S" => KeyCode::S,
        "T" => KeyCode::T,
        "U" => KeyCode::U,
        "V" => KeyCode::V,
        "W" => KeyCode::W,
        "X" => KeyCode::X,
        "Y" => KeyCode::Y,
        "Z" => KeyCode::Z,
        "LeftBracket" => KeyCode::LeftBracket,
        "Backslash" => KeyCode::Backslash,
        "RightBracket" => KeyCode::RightBracket,
        "GraveAccent" => KeyCode::GraveAccent,
        "Escape" => KeyCode::Escape,
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Insert" => KeyCode::Insert,
        "Delete" => KeyCode::Delete,
        "Right" => KeyCode::Right,
        "Left" => KeyCode::Left,
        "Down" => KeyCode::Down,
        "Up" => KeyCode::Up,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "CapsLock" => KeyCode::CapsLock,
        "ScrollLock" => KeyCode::ScrollLock,
        "NumLock" => KeyCode::NumLock,
        "PrintScreen" => KeyCode::PrintScreen,
        "Pause" => KeyCode::Pause,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,
        "F10" => KeyCode::F10,
        "F11" => KeyCode::F11,
        "F12" => KeyCode::F12,
        "Kp0" => KeyCode::Kp0,
        "Kp1" => KeyCode::Kp1,
        "Kp2" => KeyCode::Kp2,
        "Kp3" => KeyCode::Kp3,
        "Kp4" => KeyCode::Kp4,
        "Kp5" => KeyCode::Kp5,
        "Kp6" => KeyCode::Kp6,
        "Kp7" => KeyCode::Kp7,
        "Kp8" => KeyCode::Kp8,
        "Kp9" => KeyCode::Kp9,
        "KpDecimal" => KeyCode::KpDecimal,
        "KpDivide" => KeyCode::KpDivide,
        "KpMultiply" => KeyCode::KpMultiply,
        "KpSubtract" => KeyCode::KpSubtract,
        "KpAdd" => KeyCode::KpAdd,
        "KpEnter" => KeyCode::KpEnter,
        "KpEqual" => KeyCode::KpEqual,
        "LeftShift" => KeyCode::LeftShift,
        "LeftControl" => KeyCode::LeftControl,
        "LeftAlt" => KeyCode::LeftAlt,
        "LeftSuper" => KeyCode::LeftSuper,
        "RightShift" => KeyCode::RightShift,
        "RightControl" => KeyCode::RightControl,
        "RightAlt" => KeyCode::RightAlt,
        "RightSuper" => KeyCode::RightSuper,
        "Menu" => KeyCode::Menu,
        _ => return None,
    };
    Some(key)
}
