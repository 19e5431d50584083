use macroquad::prelude::{is_key_down, is_mouse_button_down};

use crate::config::binding::InputId;
use crate::traits::input::InputSource;

/// Live key/mouse polling through macroquad.
///
/// Only sees input while the overlay window has focus; global hooks
/// are a platform concern outside this crate.
pub struct LiveInput;

impl LiveInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for LiveInput {
    fn is_active(&self, id: InputId) -> bool {
        match id {
            InputId::Key(key) => is_key_down(key),
            InputId::Mouse(button) => is_mouse_button_down(button),
        }
    }
}
