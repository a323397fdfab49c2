use std::ops::{Deref, DerefMut};

use crate::device::InputDevice;

/// Key codes in the GLFW numbering top out at 348 (`MENU`).
pub const DEFAULT_KEY_COUNT: usize = 512;

/// Keyboard device indexed by key code.
#[derive(Debug, Clone)]
pub struct Keyboard {
    device: InputDevice,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_KEY_COUNT)
    }

    pub fn with_capacity(num_keys: usize) -> Self {
        Self {
            device: InputDevice::new(num_keys),
        }
    }

    pub fn handle_key_event(&mut self, key: i32, is_down: bool) {
        self.device.handle_button_event(key, is_down);
    }

    pub fn is_key_down(&self, key: i32) -> bool {
        self.device.is_button_down(key)
    }

    pub fn is_key_up(&self, key: i32) -> bool {
        self.device.is_button_up(key)
    }

    pub fn is_key_pressed(&self, key: i32) -> bool {
        self.device.is_button_pressed(key)
    }

    pub fn is_key_released(&self, key: i32) -> bool {
        self.device.is_button_released(key)
    }

    pub fn is_key_held(&self, key: i32) -> bool {
        self.device.is_button_held(key)
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Keyboard {
    type Target = InputDevice;

    fn deref(&self) -> &InputDevice {
        &self.device
    }
}

impl DerefMut for Keyboard {
    fn deref_mut(&mut self) -> &mut InputDevice {
        &mut self.device
    }
}
