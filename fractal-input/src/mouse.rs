use std::ops::{Deref, DerefMut};

use glam::DVec2;

use crate::device::InputDevice;

pub const DEFAULT_BUTTON_COUNT: usize = 8;

/// Mouse buttons plus cursor position and per-frame motion.
#[derive(Debug, Clone)]
pub struct Mouse {
    device: InputDevice,
    x: f64,
    y: f64,
    last_x: f64,
    last_y: f64,
    delta_x: f64,
    delta_y: f64,
    received_movement: bool,
}

impl Mouse {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUTTON_COUNT)
    }

    pub fn with_capacity(num_buttons: usize) -> Self {
        Self {
            device: InputDevice::new(num_buttons),
            x: 0.0,
            y: 0.0,
            last_x: 0.0,
            last_y: 0.0,
            delta_x: 0.0,
            delta_y: 0.0,
            received_movement: false,
        }
    }

    /// Record a cursor position. The delta is measured against the previous
    /// report, so several moves in one frame leave only the last step.
    pub fn handle_move(&mut self, x: f64, y: f64) {
        self.received_movement = true;
        self.last_x = self.x;
        self.last_y = self.y;
        self.delta_x = x - self.last_x;
        self.delta_y = y - self.last_y;
        self.x = x;
        self.y = y;
    }

    /// Frame boundary for buttons and motion. Without movement this frame the
    /// delta drops to zero.
    pub fn update(&mut self) {
        self.device.update();
        if !self.received_movement {
            self.last_x = self.x;
            self.last_y = self.y;
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
        self.received_movement = false;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn delta_x(&self) -> f64 {
        self.delta_x
    }

    pub fn delta_y(&self) -> f64 {
        self.delta_y
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn delta(&self) -> DVec2 {
        DVec2::new(self.delta_x, self.delta_y)
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Mouse {
    type Target = InputDevice;

    fn deref(&self) -> &InputDevice {
        &self.device
    }
}

impl DerefMut for Mouse {
    fn deref_mut(&mut self) -> &mut InputDevice {
        &mut self.device
    }
}
