use crate::button::{ButtonArray, ButtonPhase, ButtonState};

/// A fixed set of buttons addressed by platform code (key code or mouse
/// button index). Out-of-range codes are ignored on write and read as false.
#[derive(Debug, Clone)]
pub struct InputDevice {
    buttons: ButtonArray,
}

impl InputDevice {
    pub fn new(num_buttons: usize) -> Self {
        Self {
            buttons: ButtonArray::new(num_buttons),
        }
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Deliver a raw down/up report for `button`.
    pub fn handle_button_event(&mut self, button: i32, is_down: bool) {
        match self.buttons.get_mut(button) {
            Some(state) => state.apply(is_down),
            None => log::trace!(
                "Ignoring event for button {button} (device has {})",
                self.buttons.len()
            ),
        }
    }

    /// Frame boundary: call once per frame after all events were delivered.
    pub fn update(&mut self) {
        for state in self.buttons.iter_mut() {
            state.commit_frame();
        }
    }

    fn query(&self, button: i32, f: impl FnOnce(&ButtonState) -> bool) -> bool {
        self.buttons.get(button).is_some_and(f)
    }

    pub fn is_button_down(&self, button: i32) -> bool {
        self.query(button, ButtonState::is_down)
    }

    pub fn is_button_up(&self, button: i32) -> bool {
        self.query(button, ButtonState::is_up)
    }

    pub fn is_button_pressed(&self, button: i32) -> bool {
        self.query(button, ButtonState::was_pressed)
    }

    pub fn is_button_released(&self, button: i32) -> bool {
        self.query(button, ButtonState::was_released)
    }

    pub fn is_button_held(&self, button: i32) -> bool {
        self.query(button, ButtonState::is_held)
    }

    pub fn phase(&self, button: i32) -> Option<ButtonPhase> {
        self.buttons.get(button).map(ButtonState::phase)
    }

    pub fn state(&self, button: i32) -> Option<&ButtonState> {
        self.buttons.get(button)
    }
}
