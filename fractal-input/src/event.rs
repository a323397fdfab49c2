use serde::{Deserialize, Serialize};

use crate::config::InputConfig;
use crate::keyboard::Keyboard;
use crate::mouse::Mouse;

/// A raw input report from any platform source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Key { code: i32, down: bool },
    MouseButton { button: i32, down: bool },
    CursorMoved { x: f64, y: f64 },
}

/// Keyboard and mouse owned together. Every event source (GLFW callbacks,
/// DOM listeners, terminal events, scripts) feeds this and nothing else.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: Keyboard,
    pub mouse: Mouse,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_keys: usize, num_mouse_buttons: usize) -> Self {
        Self {
            keyboard: Keyboard::with_capacity(num_keys),
            mouse: Mouse::with_capacity(num_mouse_buttons),
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::with_capacity(config.keyboard_buttons, config.mouse_buttons)
    }

    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { code, down } => self.keyboard.handle_key_event(code, down),
            InputEvent::MouseButton { button, down } => {
                self.mouse.handle_button_event(button, down)
            }
            InputEvent::CursorMoved { x, y } => self.mouse.handle_move(x, y),
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Frame boundary for both devices.
    pub fn end_frame(&mut self) {
        self.keyboard.update();
        self.mouse.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{key, mouse_button};

    #[test]
    fn test_apply_dispatches_by_kind() {
        let mut input = InputState::new();
        input.apply_all(&[
            InputEvent::Key { code: key::A, down: true },
            InputEvent::MouseButton { button: mouse_button::RIGHT, down: true },
            InputEvent::CursorMoved { x: 3.0, y: -2.0 },
        ]);
        assert!(input.keyboard.is_key_pressed(key::A));
        assert!(input.mouse.is_button_pressed(mouse_button::RIGHT));
        assert!(!input.keyboard.is_key_down(mouse_button::RIGHT));
        assert_eq!(input.mouse.x(), 3.0);
        assert_eq!(input.mouse.y(), -2.0);
    }

    #[test]
    fn test_end_frame_updates_both_devices() {
        let mut input = InputState::new();
        input.apply(&InputEvent::Key { code: key::S, down: true });
        input.apply(&InputEvent::MouseButton { button: mouse_button::LEFT, down: true });
        input.apply(&InputEvent::CursorMoved { x: 5.0, y: 5.0 });
        input.end_frame();
        input.end_frame();
        assert!(input.keyboard.is_key_held(key::S));
        assert!(input.mouse.is_button_held(mouse_button::LEFT));
        assert_eq!(input.mouse.delta_x(), 0.0);
    }

    #[test]
    fn test_with_capacity_bounds_devices() {
        let mut input = InputState::with_capacity(16, 2);
        input.apply(&InputEvent::Key { code: key::W, down: true });
        input.apply(&InputEvent::MouseButton { button: mouse_button::MIDDLE, down: true });
        assert!(!input.keyboard.is_key_down(key::W));
        assert!(!input.mouse.is_button_down(mouse_button::MIDDLE));
        assert_eq!(input.keyboard.len(), 16);
        assert_eq!(input.mouse.len(), 2);
    }

    #[test]
    fn test_event_toml_shape() {
        #[derive(Deserialize)]
        struct Wrapper {
            events: Vec<InputEvent>,
        }
        let src = r#"
            events = [
                { kind = "key", code = 87, down = true },
                { kind = "mouse_button", button = 0, down = false },
                { kind = "cursor_moved", x = 1.5, y = 2.0 },
            ]
        "#;
        let parsed: Wrapper = toml::from_str(src).unwrap();
        assert_eq!(
            parsed.events,
            vec![
                InputEvent::Key { code: 87, down: true },
                InputEvent::MouseButton { button: 0, down: false },
                InputEvent::CursorMoved { x: 1.5, y: 2.0 },
            ]
        );
    }
}
