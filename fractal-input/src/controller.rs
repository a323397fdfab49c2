use glam::{DVec2, Vec3};

use crate::config::InputConfig;
use crate::event::InputState;
use crate::{key, mouse_button};

/// What the first-person camera should do this frame. The camera itself
/// (transform, view and projection) lives with the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraIntent {
    /// Local-space offset: +X right, +Y up, -Z forward.
    pub translation: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub jump_requested: bool,
}

/// Maps WASD/QE and left-drag onto camera movement.
#[derive(Debug, Clone)]
pub struct FlyController {
    pub move_speed: f32,
    pub look_speed: f32,
    anchor: Option<DVec2>,
}

const MOVE_BINDINGS: [(i32, Vec3); 6] = [
    (key::W, Vec3::NEG_Z),
    (key::S, Vec3::Z),
    (key::A, Vec3::NEG_X),
    (key::D, Vec3::X),
    (key::Q, Vec3::NEG_Y),
    (key::E, Vec3::Y),
];

impl FlyController {
    pub fn new(move_speed: f32, look_speed: f32) -> Self {
        Self {
            move_speed,
            look_speed,
            anchor: None,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(config.move_speed, config.look_speed)
    }

    /// Read predicates after `InputState::end_frame` and produce this frame's intent.
    pub fn update(&mut self, input: &InputState, dt: f32) -> CameraIntent {
        let step = self.move_speed * dt;
        let translation = MOVE_BINDINGS
            .iter()
            .filter(|(code, _)| input.keyboard.is_key_down(*code))
            .fold(Vec3::ZERO, |acc, (_, dir)| acc + *dir * step);

        let (yaw, pitch) = if input.mouse.is_button_down(mouse_button::LEFT) {
            let current = input.mouse.position();
            // First frame of a drag only records where it started.
            let anchor = self.anchor.unwrap_or(current);
            let delta = anchor - current;
            self.anchor = Some(current);
            let scale = (self.look_speed * dt) as f64;
            ((delta.x * scale) as f32, (delta.y * scale) as f32)
        } else {
            self.anchor = None;
            (0.0, 0.0)
        };

        CameraIntent {
            translation,
            yaw,
            pitch,
            jump_requested: input.keyboard.is_key_pressed(key::SPACE),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

impl Default for FlyController {
    fn default() -> Self {
        Self::from_config(&InputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::InputEvent;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn press(input: &mut InputState, code: i32) {
        input.apply(&InputEvent::Key { code, down: true });
    }

    // ── Movement ──

    #[test]
    fn test_idle_produces_no_intent() {
        let mut ctl = FlyController::default();
        let mut input = InputState::new();
        input.end_frame();
        assert_eq!(ctl.update(&input, 0.016), CameraIntent::default());
    }

    #[test]
    fn test_forward_scaled_by_speed_and_dt() {
        let mut ctl = FlyController::new(5.0, 0.5);
        let mut input = InputState::new();
        press(&mut input, key::W);
        input.end_frame();
        let intent = ctl.update(&input, 0.5);
        assert!(approx_eq(intent.translation.z, -2.5));
        assert!(approx_eq(intent.translation.x, 0.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut ctl = FlyController::new(1.0, 1.0);
        let mut input = InputState::new();
        press(&mut input, key::A);
        press(&mut input, key::D);
        press(&mut input, key::E);
        input.end_frame();
        let intent = ctl.update(&input, 1.0);
        assert!(approx_eq(intent.translation.x, 0.0));
        assert!(approx_eq(intent.translation.y, 1.0));
    }

    #[test]
    fn test_jump_only_on_press_edge() {
        let mut ctl = FlyController::default();
        let mut input = InputState::new();
        press(&mut input, key::SPACE);
        input.end_frame();
        assert!(ctl.update(&input, 0.016).jump_requested);
        input.end_frame();
        assert!(!ctl.update(&input, 0.016).jump_requested);
    }

    // ── Look ──

    #[test]
    fn test_drag_first_frame_records_anchor() {
        let mut ctl = FlyController::new(1.0, 1.0);
        let mut input = InputState::new();
        input.apply(&InputEvent::CursorMoved { x: 100.0, y: 50.0 });
        input.apply(&InputEvent::MouseButton { button: mouse_button::LEFT, down: true });
        input.end_frame();
        let intent = ctl.update(&input, 1.0);
        assert_eq!((intent.yaw, intent.pitch), (0.0, 0.0));
        assert!(ctl.is_dragging());
    }

    #[test]
    fn test_drag_rotates_against_cursor_motion() {
        let mut ctl = FlyController::new(1.0, 0.5);
        let mut input = InputState::new();
        input.apply(&InputEvent::MouseButton { button: mouse_button::LEFT, down: true });
        input.end_frame();
        ctl.update(&input, 1.0);
        input.apply(&InputEvent::CursorMoved { x: 10.0, y: -4.0 });
        input.end_frame();
        let intent = ctl.update(&input, 0.5);
        assert!(approx_eq(intent.yaw, -2.5));
        assert!(approx_eq(intent.pitch, 1.0));
    }

    #[test]
    fn test_release_clears_anchor() {
        let mut ctl = FlyController::default();
        let mut input = InputState::new();
        input.apply(&InputEvent::MouseButton { button: mouse_button::LEFT, down: true });
        input.end_frame();
        ctl.update(&input, 0.016);
        input.apply(&InputEvent::MouseButton { button: mouse_button::LEFT, down: false });
        input.end_frame();
        ctl.update(&input, 0.016);
        assert!(!ctl.is_dragging());
    }
}
