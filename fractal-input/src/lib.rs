//! Fractal input core
//!
//! Per-frame edge detection for keyboard and mouse buttons, shared by the
//! native (GLFW) host, the WebAssembly runtime, and the CLI tools. Platform
//! event sources feed an [`InputState`]; the application loop calls
//! [`InputState::end_frame`] once per frame and then reads predicates.

pub mod button;
pub mod config;
pub mod controller;
pub mod device;
pub mod event;
pub mod key;
pub mod keyboard;
pub mod mouse;

pub use button::{ButtonArray, ButtonPhase, ButtonState};
pub use config::InputConfig;
pub use controller::{CameraIntent, FlyController};
pub use device::InputDevice;
pub use event::{InputEvent, InputState};
pub use keyboard::Keyboard;
pub use mouse::Mouse;

/// Mouse button indices in GLFW numbering.
pub mod mouse_button {
    pub const LEFT: i32 = 0;
    pub const RIGHT: i32 = 1;
    pub const MIDDLE: i32 = 2;
    pub const LAST: i32 = 7;
}
