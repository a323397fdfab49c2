//! Fractal native input: C FFI entry points.
//!
//! Compiled as a cdylib and called from the desktop host's GLFW callbacks.
//! Each window owns one input context addressed by an opaque handle. All
//! public functions use `extern "C"` ABI with `#[no_mangle]`.

mod handle;

use fractal_input::{InputDevice, InputEvent, InputState};
use handle::HandleStore;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Global store of input contexts (usually one per window).
static INPUTS: std::sync::LazyLock<Mutex<HandleStore<InputState>>> =
    std::sync::LazyLock::new(|| Mutex::new(HandleStore::new()));

/// GLFW action codes as passed to key and mouse button callbacks.
pub const ACTION_RELEASE: i32 = 0;
pub const ACTION_PRESS: i32 = 1;
pub const ACTION_REPEAT: i32 = 2;

/// Cursor position and last-step motion, returned by value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrCursor {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

fn store() -> MutexGuard<'static, HandleStore<InputState>> {
    INPUTS.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_input_mut(handle: u64, f: impl FnOnce(&mut InputState)) {
    match store().get_mut(handle) {
        Some(input) => f(input),
        None => log::warn!("Unknown input handle {handle}"),
    }
}

fn query(handle: u64, f: impl FnOnce(&InputState) -> bool) -> i32 {
    store().get(handle).map(f).unwrap_or(false) as i32
}

fn query_key(handle: u64, key: i32, f: fn(&InputDevice, i32) -> bool) -> i32 {
    query(handle, |input| f(&input.keyboard, key))
}

fn query_mouse(handle: u64, button: i32, f: fn(&InputDevice, i32) -> bool) -> i32 {
    query(handle, |input| f(&input.mouse, button))
}

// ============================================================
// FFI: Lifecycle
// ============================================================

/// Create an input context. Returns a handle (> 0) on success, 0 if either
/// button count is zero.
#[no_mangle]
pub extern "C" fn fr_input_create(keyboard_buttons: i32, mouse_buttons: i32) -> u64 {
    let _ = env_logger::try_init();

    if keyboard_buttons <= 0 || mouse_buttons <= 0 {
        log::error!(
            "Invalid input context sizes: keyboard={keyboard_buttons} mouse={mouse_buttons}"
        );
        return 0;
    }

    let input = InputState::with_capacity(keyboard_buttons as usize, mouse_buttons as usize);
    let handle = store().insert(input);
    log::info!("Created input context {handle}");
    handle
}

/// Destroy an input context. Unknown handles are ignored.
#[no_mangle]
pub extern "C" fn fr_input_destroy(handle: u64) {
    let mut store = store();
    if store.remove(handle).is_some() {
        log::info!("Destroyed input context {handle} ({} live)", store.len());
    }
}

// ============================================================
// FFI: Event delivery
// ============================================================

/// Forward a GLFW key callback. PRESS and REPEAT count as down.
#[no_mangle]
pub extern "C" fn fr_input_key_event(handle: u64, key: i32, action: i32) {
    let down = action == ACTION_PRESS || action == ACTION_REPEAT;
    with_input_mut(handle, |input| input.apply(&InputEvent::Key { code: key, down }));
}

/// Forward a GLFW mouse button callback. Only PRESS counts as down.
#[no_mangle]
pub extern "C" fn fr_input_mouse_button_event(handle: u64, button: i32, action: i32) {
    let down = action == ACTION_PRESS;
    with_input_mut(handle, |input| {
        input.apply(&InputEvent::MouseButton { button, down })
    });
}

/// Forward a GLFW cursor position callback.
#[no_mangle]
pub extern "C" fn fr_input_cursor_event(handle: u64, x: f64, y: f64) {
    with_input_mut(handle, |input| input.apply(&InputEvent::CursorMoved { x, y }));
}

/// Frame boundary. Call once per frame after `glfwPollEvents`.
#[no_mangle]
pub extern "C" fn fr_input_end_frame(handle: u64) {
    with_input_mut(handle, InputState::end_frame);
}

// ============================================================
// FFI: Keyboard queries (1 = true, 0 = false)
// ============================================================

#[no_mangle]
pub extern "C" fn fr_input_key_down(handle: u64, key: i32) -> i32 {
    query_key(handle, key, InputDevice::is_button_down)
}

#[no_mangle]
pub extern "C" fn fr_input_key_up(handle: u64, key: i32) -> i32 {
    query_key(handle, key, InputDevice::is_button_up)
}

#[no_mangle]
pub extern "C" fn fr_input_key_pressed(handle: u64, key: i32) -> i32 {
    query_key(handle, key, InputDevice::is_button_pressed)
}

#[no_mangle]
pub extern "C" fn fr_input_key_released(handle: u64, key: i32) -> i32 {
    query_key(handle, key, InputDevice::is_button_released)
}

#[no_mangle]
pub extern "C" fn fr_input_key_held(handle: u64, key: i32) -> i32 {
    query_key(handle, key, InputDevice::is_button_held)
}

// ============================================================
// FFI: Mouse queries
// ============================================================

#[no_mangle]
pub extern "C" fn fr_input_mouse_button_down(handle: u64, button: i32) -> i32 {
    query_mouse(handle, button, InputDevice::is_button_down)
}

#[no_mangle]
pub extern "C" fn fr_input_mouse_button_up(handle: u64, button: i32) -> i32 {
    query_mouse(handle, button, InputDevice::is_button_up)
}

#[no_mangle]
pub extern "C" fn fr_input_mouse_button_pressed(handle: u64, button: i32) -> i32 {
    query_mouse(handle, button, InputDevice::is_button_pressed)
}

#[no_mangle]
pub extern "C" fn fr_input_mouse_button_released(handle: u64, button: i32) -> i32 {
    query_mouse(handle, button, InputDevice::is_button_released)
}

#[no_mangle]
pub extern "C" fn fr_input_mouse_button_held(handle: u64, button: i32) -> i32 {
    query_mouse(handle, button, InputDevice::is_button_held)
}

/// Current cursor state. Unknown handles yield all zeros.
#[no_mangle]
pub extern "C" fn fr_input_cursor(handle: u64) -> FrCursor {
    store()
        .get(handle)
        .map(|input| FrCursor {
            x: input.mouse.x(),
            y: input.mouse.y(),
            dx: input.mouse.delta_x(),
            dy: input.mouse.delta_y(),
        })
        .unwrap_or_default()
}
