//! Fractal WASM Web Runtime
//!
//! Browser counterpart of the native GLFW host. DOM keyboard and mouse
//! events are translated into the shared key-code space and fed into one
//! `InputState`; JavaScript drives `App::frame` from requestAnimationFrame.

#[cfg(target_arch = "wasm32")]
mod app;
pub mod input;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point, called when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Fractal web runtime initialized");
}

/// Create an application bound to the canvas with the given element id.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn create_app(canvas_id: String) -> Result<app::App, JsValue> {
    app::App::new(&canvas_id)
}
