use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use fractal_input::{key, CameraIntent, FlyController, InputConfig, InputEvent, InputState};

use crate::input::{dom_button_to_mouse, dom_code_to_key};

/// A DOM listener that unregisters itself when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

fn key_handler(input: &Rc<RefCell<InputState>>, down: bool) -> impl FnMut(Event) + 'static {
    let input = Rc::clone(input);
    move |event: Event| {
        let event: KeyboardEvent = event.unchecked_into();
        let code = dom_code_to_key(&event.code());
        input.borrow_mut().apply(&InputEvent::Key { code, down });
    }
}

fn button_handler(input: &Rc<RefCell<InputState>>, down: bool) -> impl FnMut(Event) + 'static {
    let input = Rc::clone(input);
    move |event: Event| {
        let event: MouseEvent = event.unchecked_into();
        let button = dom_button_to_mouse(event.button());
        input
            .borrow_mut()
            .apply(&InputEvent::MouseButton { button, down });
    }
}

/// Main application state for the WASM runtime.
#[wasm_bindgen]
pub struct App {
    input: Rc<RefCell<InputState>>,
    controller: FlyController,
    intent: CameraIntent,
    last_time: f64,
    canvas: HtmlCanvasElement,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl App {
    /// Bind to the canvas with the given id and start listening for input.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<App, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Element is not a canvas")?;

        let config = InputConfig::default();
        let input = Rc::new(RefCell::new(InputState::from_config(&config)));

        // Keys go to the window so focus on the canvas is not required.
        let window_target: &EventTarget = window.as_ref();
        let canvas_target: &EventTarget = canvas.as_ref();

        let move_input = Rc::clone(&input);
        let listeners = vec![
            Listener::attach(window_target, "keydown", key_handler(&input, true))?,
            Listener::attach(window_target, "keyup", key_handler(&input, false))?,
            Listener::attach(canvas_target, "mousedown", button_handler(&input, true))?,
            Listener::attach(window_target, "mouseup", button_handler(&input, false))?,
            Listener::attach(canvas_target, "mousemove", move |event: Event| {
                let event: MouseEvent = event.unchecked_into();
                move_input.borrow_mut().apply(&InputEvent::CursorMoved {
                    x: event.offset_x() as f64,
                    y: event.offset_y() as f64,
                });
            })?,
        ];

        log::info!(
            "Input bound to canvas '{canvas_id}' ({}x{})",
            canvas.width(),
            canvas.height()
        );

        Ok(App {
            input,
            controller: FlyController::from_config(&config),
            intent: CameraIntent::default(),
            last_time: 0.0,
            canvas,
            _listeners: listeners,
        })
    }

    /// Run one frame of the game loop. Called from requestAnimationFrame.
    pub fn frame(&mut self, time: f64) {
        let dt = if self.last_time > 0.0 {
            (time - self.last_time) / 1000.0
        } else {
            1.0 / 60.0
        };
        self.last_time = time;

        let mut input = self.input.borrow_mut();
        input.end_frame();
        self.intent = self.controller.update(&input, dt as f32);

        if self.intent.jump_requested {
            log::info!("Space key was just pressed");
        }
    }

    pub fn is_key_down(&self, key: i32) -> bool {
        self.input.borrow().keyboard.is_key_down(key)
    }

    pub fn is_key_up(&self, key: i32) -> bool {
        self.input.borrow().keyboard.is_key_up(key)
    }

    pub fn is_key_pressed(&self, key: i32) -> bool {
        self.input.borrow().keyboard.is_key_pressed(key)
    }

    pub fn is_key_released(&self, key: i32) -> bool {
        self.input.borrow().keyboard.is_key_released(key)
    }

    pub fn is_key_held(&self, key: i32) -> bool {
        self.input.borrow().keyboard.is_key_held(key)
    }

    pub fn is_mouse_button_down(&self, button: i32) -> bool {
        self.input.borrow().mouse.is_button_down(button)
    }

    pub fn is_mouse_button_up(&self, button: i32) -> bool {
        self.input.borrow().mouse.is_button_up(button)
    }

    pub fn is_mouse_button_pressed(&self, button: i32) -> bool {
        self.input.borrow().mouse.is_button_pressed(button)
    }

    pub fn is_mouse_button_released(&self, button: i32) -> bool {
        self.input.borrow().mouse.is_button_released(button)
    }

    pub fn is_mouse_button_held(&self, button: i32) -> bool {
        self.input.borrow().mouse.is_button_held(button)
    }

    pub fn mouse_x(&self) -> f64 {
        self.input.borrow().mouse.x()
    }

    pub fn mouse_y(&self) -> f64 {
        self.input.borrow().mouse.y()
    }

    pub fn mouse_delta_x(&self) -> f64 {
        self.input.borrow().mouse.delta_x()
    }

    pub fn mouse_delta_y(&self) -> f64 {
        self.input.borrow().mouse.delta_y()
    }

    /// Look up a key code by name, e.g. "W" or "Space". Returns -1 if unknown.
    pub fn key_code(name: &str) -> i32 {
        key::from_name(name).unwrap_or(key::UNKNOWN)
    }

    /// Camera translation from the last frame, as [x, y, z].
    pub fn camera_translation(&self) -> Vec<f32> {
        self.intent.translation.to_array().to_vec()
    }

    pub fn camera_yaw(&self) -> f32 {
        self.intent.yaw
    }

    pub fn camera_pitch(&self) -> f32 {
        self.intent.pitch
    }

    /// Get the canvas width.
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Get the canvas height.
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }
}
