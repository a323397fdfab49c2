use serde::{Deserialize, Serialize};

use crate::key;
use crate::keyboard::DEFAULT_KEY_COUNT;
use crate::mouse::DEFAULT_BUTTON_COUNT;

/// Tunables shared by every front end, read from `fractal.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub keyboard_buttons: usize,
    pub mouse_buttons: usize,
    /// World units per second.
    pub move_speed: f32,
    /// Radians per pixel per second.
    pub look_speed: f32,
    /// Keys shown by the terminal inspector and replay output.
    pub watch_keys: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keyboard_buttons: DEFAULT_KEY_COUNT,
            mouse_buttons: DEFAULT_BUTTON_COUNT,
            move_speed: 5.0,
            look_speed: 0.5,
            watch_keys: ["W", "A", "S", "D", "Q", "E", "Space"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl InputConfig {
    /// Resolve `watch_keys` to codes, skipping names that do not parse.
    pub fn watch_key_codes(&self) -> Vec<i32> {
        self.watch_keys
            .iter()
            .filter_map(|name| {
                let code = key::from_name(name);
                if code.is_none() {
                    log::warn!("Unknown key name in watch_keys: {name}");
                }
                code
            })
            .collect()
    }
}
