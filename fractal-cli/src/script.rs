use std::path::Path;

use anyhow::Context;
use fractal_input::{key, InputEvent};
use serde::Deserialize;

/// A key given either as a raw code or by name ("W", "Space", "LeftShift").
/// `key = 5` is raw code 5; `key = "5"` is the digit key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KeyRef {
    Code(i32),
    Name(String),
}

impl KeyRef {
    pub fn resolve(&self) -> anyhow::Result<i32> {
        match self {
            KeyRef::Code(code) => Ok(*code),
            KeyRef::Name(name) => {
                key::from_name(name).with_context(|| format!("Unknown key name: {name}"))
            }
        }
    }
}

/// Event as written in a script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    Key { key: KeyRef, down: bool },
    MouseButton { button: i32, down: bool },
    CursorMoved { x: f64, y: f64 },
}

impl ScriptEvent {
    pub fn to_input_event(&self) -> anyhow::Result<InputEvent> {
        Ok(match self {
            ScriptEvent::Key { key, down } => InputEvent::Key {
                code: key.resolve()?,
                down: *down,
            },
            ScriptEvent::MouseButton { button, down } => InputEvent::MouseButton {
                button: *button,
                down: *down,
            },
            ScriptEvent::CursorMoved { x, y } => InputEvent::CursorMoved { x: *x, y: *y },
        })
    }
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFrame {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
    /// Number of frames this entry spans. Events land in the first one.
    #[serde(default = "one")]
    pub repeat: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default, rename = "frame")]
    pub frames: Vec<ScriptFrame>,
}

impl Script {
    pub fn parse(src: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&src).with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Expand into one event list per frame, resolving key names.
    pub fn frames(&self) -> anyhow::Result<Vec<Vec<InputEvent>>> {
        let mut out = Vec::new();
        for (i, frame) in self.frames.iter().enumerate() {
            let events = frame
                .events
                .iter()
                .map(ScriptEvent::to_input_event)
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("In frame entry {}", i + 1))?;
            out.push(events);
            for _ in 1..frame.repeat {
                out.push(Vec::new());
            }
        }
        Ok(out)
    }
}
