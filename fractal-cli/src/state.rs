use chrono::{DateTime, Local};
use crossterm::event::KeyCode;
use fractal_input::{key, ButtonPhase, ButtonState, Keyboard};

// ─── Log Buffer ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub text: String,
}

pub struct LogBuffer {
    pub lines: Vec<LogLine>,
    pub scroll_offset: usize,
    pub auto_scroll: bool,
    max_lines: usize,
}

impl LogBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            scroll_offset: 0,
            auto_scroll: true,
            max_lines,
        }
    }

    pub fn push(&mut self, text: String) {
        if self.lines.len() >= self.max_lines {
            self.lines.remove(0);
            self.scroll_offset = self.scroll_offset.saturating_sub(1);
        }
        self.lines.push(LogLine {
            timestamp: chrono::Local::now(),
            text,
        });
        if self.auto_scroll {
            self.scroll_to_bottom();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.lines.len().saturating_sub(1);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_offset = 0;
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
        self.auto_scroll = false;
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = (self.scroll_offset + amount).min(self.lines.len().saturating_sub(1));
        if self.scroll_offset >= self.lines.len().saturating_sub(1) {
            self.auto_scroll = true;
        }
    }
}

// ─── Watch State ─────────────────────────────────────────────────────

/// Lines moved per PgUp/PgDn.
const LOG_PAGE: usize = 10;

/// State behind `frcli watch`.
pub struct WatchState {
    pub keyboard: Keyboard,
    pub watch_keys: Vec<i32>,
    pub log: LogBuffer,
    pub frame: u64,
    /// The terminal cannot report key releases, so every press is treated
    /// as a tap released on the following frame.
    pub tap_mode: bool,
    pending_release: Vec<i32>,
    due_release: Vec<i32>,
    pub should_quit: bool,
}

impl WatchState {
    pub fn new(keyboard: Keyboard, watch_keys: Vec<i32>, tap_mode: bool) -> Self {
        Self {
            keyboard,
            watch_keys,
            log: LogBuffer::new(500),
            frame: 0,
            tap_mode,
            pending_release: Vec::new(),
            due_release: Vec::new(),
            should_quit: false,
        }
    }

    /// Deliver a terminal key report.
    pub fn key_event(&mut self, code: i32, down: bool) {
        if code == key::UNKNOWN {
            return;
        }
        self.keyboard.handle_key_event(code, down);
        if down && self.tap_mode {
            // A repeat arriving before the previous tap's release keeps the key down.
            self.due_release.retain(|&c| c != code);
            if !self.pending_release.contains(&code) {
                self.pending_release.push(code);
            }
        }
    }

    /// Keys that drive the view instead of being tracked. Returns true when
    /// the key was consumed.
    pub fn control_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::PageUp => self.log.scroll_up(LOG_PAGE),
            KeyCode::PageDown => self.log.scroll_down(LOG_PAGE),
            KeyCode::Delete => self.log.clear(),
            _ => return false,
        }
        true
    }

    /// Frame boundary: deliver taps from the previous frame as releases,
    /// commit the tracker, then log edges.
    pub fn tick(&mut self) {
        for code in std::mem::take(&mut self.due_release) {
            self.keyboard.handle_key_event(code, false);
        }

        // Release edges latch until the next report, so only keys that saw a
        // report this frame are logged.
        let touched: Vec<i32> = self
            .watch_keys
            .iter()
            .copied()
            .filter(|&code| self.keyboard.state(code).is_some_and(ButtonState::just_updated))
            .collect();

        self.keyboard.update();
        self.frame += 1;

        let edges: Vec<String> = touched
            .iter()
            .filter_map(|&code| match self.keyboard.phase(code)? {
                phase @ (ButtonPhase::Pressed | ButtonPhase::Released) => Some(format!(
                    "frame {}: {} {}",
                    self.frame,
                    key_label(code),
                    phase.label()
                )),
                _ => None,
            })
            .collect();
        for line in edges {
            self.log.push(line);
        }

        self.due_release = std::mem::take(&mut self.pending_release);
    }

    /// (label, is_up, is_down, is_held, was_pressed, was_released) per watched key.
    pub fn rows(&self) -> Vec<(String, [bool; 5])> {
        self.watch_keys
            .iter()
            .map(|&code| {
                (
                    key_label(code),
                    [
                        self.keyboard.is_key_up(code),
                        self.keyboard.is_key_down(code),
                        self.keyboard.is_key_held(code),
                        self.keyboard.is_key_pressed(code),
                        self.keyboard.is_key_released(code),
                    ],
                )
            })
            .collect()
    }
}

pub fn key_label(code: i32) -> String {
    key::name(code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{code}"))
}
