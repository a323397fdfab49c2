use std::fmt::Write as _;
use std::path::Path;

use fractal_input::{key, mouse_button, ButtonPhase, InputConfig, InputEvent, InputState};
use glam::DVec2;

use crate::project::ProjectContext;
use crate::script::Script;
use crate::state::key_label;

/// Observed state after one frame boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: usize,
    pub keys: Vec<(i32, ButtonPhase)>,
    pub mouse_left: ButtonPhase,
    pub cursor_delta: DVec2,
}

pub fn run(script_path: &Path, keys: Vec<String>, ctx: ProjectContext) -> anyhow::Result<()> {
    let script = Script::load(script_path)?;
    let frames = script.frames()?;
    let config = ctx.config.input;

    let watch = if keys.is_empty() {
        config.watch_key_codes()
    } else {
        keys.iter()
            .map(|name| {
                key::from_name(name).ok_or_else(|| anyhow::anyhow!("Unknown key name: {name}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    log::info!(
        "Replaying {} frames from {}",
        frames.len(),
        script_path.display()
    );

    let reports = replay(&frames, &config, &watch);
    print!("{}", format_reports(&watch, &reports));
    Ok(())
}

/// Apply each frame's events, commit the frame, and record the phases.
pub fn replay(frames: &[Vec<InputEvent>], config: &InputConfig, watch: &[i32]) -> Vec<FrameReport> {
    let mut input = InputState::from_config(config);
    frames
        .iter()
        .enumerate()
        .map(|(i, events)| {
            input.apply_all(events);
            input.end_frame();
            FrameReport {
                frame: i + 1,
                keys: watch
                    .iter()
                    .map(|&code| (code, input.keyboard.phase(code).unwrap_or(ButtonPhase::Up)))
                    .collect(),
                mouse_left: input
                    .mouse
                    .phase(mouse_button::LEFT)
                    .unwrap_or(ButtonPhase::Up),
                cursor_delta: input.mouse.delta(),
            }
        })
        .collect()
}

pub fn format_reports(watch: &[i32], reports: &[FrameReport]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>5}", "frame");
    for &code in watch {
        let _ = write!(out, " {:>9}", key_label(code));
    }
    let _ = writeln!(out, " {:>9} {:>15}", "MouseL", "delta");

    for report in reports {
        let _ = write!(out, "{:>5}", report.frame);
        for (_, phase) in &report.keys {
            let _ = write!(out, " {:>9}", phase.label());
        }
        let delta = format!("{},{}", report.cursor_delta.x, report.cursor_delta.y);
        let _ = writeln!(out, " {:>9} {:>15}", report.mouse_left.label(), delta);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: i32, down: bool) -> InputEvent {
        InputEvent::Key { code, down }
    }

    #[test]
    fn test_replay_press_hold_release() {
        let frames = vec![
            vec![key_event(key::W, true)],
            vec![],
            vec![],
            vec![key_event(key::W, false)],
        ];
        let reports = replay(&frames, &InputConfig::default(), &[key::W]);
        let phases: Vec<ButtonPhase> = reports.iter().map(|r| r.keys[0].1).collect();
        assert_eq!(
            phases,
            vec![
                ButtonPhase::Pressed,
                ButtonPhase::Held,
                ButtonPhase::Held,
                ButtonPhase::Released,
            ]
        );
    }

    #[test]
    fn test_replay_cursor_delta_and_mouse() {
        let frames = vec![
            vec![
                InputEvent::CursorMoved { x: 3.0, y: 4.0 },
                InputEvent::MouseButton { button: mouse_button::LEFT, down: true },
            ],
            vec![],
        ];
        let reports = replay(&frames, &InputConfig::default(), &[]);
        assert_eq!(reports[0].cursor_delta, DVec2::new(3.0, 4.0));
        assert_eq!(reports[0].mouse_left, ButtonPhase::Pressed);
        assert_eq!(reports[1].cursor_delta, DVec2::ZERO);
        assert_eq!(reports[1].mouse_left, ButtonPhase::Held);
    }

    #[test]
    fn test_replay_respects_configured_capacity() {
        let config = InputConfig {
            keyboard_buttons: 64,
            ..Default::default()
        };
        let frames = vec![vec![key_event(key::W, true)]];
        let reports = replay(&frames, &config, &[key::W]);
        assert_eq!(reports[0].keys[0].1, ButtonPhase::Up);
    }

    #[test]
    fn test_format_reports_layout() {
        let frames = vec![vec![key_event(key::SPACE, true)]];
        let reports = replay(&frames, &InputConfig::default(), &[key::SPACE]);
        let text = format_reports(&[key::SPACE], &reports);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Space"));
        assert!(lines[0].contains("MouseL"));
        assert!(lines[1].contains("pressed"));
        assert!(lines[1].trim_start().starts_with('1'));
    }
}
