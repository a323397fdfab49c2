use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use fractal_input::Keyboard;

use crate::keymap::terminal_key_to_code;
use crate::project::ProjectContext;
use crate::state::WatchState;
use crate::ui::watch_view;

pub async fn run(fps: u32, ctx: ProjectContext) -> anyhow::Result<()> {
    let config = ctx.config.input;
    let fps = fps.clamp(1, 240);

    let release_reports = crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false);
    if !release_reports {
        log::warn!("Terminal does not report key releases; presses are treated as taps");
    }

    let mut state = WatchState::new(
        Keyboard::with_capacity(config.keyboard_buttons),
        config.watch_key_codes(),
        !release_reports,
    );

    let mut terminal = ratatui::init();
    let session = async {
        if release_reports {
            execute!(
                std::io::stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                )
            )
            .context("Failed to enable key release reporting")?;
        }
        event_loop(&mut terminal, &mut state, fps).await
    };

    restoring(session, || {
        if release_reports {
            let _ = execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
    })
    .await
}

/// Run `session` and always hand the terminal back, error or not.
async fn restoring<T>(
    session: impl Future<Output = anyhow::Result<T>>,
    restore: impl FnOnce(),
) -> anyhow::Result<T> {
    let result = session.await;
    restore();
    result
}

async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut WatchState,
    fps: u32,
) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));

    while !state.should_quit {
        interval.tick().await;

        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            if let Event::Key(key_event) = event::read()? {
                if is_control(key_event.code) {
                    if key_event.kind == KeyEventKind::Press {
                        state.control_key(key_event.code);
                    }
                    continue;
                }
                let down = matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat);
                state.key_event(terminal_key_to_code(key_event.code), down);
            }
        }

        state.tick();
        terminal.draw(|frame| {
            let area = frame.area();
            watch_view::render(frame, state, area);
        })?;
    }
    Ok(())
}

fn is_control(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Esc | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Delete
    )
}
