use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::LogBuffer;

/// Render a scrolling log with timestamps, keeping `scroll_offset` visible.
pub fn render(frame: &mut Frame, log: &LogBuffer, area: Rect, title: &str) {
    let visible = area.height.saturating_sub(2) as usize;
    let end = (log.scroll_offset + 1).min(log.lines.len());
    let start = end.saturating_sub(visible);

    let lines: Vec<Line> = log.lines[start..end]
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(
                    line.timestamp.format("%H:%M:%S%.3f ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(line.text.as_str()),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}
