use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::state::WatchState;
use crate::ui::log_panel;

const COLUMNS: [&str; 5] = ["up", "down", "held", "pressed", "released"];

pub fn render(frame: &mut Frame, state: &WatchState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(52), Constraint::Min(0)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(chunks[0]);

    let header = Row::new(
        std::iter::once(Cell::from("key"))
            .chain(COLUMNS.iter().map(|c| Cell::from(*c)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().bold().fg(Color::Cyan));

    let rows: Vec<Row> = state
        .rows()
        .into_iter()
        .map(|(label, flags)| {
            let cells = std::iter::once(Cell::from(label)).chain(flags.iter().map(|&on| {
                if on {
                    Cell::from("●").style(Style::default().fg(Color::Green))
                } else {
                    Cell::from("·").style(Style::default().fg(Color::DarkGray))
                }
            }));
            Row::new(cells.collect::<Vec<_>>())
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(9),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keys ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(table, left[0]);

    let mode = if state.tap_mode { "tap (no release reports)" } else { "press/release" };
    let info = vec![
        Line::from(vec![
            Span::raw("Frame: "),
            Span::styled(state.frame.to_string(), Style::default().bold()),
        ]),
        Line::from(vec![Span::raw("Mode: "), Span::raw(mode)]),
        Line::styled(
            "[PgUp/PgDn] Scroll  [Del] Clear log",
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled("[Esc] Quit", Style::default().fg(Color::DarkGray)),
    ];
    let info_widget = Paragraph::new(info).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info_widget, left[1]);

    log_panel::render(frame, &state.log, chunks[1], " Edges ");
}
