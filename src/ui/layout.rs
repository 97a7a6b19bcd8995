//! Layout components (form panel, snapshot panel, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str = "Tab:next  Space:toggle  Enter/^S:submit  F2-F4:filters  ^Y:copy  Esc:quit";

/// Split into form panel and snapshot panel, reserving the bottom line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Form
            Constraint::Percentage(45), // Snapshot
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let options = app.options();
    let mut spans = vec![Span::raw(" ")];
    for (label, on) in [
        ("empty", options.include_empty),
        ("disabled", options.include_disabled),
        ("hidden", options.include_hidden),
    ] {
        let color = if on { Color::Green } else { Color::Red };
        spans.push(Span::styled(format!("{label} "), Style::default().fg(color)));
    }
    spans.push(Span::raw("| "));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
