//! UI module for rendering the demo host

mod field_renderer;
mod layout;

use crate::app::App;
use field_renderer::{draw_field, field_height};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, snapshot_area) = layout::create_layout(frame.area());

    draw_form(frame, form_area, app);
    draw_snapshot(frame, snapshot_area, app);

    layout::draw_status_bar(frame, app);
}

/// Draw visible controls, scrolled so the active one fits
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = app.fetch.form();
    let visible = app.visible_fields();
    let heights: Vec<u16> = visible
        .iter()
        .map(|&i| form.control(i).map_or(0, field_height))
        .collect();

    let active_pos = visible
        .iter()
        .position(|&i| i == app.active_field)
        .unwrap_or(0);
    let mut first = 0;
    while first < active_pos
        && heights[first..=active_pos].iter().sum::<u16>() > inner.height
    {
        first += 1;
    }

    let mut y = inner.y;
    for (pos, &index) in visible.iter().enumerate().skip(first) {
        let Some(control) = form.control(index) else {
            continue;
        };
        let height = heights[pos];
        if y + height > inner.y + inner.height {
            break;
        }
        let field_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        draw_field(
            frame,
            field_area,
            control,
            index == app.active_field,
            app.option_cursor,
        );
        y += height;
    }
}

/// Draw the most recent snapshot as JSON
fn draw_snapshot(frame: &mut Frame, area: Rect, app: &App) {
    let (title, body) = match &app.last_snapshot {
        Some(snapshot) => {
            let source = if snapshot.from_submit {
                "submitted"
            } else {
                "initial"
            };
            (
                format!(" Snapshot ({source} {}) ", snapshot.taken_at.format("%H:%M:%S")),
                snapshot.json.clone(),
            )
        }
        None => (" Snapshot ".to_string(), String::new()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
