//! Field rendering utilities for form controls

use fetchform::{Control, ControlKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const TEXTAREA_HEIGHT: u16 = 6;

/// Rows a control occupies, borders included
pub fn field_height(control: &Control) -> u16 {
    match control.kind {
        ControlKind::Select { .. } => u16::try_from(control.options.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2),
        ControlKind::Textarea => TEXTAREA_HEIGHT,
        _ => 3,
    }
}

/// Draw a form control
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    control: &Control,
    is_active: bool,
    option_cursor: usize,
) {
    let style = if control.disabled {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active && control.is_textual() && !control.disabled {
        "▌"
    } else {
        ""
    };

    let lines: Vec<Line> = match &control.kind {
        ControlKind::Select { multiple } => control
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mark = match (multiple, option.selected) {
                    (true, true) => "[x]",
                    (true, false) => "[ ]",
                    (false, true) => "(•)",
                    (false, false) => "( )",
                };
                let option_style = if is_active && i == option_cursor {
                    style.add_modifier(Modifier::REVERSED)
                } else {
                    style
                };
                Line::from(Span::styled(format!("{mark} {}", option.label), option_style))
            })
            .collect(),
        ControlKind::Textarea => {
            let mut lines: Vec<Line> = control
                .value
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), style)))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
            lines
        }
        _ => {
            let display_value = control.display_value();
            let display_str = if display_value.is_empty() && !is_active {
                "(empty)".to_string()
            } else {
                display_value
            };
            vec![Line::from(vec![
                Span::styled(display_str, style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])]
        }
    };

    let title = if control.disabled {
        format!(" {} ({}, disabled) ", control.name, control.kind.label())
    } else {
        format!(" {} ({}) ", control.name, control.kind.label())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
