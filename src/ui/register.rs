//! Registration form view

use crate::app::App;
use crate::state::{Form, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the registration form with inline errors and a buttons row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Volunteer Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    // One header line, then input box + error line per field, then buttons
    let mut constraints = vec![Constraint::Length(1)];
    for _ in 0..5 {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        format!(
            "Registrations stored locally: {}",
            app.state.registration_count
        ),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(header, chunks[0]);

    for index in 0..5 {
        if let Some(field) = form.get_field(index) {
            let is_active = form.active_field() == index && !form.is_buttons_row_active();
            draw_field(frame, chunks[1 + index * 2], field, is_active);
            draw_error_line(frame, chunks[2 + index * 2], field);
        }
    }

    draw_buttons_row(frame, chunks[11], app);
}

/// Draw one form field box
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)"
    } else {
        display_value
    };
    let cursor = if is_active { "▌" } else { "" };

    let label = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the error line under a field (blank when the field passes)
fn draw_error_line(frame: &mut Frame, area: Rect, field: &FormField) {
    if let Some(error) = &field.error {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw the Clear / Submit buttons row
fn draw_buttons_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let row_active = form.is_buttons_row_active();

    let button = |label: &str, selected: bool| {
        let style = if selected && row_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let line = Line::from(vec![
        button("Clear", form.selected_button == 0),
        Span::raw("  "),
        button("Submit", form.selected_button == 1),
    ]);

    let border_style = if row_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(ratatui::layout::Alignment::Center)
            .block(block),
        area,
    );
}
