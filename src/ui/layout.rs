//! Layout components (sidebar, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SIDEBAR_WIDTH: u16 = 20;
const BUTTON_HEIGHT: u16 = 3;

/// Sidebar items in display order
const SIDEBAR_ITEMS: &[(&str, View)] = &[
    ("Home", View::Home),
    ("Projects", View::Projects),
    ("Register", View::Register),
];

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve the bottom line for the status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with one boxed button per view
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Home
            Constraint::Length(BUTTON_HEIGHT), // Projects
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(area);

    for (idx, (label, view)) in SIDEBAR_ITEMS.iter().enumerate() {
        let is_selected = app.state.current_view == *view;
        let (border_style, label_style) = if is_selected {
            (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            )
        };

        let button = Paragraph::new(Line::from(Span::styled(*label, label_style)))
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(button, chunks[idx]);
    }
}

/// Draw the status bar on the bottom line
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let bar = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let hints = match app.state.current_view {
            View::Register => " Tab next field · Enter submit on buttons · Esc back · Ctrl+C quit",
            _ => " h home · p projects · r register · Esc back · q quit",
        };
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(line), bar);
}
