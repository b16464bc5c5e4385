//! Home content region

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the home page fragment, or the inline load error in its place
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let content = if let Some(error) = &app.state.home_error {
        Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(ratatui::layout::Alignment::Center)
    } else {
        Paragraph::new(app.state.home_content.as_deref().unwrap_or_default())
            .style(Style::default().fg(Color::Gray))
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
