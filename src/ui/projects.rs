//! Projects grid view

use crate::app::App;
use crate::state::Project;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Grid layout configuration
const MIN_CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 6; // borders + title + two description lines + caption
const CARD_SPACING_H: u16 = 1;

/// How many cards fit side by side in the given content width
pub fn column_count(area_width: u16) -> usize {
    let usable_width = area_width.saturating_sub(2);
    if usable_width >= MIN_CARD_WIDTH {
        (((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize).max(1)
    } else {
        1
    }
}

/// Helper for grid layout calculations
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    fn new(area_width: u16) -> Self {
        let usable_width = area_width.saturating_sub(2);
        let columns = column_count(area_width);

        // Distribute remaining space evenly across cards
        let total_spacing = (columns.saturating_sub(1) as u16) * CARD_SPACING_H;
        let card_width = (usable_width.saturating_sub(total_spacing)) / columns as u16;

        Self {
            columns,
            card_width: card_width.max(MIN_CARD_WIDTH),
        }
    }

    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    fn card_area(&self, inner: Rect, row: usize, col: usize) -> Rect {
        Rect {
            x: inner.x + (col as u16) * (self.card_width + CARD_SPACING_H),
            y: inner.y + (row as u16) * CARD_HEIGHT,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }
}

/// Draw the projects grid
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let projects = &app.state.projects;

    let block = Block::default()
        .title(" Projects ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    if projects.is_empty() {
        let message = Paragraph::new("No projects to show yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    let grid = GridLayout::new(area.width);
    for (idx, project) in projects.iter().enumerate() {
        let (row, col) = grid.index_to_pos(idx);
        let card_area = grid.card_area(inner, row, col);

        // Skip cards that fall below the visible area
        if card_area.y + card_area.height > area.y + area.height {
            continue;
        }

        let is_selected = idx == app.state.selected_index;
        draw_project_card(frame, card_area, project, is_selected);
    }
}

/// Draw a single project card
fn draw_project_card(frame: &mut Frame, area: Rect, project: &Project, is_selected: bool) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![Line::from(Span::styled(
        project.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(Span::styled(
        project.description.clone(),
        Style::default().fg(Color::Gray),
    )));
    if let Some(image) = &project.image {
        lines.push(Line::from(Span::styled(
            format!("[{image}]"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_areas_still_get_one_column() {
        assert_eq!(column_count(0), 1);
        assert_eq!(column_count(10), 1);
        assert_eq!(column_count(MIN_CARD_WIDTH + 2), 1);
    }

    #[test]
    fn wide_areas_fit_more_columns() {
        assert_eq!(column_count(26), 1);
        assert_eq!(column_count(53), 2);
        assert_eq!(column_count(80), 3);
    }

    #[test]
    fn grid_positions_fill_rows_first() {
        let grid = GridLayout::new(53);
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.index_to_pos(0), (0, 0));
        assert_eq!(grid.index_to_pos(1), (0, 1));
        assert_eq!(grid.index_to_pos(2), (1, 0));
    }
}
