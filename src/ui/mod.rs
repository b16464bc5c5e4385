//! UI module for rendering the TUI

mod home;
mod layout;
mod projects;
mod register;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

pub use layout::SIDEBAR_WIDTH;
pub use projects::column_count as projects_column_count;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Projects => projects::draw(frame, main_area, app),
        View::Register => register::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
