//! Application state definitions

use crate::state::forms::RegisterForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Projects,
    Register,
}

impl View {
    /// Slug used for page-content lookups and logging.
    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Projects => "projects",
            View::Register => "register",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Projects => "Projects",
            View::Register => "Register",
        }
    }
}

/// One project card shown in the projects grid.
#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Optional illustration asset name; rendered as a dimmed caption.
    pub image: Option<String>,
}

/// The portal's project listing is static content, not backend data.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Project Alpha".to_string(),
            description: "Community outreach projects run by the organization.".to_string(),
            image: Some("0002.jpg".to_string()),
        },
        Project {
            title: "Become a Volunteer".to_string(),
            description: "How to join the volunteer program.".to_string(),
            image: Some("0003.jpg".to_string()),
        },
        Project {
            title: "Make a Donation".to_string(),
            description: "Instructions and information on how to donate.".to_string(),
            image: None,
        },
    ]
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Content
    pub projects: Vec<Project>,
    pub home_content: Option<String>,
    pub home_error: Option<String>,

    // Selection
    pub selected_index: usize,

    // Registration
    pub form: RegisterForm,
    pub registration_count: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            view_history: Vec::new(),
            projects: default_projects(),
            home_content: None,
            home_error: None,
            selected_index: 0,
            form: RegisterForm::default(),
            registration_count: 0,
        }
    }
}

impl AppState {
    /// Move selection left in grid
    pub fn move_selection_left(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index % columns > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection right in grid
    pub fn move_selection_right(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let col = self.selected_index % columns;
        if col < columns - 1 && self.selected_index + 1 < total {
            self.selected_index += 1;
        }
    }

    /// Move selection up in grid (by one row)
    pub fn move_selection_up_grid(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Move selection down in grid (by one row)
    pub fn move_selection_down_grid(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let new_index = self.selected_index + columns;
        if new_index < total {
            self.selected_index = new_index;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }
}
