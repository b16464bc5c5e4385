//! Application state and core logic

use crate::config::PortalConfig;
use crate::content::{ContentSource, FileContentSource};
use crate::state::{AppState, Form, RegisterForm, View};
use crate::storage::{self, JsonFileStorage, RegistrationRecord, Storage};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Durable key-value store for the registration list
    store: Box<dyn Storage>,
    /// Page-fragment source for the content region
    content: Box<dyn ContentSource>,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Terminal size for grid calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance with the default collaborators
    pub async fn new(config: &PortalConfig) -> Result<Self> {
        let root = config
            .data_dir_path()
            .or_else(JsonFileStorage::default_root)
            .ok_or_else(|| anyhow!("no usable data directory"))?;
        let store = Box::new(JsonFileStorage::new(root));
        let content = Box::new(FileContentSource::new(config.content_dir_path()));
        Self::with_collaborators(store, content, config).await
    }

    /// Create an App over injected collaborators. Startup failures of the
    /// storage read degrade to an empty list; nothing here is fatal.
    #[allow(clippy::field_reassign_with_default)]
    pub async fn with_collaborators(
        store: Box<dyn Storage>,
        content: Box<dyn ContentSource>,
        config: &PortalConfig,
    ) -> Result<Self> {
        let mut state = AppState::default();
        state.form = RegisterForm::new(
            config.phone_required.unwrap_or(false),
            config.postal_code_required.unwrap_or(false),
        );
        state.registration_count = match storage::load_registrations(store.as_ref()).await {
            Ok(list) => list.len(),
            Err(err) => {
                warn!(%err, "could not read stored registrations");
                0
            }
        };

        let mut app = Self {
            state,
            store,
            content,
            quit: false,
            status_message: None,
            terminal_size: None,
        };
        app.load_home_content().await;
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Number of grid columns the projects view currently fits
    pub fn grid_columns(&self) -> usize {
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        crate::ui::projects_column_count(width.saturating_sub(crate::ui::SIDEBAR_WIDTH))
    }

    /// Switch the content region to another view
    pub async fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.enter_view(view).await;
    }

    /// Pop the navigation history, like the browser back button
    pub async fn go_back(&mut self) {
        if let Some(previous) = self.state.view_history.pop() {
            self.enter_view(previous).await;
        }
    }

    async fn enter_view(&mut self, view: View) {
        self.state.current_view = view;
        self.state.reset_selection();
        self.status_message = None;
        info!(view = view.slug(), "navigated");
        // One content load per visit, resolution order wins.
        if view == View::Home {
            self.load_home_content().await;
        }
    }

    async fn load_home_content(&mut self) {
        match self.content.load(View::Home).await {
            Ok(text) => {
                self.state.home_content = Some(text);
                self.state.home_error = None;
            }
            Err(err) => {
                warn!(%err, "failed to load page content");
                self.state.home_error = Some("Failed to load content.".to_string());
            }
        }
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key).await?,
            View::Projects => self.handle_projects_key(key).await?,
            View::Register => self.handle_register_key(key).await?,
        }
        Ok(())
    }

    /// Sidebar shortcuts shared by the non-form views
    async fn handle_nav_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('h') => self.navigate(View::Home).await,
            KeyCode::Char('p') => self.navigate(View::Projects).await,
            KeyCode::Char('r') => self.navigate(View::Register).await,
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.go_back().await,
            _ => return false,
        }
        true
    }

    async fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        self.handle_nav_key(key).await;
        Ok(())
    }

    async fn handle_projects_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.handle_nav_key(key).await {
            return Ok(());
        }
        let columns = self.grid_columns();
        let total = self.state.projects.len();
        match key.code {
            KeyCode::Left => self.state.move_selection_left(columns),
            KeyCode::Right => self.state.move_selection_right(columns, total),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up_grid(columns),
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.move_selection_down_grid(columns, total)
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons_row = self.state.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => {
                self.state.form.blur_active_field();
                self.state.form.next_field();
            }
            KeyCode::BackTab => {
                self.state.form.blur_active_field();
                self.state.form.prev_field();
            }
            // Button selection (0=Clear, 1=Submit)
            KeyCode::Left | KeyCode::Right if on_buttons_row => {
                self.state.form.next_button();
            }
            KeyCode::Enter if on_buttons_row => match self.state.form.selected_button {
                0 => {
                    self.state.form.clear();
                    self.status_message = Some("Form cleared.".to_string());
                }
                _ => self.submit_registration().await,
            },
            // Submit from anywhere in the form
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_registration().await;
            }
            KeyCode::Esc => self.go_back().await,
            // Field input
            KeyCode::Char(c) if !on_buttons_row => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_buttons_row => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Enter if !on_buttons_row => {
                // Enter advances like Tab so the keyboard flow matches the form order
                self.state.form.blur_active_field();
                self.state.form.next_field();
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate every field; persist only when the whole form passes.
    async fn submit_registration(&mut self) {
        if !self.state.form.validate_all() {
            self.status_message = Some("Please fix the highlighted fields.".to_string());
            return;
        }
        let record = RegistrationRecord::new(self.state.form.to_record_values());
        match storage::append_registration(self.store.as_ref(), record).await {
            Ok(count) => {
                self.state.registration_count = count;
                self.state.form.clear();
                info!(count, "registration stored");
                self.status_message =
                    Some(format!("Registration saved locally ({count} total)."));
            }
            Err(err) => {
                warn!(%err, "failed to persist registration");
                self.push_error("Could not save the registration.");
            }
        }
    }
}
