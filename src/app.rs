//! Application state and core logic

use crate::config::AppConfig;
use crate::platform::has_shortcut_modifier;
use crate::router::{app_routes, paths, Navigator, RouterError};
use crate::state::{AppState, FieldType, FormButton, FormSession};
use crate::store::{FormMap, FormStore, SaveHandle};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::watch;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Form values for the whole session
    pub store: FormStore,
    /// Saves dispatched but not yet reported
    pending_saves: Vec<SaveHandle>,
    /// Change feed of the store, used to refresh an untouched open form
    store_updates: watch::Receiver<Arc<FormMap>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = FormStore::simulated(config.save_delay());
        let start_path = match app_routes().resolve(config.start_route()) {
            Some(route) => route.path,
            None => {
                tracing::warn!(
                    start_route = config.start_route(),
                    "configured start route does not exist, using home"
                );
                paths::HOME
            }
        };
        Self::with_store(store, start_path)
    }

    /// Create an App over an existing store, starting at `start_path`
    pub fn with_store(store: FormStore, start_path: &str) -> Result<Self> {
        let navigator = Navigator::new(app_routes(), start_path)?;
        let store_updates = store.subscribe();
        let mut app = Self {
            state: AppState::new(navigator),
            store,
            pending_saves: Vec::new(),
            store_updates,
            quit: false,
        };
        app.enter_current_page();
        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn pending_save_count(&self) -> usize {
        self.pending_saves.len()
    }

    /// Navigate to a route by path
    pub fn navigate(&mut self, path: &str) {
        let target = self.state.navigator.table().resolve(path).map(|r| r.path);
        let Some(target) = target else {
            tracing::warn!(path, "navigation to unknown path");
            self.state
                .set_status(RouterError::NotFound(path.to_string()).to_string());
            return;
        };
        if target == self.state.navigator.current_path() {
            return;
        }

        self.leave_current_page();
        let outcome = self.state.navigator.navigate(target).map(|_| ());
        if let Err(err) = outcome {
            self.state.set_status(err.to_string());
        }
        self.enter_current_page();
    }

    /// Go back to the previous route, keeping what was typed
    pub fn go_back(&mut self) {
        if !self.state.navigator.can_go_back() {
            return;
        }
        self.leave_current_page();
        self.state.navigator.go_back();
        self.enter_current_page();
    }

    /// Record the open form's values so they survive navigation
    fn leave_current_page(&mut self) {
        if let Some(session) = self.state.form_session.take() {
            if session.is_dirty() {
                self.store
                    .set_form_values(session.form_id(), session.values().clone());
            }
        }
    }

    /// Load the current route's page and open its form, if any
    fn enter_current_page(&mut self) {
        let page = self.state.navigator.current_page();
        self.state.form_session = page.form().map(|config| {
            let stored = self.store.get_form_values(&config.id);
            FormSession::new(config.clone(), stored)
        });
    }

    /// Report saves that have completed since the last call
    pub async fn poll_saves(&mut self) {
        let (finished, pending): (Vec<_>, Vec<_>) = self
            .pending_saves
            .drain(..)
            .partition(SaveHandle::is_finished);
        self.pending_saves = pending;

        for handle in finished {
            let form_id = handle.form_id().to_string();
            match handle.await {
                Ok(receipt) => {
                    tracing::debug!(save_id = %receipt.save_id, "save reported");
                    let time = receipt.saved_at.format("%H:%M:%S");
                    self.state
                        .set_status(format!("Saved {} at {time}", receipt.form_id));
                }
                Err(err) => {
                    tracing::error!(form_id = %form_id, error = %err, "save failed");
                    self.state
                        .set_status(format!("Saving {form_id} failed: {err}"));
                }
            }
        }

        self.refresh_open_form();
    }

    /// Reload the open form from the store if the user has not edited it
    /// and none of its saves are still in flight
    fn refresh_open_form(&mut self) {
        if !self.store_updates.has_changed().unwrap_or(false) {
            return;
        }
        let snapshot = Arc::clone(&self.store_updates.borrow_and_update());
        if let Some(session) = self.state.form_session.as_mut() {
            let saving = self
                .pending_saves
                .iter()
                .any(|handle| handle.form_id() == session.form_id());
            if !session.is_dirty() && !saving {
                let stored = snapshot.get(session.form_id()).cloned().unwrap_or_default();
                session.replace_values(stored);
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.form_session.is_some() {
            self.handle_form_key(key);
        } else {
            self.handle_home_key(key);
        }
        Ok(())
    }

    /// Handle keys on the home page
    fn handle_home_key(&mut self, key: KeyEvent) {
        let count = self.state.menu_routes().len();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(count),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => {
                let target = self
                    .state
                    .menu_routes()
                    .get(self.state.selected_index)
                    .map(|route| route.path);
                if let Some(path) = target {
                    self.navigate(path);
                }
            }
            _ => {}
        }
    }

    /// Handle keys on a form page
    fn handle_form_key(&mut self, key: KeyEvent) {
        if has_shortcut_modifier(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit_form(),
                KeyCode::Char('b') => self.go_back(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.cancel_form();
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.with_session(FormSession::next_field);
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.with_session(FormSession::prev_field);
                return;
            }
            _ => {}
        }

        let Some(session) = self.state.form_session.as_mut() else {
            return;
        };

        if session.is_actions_row_active() {
            match key.code {
                KeyCode::Left | KeyCode::Right => {
                    session.selected_button = session.selected_button.toggle();
                }
                KeyCode::Enter => {
                    let button = session.selected_button;
                    match button {
                        FormButton::Submit => self.submit_form(),
                        FormButton::Cancel => self.cancel_form(),
                    }
                }
                _ => {}
            }
            return;
        }

        let Some(field_type) = session.active_field().map(|f| f.field_type) else {
            return;
        };
        match (field_type, key.code) {
            (FieldType::Select, KeyCode::Left) => session.cycle_option(false),
            (FieldType::Select, KeyCode::Right) => session.cycle_option(true),
            (FieldType::Checkbox, KeyCode::Char(' ')) => session.toggle_checkbox(),
            (FieldType::Textarea, KeyCode::Enter) => session.push_char('\n'),
            (FieldType::Input | FieldType::Textarea, KeyCode::Char(c))
                if !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                session.push_char(c)
            }
            (FieldType::Input | FieldType::Textarea, KeyCode::Backspace) => session.pop_char(),
            (_, KeyCode::Enter) => session.next_field(),
            _ => {}
        }
    }

    fn with_session(&mut self, f: impl FnOnce(&mut FormSession)) {
        if let Some(session) = self.state.form_session.as_mut() {
            f(session);
        }
    }

    /// Dispatch a save of the open form
    fn submit_form(&mut self) {
        let Some(session) = self.state.form_session.as_mut() else {
            return;
        };
        let form_id = session.form_id().to_string();
        let values = session.values().clone();
        session.mark_clean();

        tracing::info!(form_id = %form_id, fields = values.len(), "submitting form");
        let handle = self.store.save_form_values(form_id.clone(), values);
        tracing::debug!(save_id = %handle.save_id(), "save dispatched");
        self.pending_saves.push(handle);
        self.state.set_status(format!("Saving {form_id}…"));
    }

    /// Discard the open form's values and return home
    fn cancel_form(&mut self) {
        let Some(session) = self.state.form_session.take() else {
            return;
        };
        self.store.reset_form_values(session.form_id());
        self.state
            .set_status(format!("Cleared {}", session.config().display_title()));
        self.navigate(paths::HOME);
    }
}
