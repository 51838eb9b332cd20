//! Application state definitions

use super::forms::FormSession;
use crate::router::{paths, Navigator, Route};

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub navigator: Navigator,

    // Home page selection
    pub selected_index: usize,

    // Form being edited on the current page, if it is a form page
    pub form_session: Option<FormSession>,

    // Status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            selected_index: 0,
            form_session: None,
            status_message: None,
        }
    }

    /// Routes listed on the home page (everything but home itself)
    pub fn menu_routes(&self) -> Vec<&Route> {
        self.navigator
            .table()
            .routes()
            .iter()
            .filter(|r| r.path != paths::HOME)
            .collect()
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::app_routes;

    fn state() -> AppState {
        AppState::new(Navigator::new(app_routes(), paths::HOME).unwrap())
    }

    #[test]
    fn test_menu_excludes_home() {
        let state = state();
        let names: Vec<_> = state.menu_routes().iter().map(|r| r.name).collect();
        assert_eq!(names, ["ContactForm", "SurveyForm", "RegistrationForm"]);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down(3);
        state.move_selection_down(3);
        state.move_selection_down(3);
        assert_eq!(state.selected_index, 2);
        state.move_selection_down(0);
        assert_eq!(state.selected_index, 2);
    }
}
