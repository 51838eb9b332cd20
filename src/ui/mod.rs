//! UI rendering module

pub mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.form_session {
        Some(_) => forms::draw_form(frame, main_area, app),
        None => home::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
