//! Page routing
//!
//! A static route table binding paths to lazily loaded pages, and the
//! navigator that tracks where the user is.

mod navigator;
mod table;

pub use navigator::Navigator;
pub use table::{app_routes, Route};

use thiserror::Error;

/// Path constants of the built-in routes
pub mod paths {
    pub const HOME: &str = "/";
    pub const CONTACT_FORM: &str = "/contact-form";
    pub const SURVEY_FORM: &str = "/survey-form";
    pub const REGISTRATION_FORM: &str = "/registration-form";
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("no route matches path {0:?}")]
    NotFound(String),
}
