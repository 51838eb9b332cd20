//! Form rendering module
//!
//! - `field_renderer`: one box per field, styled by field type
//! - `form_page`: a whole form with its buttons

mod field_renderer;
mod form_page;

pub use form_page::draw_form;
