//! Form domain layer
//!
//! Shared shapes for dynamically rendered forms (`FormField`, `FormConfig`,
//! `FormValues`), the built-in form catalog, and the editing session a form
//! view works on.

pub mod catalog;
mod config;
mod field;
mod session;

pub use config::FormConfig;
pub use field::{FieldOption, FieldType, FormField, FormValues};
pub use session::{FormButton, FormSession};
