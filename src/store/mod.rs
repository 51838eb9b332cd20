//! Form value store and its persistence seam

mod backend;
mod error;
mod form_store;

pub use backend::DEFAULT_SAVE_DELAY;
pub use form_store::{FormMap, FormStore, SaveHandle};
