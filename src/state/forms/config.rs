//! Form configuration shape

use super::field::FormField;
use serde::{Deserialize, Serialize};

const DEFAULT_SUBMIT_LABEL: &str = "Submit";
const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// A renderable form: identifier, title and ordered fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub fields: Vec<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_label: Option<String>,
}

impl FormConfig {
    pub fn new(id: &str, fields: Vec<FormField>) -> Self {
        Self {
            id: id.to_string(),
            title: None,
            fields,
            submit_label: None,
            cancel_label: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_labels(mut self, submit: &str, cancel: &str) -> Self {
        self.submit_label = Some(submit.to_string());
        self.cancel_label = Some(cancel.to_string());
        self
    }

    /// Title to show, falling back to the form id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    pub fn submit_label(&self) -> &str {
        self.submit_label.as_deref().unwrap_or(DEFAULT_SUBMIT_LABEL)
    }

    pub fn cancel_label(&self) -> &str {
        self.cancel_label.as_deref().unwrap_or(DEFAULT_CANCEL_LABEL)
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
