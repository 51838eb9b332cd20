//! Working copy of a form while it is being edited

use super::config::FormConfig;
use super::field::{FieldType, FormField, FormValues};
use serde_json::Value;

/// Buttons shown on the actions row of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Cancel,
}

impl FormButton {
    pub fn toggle(self) -> Self {
        match self {
            FormButton::Submit => FormButton::Cancel,
            FormButton::Cancel => FormButton::Submit,
        }
    }
}

/// Editing state for one form: its config, the values typed so far and
/// which row has focus. The row after the last field is the actions row.
#[derive(Debug, Clone)]
pub struct FormSession {
    config: FormConfig,
    values: FormValues,
    active_index: usize,
    pub selected_button: FormButton,
    dirty: bool,
}

impl FormSession {
    /// Start editing `config`, seeded with previously stored values
    pub fn new(config: FormConfig, stored: FormValues) -> Self {
        for name in stored.keys().filter(|name| config.field(name).is_none()) {
            tracing::debug!(
                form_id = %config.id,
                field = %name,
                "stored value has no matching field"
            );
        }
        let mut session = Self {
            config,
            values: stored,
            active_index: 0,
            selected_button: FormButton::default(),
            dirty: false,
        };
        if session.active_field().is_some_and(|f| f.disabled) {
            session.next_field();
        }
        session
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn form_id(&self) -> &str {
        &self.config.id
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Whether anything was edited since the session was opened
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Swap in values recorded elsewhere, keeping focus
    pub fn replace_values(&mut self, values: FormValues) {
        self.values = values;
        self.dirty = false;
    }

    /// Mark the current values as matching what was last submitted
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Number of focusable rows, including the actions row
    pub fn row_count(&self) -> usize {
        self.config.fields.len() + 1
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_actions_row_active(&self) -> bool {
        self.active_index == self.config.fields.len()
    }

    pub fn active_field(&self) -> Option<&FormField> {
        self.config.fields.get(self.active_index)
    }

    fn is_focusable(&self, index: usize) -> bool {
        self.config.fields.get(index).map_or(true, |f| !f.disabled)
    }

    /// Move focus forward, skipping disabled fields (wraps around)
    pub fn next_field(&mut self) {
        let count = self.row_count();
        let mut index = self.active_index;
        for _ in 0..count {
            index = (index + 1) % count;
            if self.is_focusable(index) {
                break;
            }
        }
        self.active_index = index;
    }

    /// Move focus backward, skipping disabled fields (wraps around)
    pub fn prev_field(&mut self) {
        let count = self.row_count();
        let mut index = self.active_index;
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if self.is_focusable(index) {
                break;
            }
        }
        self.active_index = index;
    }

    fn editable_field(&self, kinds: &[FieldType]) -> Option<String> {
        self.active_field()
            .filter(|f| !f.disabled && kinds.contains(&f.field_type))
            .map(|f| f.name.clone())
    }

    /// Append a character to the active text field
    pub fn push_char(&mut self, c: char) {
        let Some(name) = self.editable_field(&[FieldType::Input, FieldType::Textarea]) else {
            return;
        };
        let mut text = text_of(self.values.get(&name));
        text.push(c);
        self.values.insert(name, Value::String(text));
        self.dirty = true;
    }

    /// Remove the last character of the active text field
    pub fn pop_char(&mut self) {
        let Some(name) = self.editable_field(&[FieldType::Input, FieldType::Textarea]) else {
            return;
        };
        let mut text = text_of(self.values.get(&name));
        if text.pop().is_some() {
            self.values.insert(name, Value::String(text));
            self.dirty = true;
        }
    }

    /// Flip the active checkbox (an unset checkbox becomes checked)
    pub fn toggle_checkbox(&mut self) {
        let Some(name) = self.editable_field(&[FieldType::Checkbox]) else {
            return;
        };
        let checked = self
            .values
            .get(&name)
            .and_then(Value::as_bool)
            .unwrap_or(false);
        self.values.insert(name, Value::Bool(!checked));
        self.dirty = true;
    }

    /// Select the next (or previous) option of the active select field
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(name) = self.editable_field(&[FieldType::Select]) else {
            return;
        };
        let Some(field) = self.active_field() else {
            return;
        };
        let options = field.options();
        if options.is_empty() {
            return;
        }
        let current = self
            .values
            .get(&name)
            .and_then(|v| options.iter().position(|opt| opt.value.matches(v)));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        let value = options[next].value.to_json();
        self.values.insert(name, value);
        self.dirty = true;
    }

    /// Text to show for a field in the form view
    pub fn display_value(&self, field: &FormField) -> String {
        let value = self.values.get(&field.name);
        match field.field_type {
            FieldType::Checkbox => {
                let checked = value.and_then(Value::as_bool).unwrap_or(false);
                let mark = if checked { "[x]" } else { "[ ]" };
                mark.to_string()
            }
            FieldType::Select => value
                .and_then(|v| field.option_label_for(v))
                .map(str::to_string)
                .unwrap_or_default(),
            FieldType::Input if field.is_secret() => "•".repeat(text_of(value).chars().count()),
            FieldType::Input | FieldType::Textarea => text_of(value),
        }
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldOption, FormField};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_config() -> FormConfig {
        FormConfig::new(
            "sample",
            vec![
                FormField::input("name", "Name"),
                FormField::input("locked", "Locked").disabled(),
                FormField::select(
                    "color",
                    "Color",
                    vec![FieldOption::new("red", "Red"), FieldOption::new("blue", "Blue")],
                ),
                FormField::checkbox("agree", "Agree"),
            ],
        )
    }

    fn session() -> FormSession {
        FormSession::new(sample_config(), FormValues::new())
    }

    #[test]
    fn test_seeded_with_stored_values() {
        let mut stored = FormValues::new();
        stored.insert("name".into(), json!("Ann"));
        let session = FormSession::new(sample_config(), stored.clone());
        assert_eq!(session.values(), &stored);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_replace_values_keeps_focus() {
        let mut s = session();
        s.next_field();
        s.push_char('x');
        let mut fresh = FormValues::new();
        fresh.insert("name".into(), json!("Eve"));
        s.replace_values(fresh.clone());
        assert_eq!(s.values(), &fresh);
        assert_eq!(s.active_index(), 2);
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_navigation_skips_disabled_and_wraps() {
        let mut s = session();
        assert_eq!(s.active_index(), 0);
        s.next_field();
        assert_eq!(s.active_index(), 2);
        s.next_field();
        s.next_field();
        assert!(s.is_actions_row_active());
        s.next_field();
        assert_eq!(s.active_index(), 0);
        s.prev_field();
        assert!(s.is_actions_row_active());
    }

    #[test]
    fn test_initial_focus_skips_disabled_first_field() {
        let config = FormConfig::new(
            "c",
            vec![
                FormField::input("a", "A").disabled(),
                FormField::input("b", "B"),
            ],
        );
        let s = FormSession::new(config, FormValues::new());
        assert_eq!(s.active_index(), 1);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut s = session();
        s.push_char('A');
        s.push_char('n');
        s.push_char('n');
        s.pop_char();
        assert_eq!(s.values().get("name"), Some(&json!("An")));
        assert!(s.is_dirty());
    }

    #[test]
    fn test_typing_ignored_on_non_text_field() {
        let mut s = session();
        s.next_field();
        s.push_char('x');
        assert!(s.values().get("color").is_none());
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_cycle_select_options() {
        let mut s = session();
        s.next_field();
        s.cycle_option(true);
        assert_eq!(s.values().get("color"), Some(&json!("red")));
        s.cycle_option(true);
        assert_eq!(s.values().get("color"), Some(&json!("blue")));
        s.cycle_option(true);
        assert_eq!(s.values().get("color"), Some(&json!("red")));
        s.cycle_option(false);
        assert_eq!(s.values().get("color"), Some(&json!("blue")));
    }

    #[test]
    fn test_toggle_checkbox() {
        let mut s = session();
        s.next_field();
        s.next_field();
        s.toggle_checkbox();
        assert_eq!(s.values().get("agree"), Some(&json!(true)));
        s.toggle_checkbox();
        assert_eq!(s.values().get("agree"), Some(&json!(false)));
    }

    #[test]
    fn test_display_values() {
        let mut stored = FormValues::new();
        stored.insert("color".into(), json!("blue"));
        stored.insert("agree".into(), json!(true));
        let s = FormSession::new(sample_config(), stored);
        let config = sample_config();
        assert_eq!(s.display_value(config.field("color").unwrap()), "Blue");
        assert_eq!(s.display_value(config.field("agree").unwrap()), "[x]");
        assert_eq!(s.display_value(config.field("name").unwrap()), "");
    }

    #[test]
    fn test_secret_input_is_masked() {
        let config = FormConfig::new(
            "c",
            vec![FormField::input("pw", "Password").with_attr("type", "password")],
        );
        let mut stored = FormValues::new();
        stored.insert("pw".into(), json!("hunter2"));
        let s = FormSession::new(config.clone(), stored);
        assert_eq!(s.display_value(&config.fields[0]), "•••••••");
    }

    #[test]
    fn test_button_toggle() {
        assert_eq!(FormButton::Submit.toggle(), FormButton::Cancel);
        assert_eq!(FormButton::Cancel.toggle(), FormButton::Submit);
    }
}
