//! Form field declarations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Values entered for one form, keyed by field name
pub type FormValues = HashMap<String, Value>;

/// Kind of input a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Input,
    Select,
    Checkbox,
    Textarea,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Input => "input",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Textarea => "textarea",
        }
    }

    /// Whether the field takes free text
    pub fn is_text(&self) -> bool {
        matches!(self, FieldType::Input | FieldType::Textarea)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a choice option (string or number)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(serde_json::Number),
    Text(String),
}

impl OptionValue {
    pub fn to_json(&self) -> Value {
        match self {
            OptionValue::Number(n) => Value::Number(n.clone()),
            OptionValue::Text(s) => Value::String(s.clone()),
        }
    }

    /// Whether a stored form value refers to this option
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (OptionValue::Number(n), Value::Number(v)) => n == v,
            (OptionValue::Text(s), Value::String(v)) => s == v,
            _ => false,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value.into())
    }
}

/// One (value, label) choice of a select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: OptionValue,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<OptionValue>, label: &str) -> Self {
        Self {
            value: value.into(),
            label: label.to_string(),
        }
    }
}

/// Describes a single form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attrs: HashMap<String, Value>,
}

impl FormField {
    fn new(field_type: FieldType, name: &str, label: &str) -> Self {
        Self {
            field_type,
            name: name.to_string(),
            label: label.to_string(),
            placeholder: None,
            required: false,
            disabled: false,
            options: None,
            attrs: HashMap::new(),
        }
    }

    /// Create a single-line text field
    pub fn input(name: &str, label: &str) -> Self {
        Self::new(FieldType::Input, name, label)
    }

    /// Create a multi-line text field
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(FieldType::Textarea, name, label)
    }

    /// Create a boolean field
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(FieldType::Checkbox, name, label)
    }

    /// Create a choice field
    pub fn select(name: &str, label: &str, options: Vec<FieldOption>) -> Self {
        let mut field = Self::new(FieldType::Select, name, label);
        field.options = Some(options);
        field
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    /// Options of a choice field (empty for other kinds)
    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Label of the option matching a stored value
    pub fn option_label_for(&self, value: &Value) -> Option<&str> {
        self.options()
            .iter()
            .find(|opt| opt.value.matches(value))
            .map(|opt| opt.label.as_str())
    }

    /// Input fields carrying `attrs.type = "password"` render masked
    pub fn is_secret(&self) -> bool {
        self.field_type == FieldType::Input
            && self.attrs.get("type").and_then(Value::as_str) == Some("password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_tags() {
        for (ty, tag) in [
            (FieldType::Input, "\"input\""),
            (FieldType::Select, "\"select\""),
            (FieldType::Checkbox, "\"checkbox\""),
            (FieldType::Textarea, "\"textarea\""),
        ] {
            assert_eq!(serde_json::to_string(&ty).unwrap(), tag);
        }
    }

    #[test]
    fn test_unknown_field_type_rejected() {
        let result: Result<FieldType, _> = serde_json::from_str("\"radio\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_minimal_field() {
        let field: FormField =
            serde_json::from_value(json!({"type": "input", "name": "name", "label": "Name"}))
                .unwrap();
        assert_eq!(field.field_type, FieldType::Input);
        assert!(!field.required);
        assert!(!field.disabled);
        assert!(field.options().is_empty());
        assert!(field.attrs.is_empty());
    }

    #[test]
    fn test_deserialize_mixed_option_values() {
        let field: FormField = serde_json::from_value(json!({
            "type": "select",
            "name": "rating",
            "label": "Rating",
            "options": [
                {"value": 1, "label": "One"},
                {"value": "two", "label": "Two"}
            ]
        }))
        .unwrap();
        assert_eq!(field.options()[0].value, OptionValue::from(1));
        assert_eq!(field.options()[1].value, OptionValue::from("two"));
    }

    #[test]
    fn test_option_label_lookup_respects_value_kind() {
        let field = FormField::select(
            "rating",
            "Rating",
            vec![FieldOption::new(1, "One"), FieldOption::new("1", "Text one")],
        );
        assert_eq!(field.option_label_for(&json!(1)), Some("One"));
        assert_eq!(field.option_label_for(&json!("1")), Some("Text one"));
        assert_eq!(field.option_label_for(&json!(true)), None);
    }

    #[test]
    fn test_password_attr_marks_secret() {
        let field = FormField::input("password", "Password").with_attr("type", "password");
        assert!(field.is_secret());
        assert!(!FormField::input("name", "Name").is_secret());
    }
}
