//! List-view display rows.
//!
//! Before a page is handed to the UI, each entity is turned into a JSON row:
//! null values and declared columns absent from the entity show the
//! placeholder, and long text columns are shortened at a word boundary.

use leafy_core::utils::text::truncate_at_word;
use leafy_core::Settings;
use serde_json::Value;

use crate::fields::FieldDescriptor;

/// How entity values are rendered in list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Shown in place of null values.
    pub placeholder: String,
    /// Character budget for truncated columns.
    pub truncate_length: usize,
    /// Declared list columns.
    pub columns: Vec<String>,
    /// Columns whose text is truncated.
    pub truncated: Vec<String>,
}

impl DisplayOptions {
    /// Display options with no declared column.
    pub fn new(placeholder: impl Into<String>, truncate_length: usize) -> Self {
        Self {
            placeholder: placeholder.into(),
            truncate_length,
            columns: Vec::new(),
            truncated: Vec::new(),
        }
    }

    /// Display options from the loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.null_placeholder.clone(), settings.truncate_length)
    }

    /// Declares the list columns; textarea fields are truncated.
    #[must_use]
    pub fn with_fields(mut self, fields: &[FieldDescriptor]) -> Self {
        self.columns = fields.iter().map(|f| f.name.clone()).collect();
        self.truncated = fields
            .iter()
            .filter(|f| f.is_truncated())
            .map(|f| f.name.clone())
            .collect();
        self
    }

    /// Renders one serialized entity as a display row.
    ///
    /// Non-object values are returned unchanged.
    pub fn render(&self, row: Value) -> Value {
        let Value::Object(mut map) = row else {
            return row;
        };

        for (key, value) in &mut map {
            match value {
                Value::Null => *value = Value::String(self.placeholder.clone()),
                Value::String(text) if self.truncated.iter().any(|c| c == key) => {
                    *text = truncate_at_word(text, self.truncate_length);
                }
                _ => {}
            }
        }
        for column in &self.columns {
            if !map.contains_key(column) {
                map.insert(column.clone(), Value::String(self.placeholder.clone()));
            }
        }

        Value::Object(map)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
