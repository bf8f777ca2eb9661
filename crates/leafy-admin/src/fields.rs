//! Field descriptors for CRUD forms and list columns.
//!
//! A [`FieldDescriptor`] names an entity attribute and tells the UI how to
//! render it. Descriptors are plain data built once at startup.

use leafy_core::utils::text::humanize_field;
use serde::{Deserialize, Serialize};

/// The widget used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text. List views truncate these values.
    Textarea,
    /// Numeric input.
    Number,
    /// Date picker.
    Date,
    /// Boolean checkbox.
    Checkbox,
}

/// Optional hints attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Placeholder shown in an empty input.
    pub placeholder: Option<String>,
    /// Help text displayed below the input.
    pub help: Option<String>,
    /// Whether the list view can be sorted on this column.
    pub sortable: bool,
}

/// Describes one attribute of an entity as shown by the admin UI.
///
/// # Examples
///
/// ```
/// use leafy_admin::fields::{FieldDescriptor, FieldKind};
///
/// let title = FieldDescriptor::text("title")
///     .placeholder("Enter the book's title")
///     .sortable();
/// assert_eq!(title.label, "Title");
/// assert_eq!(title.kind, FieldKind::Text);
/// assert!(title.options.sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// The attribute name, as serialized by the entity.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Rendering widget.
    pub kind: FieldKind,
    /// Rendering hints.
    pub options: FieldOptions,
}

impl FieldDescriptor {
    /// Creates a descriptor whose label is derived from the name
    /// (`category_age` becomes `Category age`).
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let label = humanize_field(&name);
        Self {
            name,
            label,
            kind,
            options: FieldOptions::default(),
        }
    }

    /// Shorthand for a [`FieldKind::Text`] field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Shorthand for a [`FieldKind::Textarea`] field.
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Textarea)
    }

    /// Shorthand for a [`FieldKind::Number`] field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// Shorthand for a [`FieldKind::Date`] field.
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Shorthand for a [`FieldKind::Checkbox`] field.
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox)
    }

    /// Overrides the derived label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the input placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.options.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.options.help = Some(help.into());
        self
    }

    /// Marks the column as sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.options.sortable = true;
        self
    }

    /// Returns `true` if list views truncate this field.
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, FieldKind::Textarea)
    }
}
