//! Actions offered by a CRUD.
//!
//! Actions are rendered as buttons. Row actions (edit, delete) receive the
//! row's id as the `id` query parameter; quick-add actions open a creation
//! form without leaving the current page.

use serde::{Deserialize, Serialize};

/// What happens when an action is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    /// Navigates to `url`.
    Navigate { url: String },
    /// Asks for confirmation, then submits a delete to `url`.
    Delete { url: String },
    /// Opens the creation form at `url` inline.
    QuickAdd { url: String },
}

/// A labelled action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Button label.
    pub label: String,
    /// Behavior on click.
    pub kind: ActionKind,
}

impl ActionDescriptor {
    /// A navigation action.
    pub fn navigate(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Navigate { url: url.into() },
        }
    }

    /// A delete action.
    pub fn delete(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Delete { url: url.into() },
        }
    }

    /// A quick-add action.
    pub fn quick_add(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::QuickAdd { url: url.into() },
        }
    }

    /// The target URL, whatever the kind.
    pub fn url(&self) -> &str {
        match &self.kind {
            ActionKind::Navigate { url }
            | ActionKind::Delete { url }
            | ActionKind::QuickAdd { url } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let edit = ActionDescriptor::navigate("Edit", "/admin/books/edit");
        assert_eq!(edit.url(), "/admin/books/edit");
        assert!(matches!(edit.kind, ActionKind::Navigate { .. }));

        let delete = ActionDescriptor::delete("Delete", "/admin/books/delete");
        assert!(matches!(delete.kind, ActionKind::Delete { .. }));

        let add = ActionDescriptor::quick_add("Quick add", "/admin/books/new");
        assert_eq!(add.url(), "/admin/books/new");
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_value(ActionDescriptor::delete("Delete", "/x")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"label": "Delete", "kind": {"type": "delete", "url": "/x"}})
        );
        let back: ActionDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back.label, "Delete");
    }
}
