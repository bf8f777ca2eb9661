//! Catalog records exchanged with the Leafy ILS REST API.
//!
//! Every record is a flat JSON object. The backend assigns the integer `id`;
//! it is omitted from the payload while a record has none. The bookkeeping
//! columns shared by every table live in [`Audit`] and are flattened into the
//! record on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Identifier type used by every catalog table.
pub type RecordId = i64;

/// Bookkeeping columns shared by every catalog record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audit {
    /// Soft-deletion flag.
    pub archived: bool,
    /// When the record was created.
    pub created_date: Option<NaiveDate>,
    /// When the record was last modified.
    pub last_update_date: Option<NaiveDate>,
}

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub audit: Audit,
    pub title: String,
    pub author: String,
    pub synopsis: Option<String>,
    pub edition: Option<String>,
    pub catalog: Option<String>,
    pub category_type: Option<String>,
    pub category_age: Option<String>,
    pub category_topics: Option<String>,
    /// Serialized as `langage`, the backend's column name.
    #[serde(rename = "langage")]
    pub language: Option<String>,
    /// Cover image URL.
    pub cover: Option<String>,
    /// Whether the book is on the shelf.
    pub available: bool,
}

impl Default for Book {
    fn default() -> Self {
        Self {
            id: None,
            audit: Audit::default(),
            title: String::new(),
            author: String::new(),
            synopsis: None,
            edition: None,
            catalog: None,
            category_type: None,
            category_age: None,
            category_topics: None,
            language: None,
            cover: None,
            available: true,
        }
    }
}

/// A household holding a membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Family {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub audit: Audit,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// A person allowed to borrow books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub audit: Audit,
    /// Whether this member is the family's contact person.
    pub family_referent: bool,
    pub firstname: String,
    pub surname: String,
    pub birthdate: Option<NaiveDate>,
    pub family_id: Option<RecordId>,
}

/// One loan of a book to a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circulation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub audit: Audit,
    pub borrowed_date: NaiveDate,
    #[serde(default)]
    pub returned_date: Option<NaiveDate>,
    #[serde(default)]
    pub book_id: Option<RecordId>,
    #[serde(default)]
    pub member_id: Option<RecordId>,
}

macro_rules! impl_entity {
    ($ty:ty, $name:literal) => {
        impl Entity for $ty {
            type Id = RecordId;
            const NAME: &'static str = $name;

            fn id(&self) -> Option<&RecordId> {
                self.id.as_ref()
            }

            fn set_id(&mut self, id: Option<RecordId>) {
                self.id = id;
            }
        }
    };
}

impl_entity!(Book, "book");
impl_entity!(Family, "family");
impl_entity!(Member, "member");
impl_entity!(Circulation, "circulation");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_without_id_omits_it() {
        let book = Book {
            title: "Le Petit Prince".to_string(),
            author: "Antoine de Saint-Exupéry".to_string(),
            ..Book::default()
        };
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Le Petit Prince");
        assert_eq!(json["archived"], false);
        assert!(json["synopsis"].is_null());
    }

    #[test]
    fn test_book_language_uses_backend_column() {
        let book = Book {
            language: Some("fr".to_string()),
            ..Book::default()
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["langage"], "fr");
        assert!(json.get("language").is_none());
    }

    #[test]
    fn test_book_from_backend_payload() {
        let json = serde_json::json!({
            "id": 3,
            "archived": false,
            "created_date": "2024-03-01",
            "last_update_date": null,
            "title": "Dune",
            "author": "Frank Herbert",
            "synopsis": null,
            "edition": "Pocket",
            "catalog": null,
            "category_type": "novel",
            "category_age": "adult",
            "category_topics": null,
            "langage": "fr",
            "cover": null,
            "available": false
        });
        let book: Book = serde_json::from_value(json).unwrap();
        assert_eq!(book.id(), Some(&3));
        assert_eq!(
            book.audit.created_date,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(book.language.as_deref(), Some("fr"));
        assert!(!book.available);
    }

    #[test]
    fn test_partial_submission_fills_defaults() {
        let book: Book = serde_json::from_value(serde_json::json!({"title": "X"})).unwrap();
        assert_eq!(book.title, "X");
        assert!(book.author.is_empty());
        assert!(book.available);
        assert!(book.id.is_none());
    }

    #[test]
    fn test_circulation_requires_borrowed_date() {
        let result: Result<Circulation, _> =
            serde_json::from_value(serde_json::json!({"book_id": 1}));
        assert!(result.is_err());

        let loan: Circulation = serde_json::from_value(serde_json::json!({
            "borrowed_date": "2024-05-02",
            "book_id": 1,
            "member_id": 2
        }))
        .unwrap();
        assert_eq!(loan.book_id, Some(1));
        assert!(loan.returned_date.is_none());
    }

    #[test]
    fn test_set_id_roundtrip() {
        let mut member = Member::default();
        member.set_id(Some(9));
        assert_eq!(member.id(), Some(&9));
        member.set_id(None);
        assert!(member.id().is_none());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(Family::parse_id(" 12 "), Some(12));
        assert_eq!(Family::parse_id("abc"), None);
    }

    #[test]
    fn test_entity_names() {
        assert_eq!(Book::NAME, "book");
        assert_eq!(Family::NAME, "family");
        assert_eq!(Member::NAME, "member");
        assert_eq!(Circulation::NAME, "circulation");
    }
}
