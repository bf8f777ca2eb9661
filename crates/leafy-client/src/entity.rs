//! The [`Entity`] trait.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record exchanged with the catalog REST API.
///
/// An entity carries one identifying attribute assigned by the backend. It is
/// `None` on a record that has not been created yet and must be present on
/// anything sent for update or deletion. Implementors should skip the id when
/// serializing a record that has none, so that create payloads never carry it.
///
/// # Examples
///
/// ```
/// use leafy_client::Entity;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Shelf {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     id: Option<u32>,
///     label: String,
/// }
///
/// impl Entity for Shelf {
///     type Id = u32;
///     const NAME: &'static str = "shelf";
///
///     fn id(&self) -> Option<&u32> {
///         self.id.as_ref()
///     }
///
///     fn set_id(&mut self, id: Option<u32>) {
///         self.id = id;
///     }
/// }
/// ```
pub trait Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// The identifier type: a string or an integer in practice.
    type Id: Clone + Debug + Display + FromStr + Serialize + DeserializeOwned + Send + Sync;

    /// The entity type name, used in log lines and error messages.
    const NAME: &'static str;

    /// Returns the backend-assigned identifier, if any.
    fn id(&self) -> Option<&Self::Id>;

    /// Replaces the identifier.
    fn set_id(&mut self, id: Option<Self::Id>);

    /// Parses an identifier received as text (path segment, form value).
    fn parse_id(raw: &str) -> Option<Self::Id> {
        raw.trim().parse().ok()
    }
}
