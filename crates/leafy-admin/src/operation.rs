//! Operation names and request parameters.
//!
//! The UI addresses a CRUD with an operation name and a loosely typed
//! parameter map. Operation names form a closed set, so every dispatcher
//! matches on [`Operation`] exhaustively.

use std::fmt;
use std::str::FromStr;

use leafy_client::Entity;
use leafy_core::{LeafyError, LeafyResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A CRUD operation requested by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Paginated list of entities.
    List,
    /// Read-only detail page of one entity.
    View,
    /// Edit form for one entity (read) or its submission (write).
    Edit,
    /// Creation form submission.
    New,
    /// Deletion of one entity.
    Delete,
    /// Detail of one entity addressed by a field value.
    EntityView,
}

impl Operation {
    /// Every operation, in the order they appear in a CRUD menu.
    pub const ALL: [Self; 6] = [
        Self::List,
        Self::View,
        Self::Edit,
        Self::New,
        Self::Delete,
        Self::EntityView,
    ];

    /// Returns the wire name of this operation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::View => "view",
            Self::Edit => "edit",
            Self::New => "new",
            Self::Delete => "delete",
            Self::EntityView => "entity_view",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = LeafyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| LeafyError::UnknownOperation(s.to_string()))
    }
}

/// Loosely typed parameters accompanying an operation (`page`, `id`,
/// `field_value`, ...).
///
/// Values may arrive as JSON strings or numbers; accessors render scalars to
/// text before parsing, so `{"page": 2}` and `{"page": "2"}` are equivalent.
///
/// # Examples
///
/// ```
/// use leafy_admin::RequestParameters;
///
/// let params = RequestParameters::new().with("page", "3");
/// assert_eq!(params.page().unwrap(), 3);
/// assert_eq!(RequestParameters::new().page().unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParameters(serde_json::Map<String, Value>);

impl RequestParameters {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw value of a parameter.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a scalar parameter rendered as text. Null, arrays and objects
    /// yield `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Returns the 1-based page number; a missing page means the first one.
    ///
    /// # Errors
    ///
    /// Returns [`LeafyError::InvalidParameter`] if the page is not a positive
    /// integer.
    pub fn page(&self) -> LeafyResult<usize> {
        let Some(raw) = self.get_str("page") else {
            return Ok(1);
        };
        match raw.trim().parse::<usize>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(LeafyError::InvalidParameter(format!(
                "Invalid \"page\" value: expected a positive integer, got \"{raw}\"."
            ))),
        }
    }

    /// Parses the identifier of `T` stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LeafyError::InvalidParameter`] if the parameter is missing or
    /// does not parse as `T::Id`.
    pub fn entity_id<T: Entity>(&self, key: &str) -> LeafyResult<T::Id> {
        let raw = self.get_str(key).ok_or_else(|| {
            LeafyError::InvalidParameter(format!("Missing \"{key}\" parameter for {}.", T::NAME))
        })?;
        T::parse_id(&raw).ok_or_else(|| {
            LeafyError::InvalidParameter(format!(
                "Invalid \"{key}\" value for {}: \"{raw}\".",
                T::NAME
            ))
        })
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
