//! The read and write seams between the UI and the data layer.
//!
//! The UI never talks to an adapter directly. It asks a [`StateProvider`] for
//! the data of an operation and hands form submissions to a
//! [`StateProcessor`]. Both are object-safe and injected into a
//! [`CrudDefinition`](crate::CrudDefinition) as `Arc<dyn ...>`.

use async_trait::async_trait;
use leafy_core::LeafyResult;
use serde::Serialize;
use serde_json::Value;

use crate::operation::{Operation, RequestParameters};
use crate::pagination::PaginatedResults;

/// What a provider returns for an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderResult {
    /// A page of display rows.
    Paginated(PaginatedResults<Value>),
    /// One serialized entity.
    Entity(Value),
    /// Nothing to show. Serialized as `null`.
    Empty,
}

impl ProviderResult {
    /// Returns the page, if this is a paginated result.
    pub const fn as_paginated(&self) -> Option<&PaginatedResults<Value>> {
        match self {
            Self::Paginated(page) => Some(page),
            Self::Entity(_) | Self::Empty => None,
        }
    }

    /// Returns the entity, if this is a single-entity result.
    pub const fn as_entity(&self) -> Option<&Value> {
        match self {
            Self::Entity(value) => Some(value),
            Self::Paginated(_) | Self::Empty => None,
        }
    }

    /// Returns `true` for [`ProviderResult::Empty`].
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Answers read operations.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use leafy_admin::{Operation, ProviderResult, RequestParameters, StateProvider};
/// use leafy_core::LeafyResult;
///
/// struct Motd;
///
/// #[async_trait]
/// impl StateProvider for Motd {
///     async fn provide(
///         &self,
///         operation: Operation,
///         _params: &RequestParameters,
///     ) -> LeafyResult<ProviderResult> {
///         Ok(match operation {
///             Operation::View => ProviderResult::Entity(serde_json::json!("hello")),
///             _ => ProviderResult::Empty,
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait StateProvider: Send + Sync {
    /// Returns the data displayed for `operation`.
    async fn provide(
        &self,
        operation: Operation,
        params: &RequestParameters,
    ) -> LeafyResult<ProviderResult>;
}

/// Applies write operations.
#[async_trait]
pub trait StateProcessor: Send + Sync {
    /// Applies `operation` with the submitted form `data`, if any.
    async fn process(
        &self,
        data: Option<Value>,
        operation: Operation,
        params: &RequestParameters,
    ) -> LeafyResult<()>;
}
