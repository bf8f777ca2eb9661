//! REST adapter for a single catalog resource.
//!
//! [`EntityAdapter`] translates the five logical CRUD operations into exactly
//! one HTTP call each against a fixed collection URL:
//!
//! | Operation | Request |
//! |---|---|
//! | [`list`](EntityAdapter::list) | `GET {base}?offset=..&limit=..` |
//! | [`get`](EntityAdapter::get) | `GET {base}/{id}` |
//! | [`add`](EntityAdapter::add) | `POST {base}` |
//! | [`add_fields`](EntityAdapter::add_fields) | `POST {base}` |
//! | [`update`](EntityAdapter::update) | `PATCH {base}/{id}` |
//! | [`patch_fields`](EntityAdapter::patch_fields) | `PATCH {base}/{id}` |
//! | [`remove`](EntityAdapter::remove) | `DELETE {base}/{id}` |
//!
//! The adapter holds no state besides the HTTP client handle and the URL. It
//! never retries, never caches and sets no timeout of its own.

use std::fmt;
use std::marker::PhantomData;

use leafy_core::{LeafyError, LeafyResult};
use reqwest::{Client, Method, Response};
use serde_json::{Map, Value};
use url::Url;

use crate::entity::Entity;

/// CRUD access to one REST collection of `T`.
///
/// Adapters are cheap to clone: the underlying [`reqwest::Client`] is
/// reference-counted, so one client can be shared by every adapter of an
/// application.
pub struct EntityAdapter<T: Entity> {
    client: Client,
    base: Url,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> EntityAdapter<T> {
    /// Creates an adapter for `{api_base_url}/{resource}`.
    ///
    /// # Errors
    ///
    /// Returns [`LeafyError::ConfigurationError`] when the resulting URL is not
    /// an absolute, hierarchical URL (e.g. `http://host/books`).
    pub fn new(client: Client, api_base_url: &str, resource: &str) -> LeafyResult<Self> {
        let raw = format!(
            "{}/{}",
            api_base_url.trim_end_matches('/'),
            resource.trim_matches('/')
        );
        let base = Url::parse(&raw).map_err(|e| {
            LeafyError::ConfigurationError(format!("Invalid resource URL '{raw}': {e}"))
        })?;
        if base.cannot_be_a_base() {
            return Err(LeafyError::ConfigurationError(format!(
                "Resource URL '{raw}' cannot hold path segments"
            )));
        }
        Ok(Self {
            client,
            base,
            _entity: PhantomData,
        })
    }

    /// Returns the collection URL.
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetches a window of the collection, in server order.
    ///
    /// The backend may cap `limit`; callers that need every record should not
    /// assume more than the backend maximum comes back.
    pub async fn list(&self, offset: usize, limit: usize) -> LeafyResult<Vec<T>> {
        let request = self
            .client
            .get(self.base.clone())
            .query(&[("offset", offset), ("limit", limit)]);
        let response = self.send(Method::GET, &self.base, request).await?;
        let response = ensure_success(response).await?;
        response.json::<Vec<T>>().await.map_err(transport)
    }

    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Any non-success status is reported as [`LeafyError::NotFound`], naming
    /// the entity type and the requested id.
    pub async fn get(&self, id: &T::Id) -> LeafyResult<T> {
        let url = self.item_url(id);
        let request = self.client.get(url.clone());
        let response = self.send(Method::GET, &url, request).await?;
        if !response.status().is_success() {
            return Err(LeafyError::not_found(T::NAME, id));
        }
        response.json::<T>().await.map_err(transport)
    }

    /// Creates a new entity. Any id present on `entity` is not sent.
    pub async fn add(&self, entity: &T) -> LeafyResult<()> {
        let mut payload = entity.clone();
        payload.set_id(None);
        let request = self.client.post(self.base.clone()).json(&payload);
        let response = self.send(Method::POST, &self.base, request).await?;
        ensure_success(response).await.map(drop)
    }

    /// Updates an existing entity, addressed by its own id.
    ///
    /// # Errors
    ///
    /// Returns [`LeafyError::MissingIdentifier`] without any I/O when `entity`
    /// has no id.
    pub async fn update(&self, entity: &T) -> LeafyResult<()> {
        let id = entity
            .id()
            .ok_or_else(|| LeafyError::MissingIdentifier(T::NAME.to_string()))?;
        let url = self.item_url(id);
        let request = self.client.patch(url.clone()).json(entity);
        let response = self.send(Method::PATCH, &url, request).await?;
        ensure_success(response).await.map(drop)
    }

    /// Creates a new entity from a raw field map.
    ///
    /// Only the given fields are sent, so the backend applies its own
    /// defaults to the rest. An `id` key is stripped.
    pub async fn add_fields(&self, mut fields: Map<String, Value>) -> LeafyResult<()> {
        fields.remove("id");
        let request = self.client.post(self.base.clone()).json(&fields);
        let response = self.send(Method::POST, &self.base, request).await?;
        ensure_success(response).await.map(drop)
    }

    /// Partially updates the entity `id` with a raw field map.
    ///
    /// Only the given fields are sent, with `id` set to the addressed id.
    /// Unlike [`update`](Self::update), fields left out keep their stored
    /// values on the backend.
    pub async fn patch_fields(
        &self,
        id: &T::Id,
        mut fields: Map<String, Value>,
    ) -> LeafyResult<()> {
        fields.insert("id".to_string(), serde_json::to_value(id)?);
        let url = self.item_url(id);
        let request = self.client.patch(url.clone()).json(&fields);
        let response = self.send(Method::PATCH, &url, request).await?;
        ensure_success(response).await.map(drop)
    }

    /// Deletes an entity by id.
    pub async fn remove(&self, id: &T::Id) -> LeafyResult<()> {
        let url = self.item_url(id);
        let request = self.client.delete(url.clone());
        let response = self.send(Method::DELETE, &url, request).await?;
        ensure_success(response).await.map(drop)
    }

    /// Builds `{base}/{id}`, percent-encoding the id as one path segment.
    fn item_url(&self, id: &T::Id) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: &Url,
        request: reqwest::RequestBuilder,
    ) -> LeafyResult<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(entity = T::NAME, %method, %url, error = %e, "request failed");
            transport(e)
        })?;
        tracing::debug!(
            entity = T::NAME,
            %method,
            %url,
            status = response.status().as_u16(),
            "backend responded"
        );
        Ok(response)
    }
}

impl<T: Entity> Clone for EntityAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base: self.base.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> fmt::Debug for EntityAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityAdapter")
            .field("entity", &T::NAME)
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

/// Passes 2xx responses through and turns anything else into [`LeafyError::Status`].
async fn ensure_success(response: Response) -> LeafyResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(LeafyError::Status {
        status: status.as_u16(),
        message,
    })
}

fn transport(err: reqwest::Error) -> LeafyError {
    if err.is_decode() {
        LeafyError::Serialization(err.to_string())
    } else {
        LeafyError::Http(err.to_string())
    }
}
