//! Dashboard registry and router generation.
//!
//! The [`Dashboard`] groups the registered [`CrudDefinition`]s under one
//! brand and serves them as a JSON API:
//!
//! - `GET /` - brand, locale and the registered CRUDs
//! - `GET /{crud}/schema` - fields, actions and operations of a CRUD
//! - `GET /{crud}/{operation}` - the provider's answer (query string as params)
//! - `POST /{crud}/{operation}` - a submission (optional JSON body as data)
//!
//! Routes are nested under the configured root URL.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use leafy_core::{LeafyError, LeafyResult, Settings};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::crud::{CrudDefinition, CrudLabel, CrudSchema};
use crate::operation::{Operation, RequestParameters};
use crate::state::ProviderResult;

/// One menu entry of the dashboard index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrudEntry {
    pub name: String,
    pub label: CrudLabel,
    /// Link to the CRUD's list page.
    pub url: String,
}

/// Response of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardIndex {
    pub brand_name: String,
    pub app_name: String,
    pub default_locale: String,
    pub root_url: String,
    pub cruds: Vec<CrudEntry>,
}

/// The admin dashboard: a named, ordered set of CRUDs.
///
/// # Examples
///
/// ```
/// use leafy_admin::Dashboard;
///
/// let dashboard = Dashboard::new("Leafy ILS").root_url("/admin");
/// assert_eq!(dashboard.crud_count(), 0);
/// let _router = dashboard.into_axum_router();
/// ```
pub struct Dashboard {
    brand_name: String,
    app_name: String,
    root_url: String,
    default_locale: String,
    /// Registration order is menu order.
    cruds: Vec<Arc<CrudDefinition>>,
}

impl Dashboard {
    /// Creates an empty dashboard with the default app name, root URL and
    /// locale.
    pub fn new(brand_name: impl Into<String>) -> Self {
        let defaults = Settings::default();
        Self {
            brand_name: brand_name.into(),
            app_name: defaults.app_name,
            root_url: defaults.root_url,
            default_locale: defaults.default_locale,
            cruds: Vec::new(),
        }
    }

    /// Creates an empty dashboard configured from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.brand_name.clone())
            .app_name(settings.app_name.clone())
            .root_url(&settings.root_url)
            .default_locale(settings.default_locale.clone())
    }

    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Sets the URL prefix of every route. Trailing slashes are dropped; an
    /// empty prefix serves at the root.
    #[must_use]
    pub fn root_url(mut self, root: &str) -> Self {
        self.root_url = root.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn root_url_str(&self) -> &str {
        &self.root_url
    }

    /// Registers a CRUD, replacing any CRUD of the same name in place.
    pub fn register(&mut self, crud: CrudDefinition) {
        let crud = Arc::new(crud);
        if let Some(slot) = self.cruds.iter_mut().find(|c| c.name() == crud.name()) {
            *slot = crud;
        } else {
            self.cruds.push(crud);
        }
    }

    /// Removes a CRUD by name.
    pub fn unregister(&mut self, name: &str) {
        self.cruds.retain(|c| c.name() != name);
    }

    pub fn get(&self, name: &str) -> Option<&CrudDefinition> {
        self.cruds.iter().find(|c| c.name() == name).map(AsRef::as_ref)
    }

    /// Looks up a CRUD by name.
    ///
    /// # Errors
    ///
    /// Returns [`LeafyError::UnknownCrud`] if no CRUD has that name.
    pub fn crud(&self, name: &str) -> LeafyResult<&CrudDefinition> {
        self.get(name)
            .ok_or_else(|| LeafyError::UnknownCrud(name.to_string()))
    }

    pub fn crud_names(&self) -> Vec<&str> {
        self.cruds.iter().map(|c| c.name()).collect()
    }

    pub fn crud_count(&self) -> usize {
        self.cruds.len()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Builds the index served at `GET /`.
    pub fn index(&self) -> DashboardIndex {
        DashboardIndex {
            brand_name: self.brand_name.clone(),
            app_name: self.app_name.clone(),
            default_locale: self.default_locale.clone(),
            root_url: self.root_url.clone(),
            cruds: self
                .cruds
                .iter()
                .map(|c| CrudEntry {
                    name: c.name().to_string(),
                    label: c.label_ref().clone(),
                    url: format!("{}/{}/{}", self.root_url, c.name(), Operation::List),
                })
                .collect(),
        }
    }

    /// Returns the schema of a CRUD.
    ///
    /// # Errors
    ///
    /// Returns [`LeafyError::UnknownCrud`] if no CRUD has that name.
    pub fn schema(&self, crud: &str) -> LeafyResult<CrudSchema> {
        Ok(self.crud(crud)?.schema())
    }

    /// Resolves a CRUD and an operation name, then asks the provider.
    ///
    /// # Errors
    ///
    /// Returns [`LeafyError::UnknownCrud`] or [`LeafyError::UnknownOperation`]
    /// for unknown names, and otherwise propagates the provider's error.
    pub async fn provide(
        &self,
        crud: &str,
        operation: &str,
        params: &RequestParameters,
    ) -> LeafyResult<ProviderResult> {
        let crud = self.crud(crud)?;
        let operation: Operation = operation.parse()?;
        crud.provide(operation, params).await
    }

    /// Resolves a CRUD and an operation name, then hands `data` to the
    /// processor.
    ///
    /// # Errors
    ///
    /// Same as [`provide`](Self::provide), with the processor's errors.
    pub async fn process(
        &self,
        crud: &str,
        operation: &str,
        data: Option<Value>,
        params: &RequestParameters,
    ) -> LeafyResult<()> {
        let crud = self.crud(crud)?;
        let operation: Operation = operation.parse()?;
        crud.process(data, operation, params).await
    }

    /// Generates the Axum router serving this dashboard.
    pub fn into_axum_router(self) -> Router {
        let root = self.root_url.clone();
        let routes = Router::new()
            .route("/", get(handle_index))
            .route("/{crud}/schema", get(handle_schema))
            .route("/{crud}/{operation}", get(handle_provide).post(handle_process))
            .with_state(Arc::new(self));

        let router = if root.is_empty() {
            routes
        } else {
            Router::new().nest(&root, routes)
        };
        router.layer(TraceLayer::new_for_http())
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("brand_name", &self.brand_name)
            .field("root_url", &self.root_url)
            .field("cruds", &self.crud_names().join(", "))
            .finish_non_exhaustive()
    }
}

// ── Error mapping ──────────────────────────────────────────────────

/// Turns an error into a JSON response with the error's status code.
fn error_response(err: &LeafyError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::error!(error = %err, status = status.as_u16(), "Request failed");
    } else {
        tracing::warn!(error = %err, status = status.as_u16(), "Request rejected");
    }
    (status, Json(serde_json::json!({"error": err.to_string()}))).into_response()
}

// ── Handlers ───────────────────────────────────────────────────────

/// Handler for `GET /`.
async fn handle_index(State(state): State<Arc<Dashboard>>) -> impl IntoResponse {
    Json(state.index())
}

/// Handler for `GET /{crud}/schema`.
async fn handle_schema(
    State(state): State<Arc<Dashboard>>,
    Path(crud): Path<String>,
) -> Response {
    match state.schema(&crud) {
        Ok(schema) => Json(schema).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Handler for `GET /{crud}/{operation}`.
async fn handle_provide(
    State(state): State<Arc<Dashboard>>,
    Path((crud, operation)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let params: RequestParameters = query.into_iter().collect();
    match state.provide(&crud, &operation, &params).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Handler for `POST /{crud}/{operation}`. An empty body means no data.
async fn handle_process(
    State(state): State<Arc<Dashboard>>,
    Path((crud, operation)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let params: RequestParameters = query.into_iter().collect();
    let data = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Some(value),
            Err(e) => return error_response(&LeafyError::from(e)),
        }
    };
    match state.process(&crud, &operation, data, &params).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&e),
    }
}
