//! Adapter-backed providers and processors.
//!
//! [`AdapterStateProvider`] and [`AdapterStateProcessor`] connect the UI
//! seams to one [`EntityAdapter`]. Each UI interaction costs at most one
//! backend round trip; list pagination is done client-side over the first
//! `fetch_limit` records.

use async_trait::async_trait;
use leafy_client::{Entity, EntityAdapter};
use leafy_core::{LeafyError, LeafyResult, Settings};
use serde_json::{Map, Value};

use crate::display::DisplayOptions;
use crate::operation::{Operation, RequestParameters};
use crate::pagination::PaginatedResults;
use crate::state::{ProviderResult, StateProcessor, StateProvider};

/// Parameters of the list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Rows per page.
    pub page_size: usize,
    /// Records requested from the backend per list call.
    pub fetch_limit: usize,
    /// Row rendering.
    pub display: DisplayOptions,
}

impl ListOptions {
    /// List options from the loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            page_size: settings.items_per_page,
            fetch_limit: settings.fetch_limit,
            display: DisplayOptions::from_settings(settings),
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Read path for one entity type.
#[derive(Debug, Clone)]
pub struct AdapterStateProvider<T: Entity> {
    adapter: EntityAdapter<T>,
    options: ListOptions,
}

impl<T: Entity> AdapterStateProvider<T> {
    pub const fn new(adapter: EntityAdapter<T>, options: ListOptions) -> Self {
        Self { adapter, options }
    }

    pub const fn options(&self) -> &ListOptions {
        &self.options
    }

    async fn list(&self, params: &RequestParameters) -> LeafyResult<ProviderResult> {
        // Validate before touching the network.
        let page = params.page()?;
        let entities = self.adapter.list(0, self.options.fetch_limit).await?;
        let page = PaginatedResults::paginate(entities, page, self.options.page_size)
            .try_map(|entity| {
                serde_json::to_value(entity).map(|row| self.options.display.render(row))
            })?;
        Ok(ProviderResult::Paginated(page))
    }

    async fn entity(&self, params: &RequestParameters, key: &str) -> LeafyResult<ProviderResult> {
        let id = params.entity_id::<T>(key)?;
        let entity = self.adapter.get(&id).await?;
        Ok(ProviderResult::Entity(serde_json::to_value(entity)?))
    }
}

#[async_trait]
impl<T: Entity> StateProvider for AdapterStateProvider<T> {
    async fn provide(
        &self,
        operation: Operation,
        params: &RequestParameters,
    ) -> LeafyResult<ProviderResult> {
        tracing::info!(entity = T::NAME, %operation, ?params, "Providing state");
        match operation {
            Operation::List => self.list(params).await,
            Operation::View | Operation::Edit => self.entity(params, "id").await,
            Operation::EntityView => self.entity(params, "field_value").await,
            Operation::New | Operation::Delete => {
                tracing::error!(entity = T::NAME, %operation, "Operation has no state to provide");
                Ok(ProviderResult::Empty)
            }
        }
    }
}

/// Write path for one entity type.
#[derive(Debug, Clone)]
pub struct AdapterStateProcessor<T: Entity> {
    adapter: EntityAdapter<T>,
}

impl<T: Entity> AdapterStateProcessor<T> {
    pub const fn new(adapter: EntityAdapter<T>) -> Self {
        Self { adapter }
    }
}

/// Returns the submitted field map after checking that it decodes as `T`.
///
/// The map itself, not the decoded `T`, is what gets sent, so fields the
/// user left out are never filled in with local defaults.
fn submitted_fields<T: Entity>(
    data: Option<Value>,
    operation: Operation,
) -> LeafyResult<Map<String, Value>> {
    let Some(Value::Object(fields)) = data else {
        return Err(LeafyError::InvalidParameter(format!(
            "\"{operation}\" on {} needs a JSON object of fields.",
            T::NAME
        )));
    };
    serde_json::from_value::<T>(Value::Object(fields.clone()))?;
    Ok(fields)
}

#[async_trait]
impl<T: Entity> StateProcessor for AdapterStateProcessor<T> {
    async fn process(
        &self,
        data: Option<Value>,
        operation: Operation,
        params: &RequestParameters,
    ) -> LeafyResult<()> {
        tracing::info!(entity = T::NAME, %operation, ?params, "Processing submission");
        match operation {
            Operation::Delete => {
                let id = params.entity_id::<T>("id")?;
                self.adapter.remove(&id).await
            }
            Operation::Edit => {
                let id = params.entity_id::<T>("id")?;
                let fields = submitted_fields::<T>(data, operation)?;
                self.adapter.patch_fields(&id, fields).await
            }
            Operation::New => {
                let fields = submitted_fields::<T>(data, operation)?;
                self.adapter.add_fields(fields).await
            }
            Operation::List | Operation::View | Operation::EntityView => {
                tracing::error!(
                    entity = T::NAME,
                    %operation,
                    "Operation does not process submissions"
                );
                Ok(())
            }
        }
    }
}
